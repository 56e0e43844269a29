//! # The Container — heart of Rabita
//!
//! The registry mapping component identities to providers, and the
//! resolution entry points that walk it.
//!
//! # Architecture
//! ```text
//! bind::<I>() ── and::<J>() ──> to::<Impl>() / to_function / to_constant
//!                                   │
//!                           InstanceStorage (one per bind call)
//!                                   │
//!     get::<I>() ──────────> ProviderEntry<I> ── produce ──> Arc<I>
//! ```
//!
//! # Examples
//! ```rust
//! use rabita_container::prelude::*;
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, msg: &str);
//! }
//!
//! struct ConsoleLogger;
//! impl Logger for ConsoleLogger {
//!     fn log(&self, msg: &str) { println!("{msg}"); }
//! }
//! injectable!(ConsoleLogger);
//! implements!(ConsoleLogger: dyn Logger);
//!
//! struct UserService {
//!     logger: Arc<dyn Logger>,
//! }
//! injectable!(UserService { logger: Arc<dyn Logger> });
//!
//! let mut container = Container::new();
//! container.bind::<dyn Logger>().to::<ConsoleLogger>().in_singleton_scope();
//! container.bind::<UserService>().to_self();
//!
//! let service = container.get::<UserService>().expect("resolution failed");
//! service.logger.log("resolved");
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::builder::ComponentBuilder;
use crate::context::ResolutionContext;
use crate::error::{RabitaError, Result};
use crate::inject::Resolvable;
use crate::key::ComponentKey;
use crate::module::Module;
use crate::provider::ProviderEntry;

pub(crate) type ErasedEntry = Arc<dyn Any + Send + Sync>;

// ═══════════════════════════════════════════
// Container
// ═══════════════════════════════════════════

/// Registry of bindings plus the resolution entry points.
///
/// Bindings are added through `&mut self` during configuration; resolution
/// borrows `&self`, so the binding map is read-only while any resolution is
/// in flight.
///
/// A container may be created with a parent, establishing a fallback chain:
/// single resolution prefers local bindings (a child shadows its parent),
/// collection resolution concatenates local providers before inherited ones.
/// The parent is borrowed, not owned — it must outlive the child.
pub struct Container<'p> {
    parent: Option<&'p Container<'p>>,
    bindings: HashMap<ComponentKey, Vec<ErasedEntry>>,
}

impl<'p> Container<'p> {
    /// Creates an empty root container.
    pub fn new() -> Self {
        Self {
            parent: None,
            bindings: HashMap::new(),
        }
    }

    /// Creates a container that falls back to `parent` for identities it
    /// does not bind itself.
    pub fn with_parent(parent: &'p Container<'p>) -> Self {
        Self {
            parent: Some(parent),
            bindings: HashMap::new(),
        }
    }

    // ── Configuration ──

    /// Opens a binding for the identity `I`.
    ///
    /// Stack further identities with [`and`](ComponentBuilder::and), then
    /// close the binding with `to`, `to_function`, `to_constant` or
    /// `to_self`.
    pub fn bind<I: ?Sized + 'static>(&mut self) -> ComponentBuilder<'_, 'p, (PhantomData<I>, ())> {
        ComponentBuilder::new(self)
    }

    /// Applies a [`Module`]'s bindings.
    pub fn install(&mut self, module: &dyn Module) {
        debug!(module = module.name(), "installing module");
        module.register(self);
    }

    pub(crate) fn add_provider_entry<I: ?Sized + 'static>(
        &mut self,
        key: ComponentKey,
        entry: ProviderEntry<I>,
    ) {
        debug!(component = %key, "registered provider");
        self.bindings.entry(key).or_default().push(Arc::new(entry));
    }

    // ── Resolution ──

    /// Resolves the first provider bound for `I` as a fresh top-level
    /// request.
    ///
    /// # Errors
    /// [`RabitaError::ComponentNotFound`] when no provider for `I` exists
    /// here or anywhere up the parent chain.
    pub fn get<I: ?Sized + 'static>(&self) -> Result<Arc<I>> {
        let mut ctx = ResolutionContext::new(self, ComponentKey::unspecified());
        self.get_with(&mut ctx)
    }

    /// Resolves every provider bound for `I` as a fresh top-level request.
    ///
    /// Zero providers yield an empty vector, never an error.
    pub fn get_all<I: ?Sized + 'static>(&self) -> Result<Vec<Arc<I>>> {
        let mut ctx = ResolutionContext::new(self, ComponentKey::of::<I>());
        self.get_all_with(&mut ctx)
    }

    /// Recursive single resolution within an in-progress construction.
    pub fn get_with<I: ?Sized + 'static>(
        &self,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<Arc<I>> {
        let key = ComponentKey::of::<I>();
        trace!(component = %key, "resolving component");

        match self.first_entry::<I>(&key) {
            Some(entry) => entry.produce(ctx),
            None => Err(RabitaError::ComponentNotFound(key)),
        }
    }

    /// Recursive collection resolution within an in-progress construction.
    pub fn get_all_with<I: ?Sized + 'static>(
        &self,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<Vec<Arc<I>>> {
        let key = ComponentKey::of::<I>();
        let mut slots = Vec::new();
        self.collect_entries(&key, &mut slots);
        trace!(component = %key, providers = slots.len(), "resolving component collection");

        let mut instances = Vec::with_capacity(slots.len());
        for slot in &slots {
            if let Some(entry) = slot.downcast_ref::<ProviderEntry<I>>() {
                instances.push(entry.produce(ctx)?);
            }
        }
        Ok(instances)
    }

    /// Resolves any [`Resolvable`] request shape: `Arc<I>` for a single
    /// instance, `Vec<Arc<I>>` for the bound collection.
    ///
    /// ```rust,ignore
    /// let one: Arc<dyn Codec> = container.resolve()?;
    /// let all: Vec<Arc<dyn Codec>> = container.resolve()?;
    /// ```
    pub fn resolve<R: Resolvable>(&self) -> Result<R> {
        R::resolve(self)
    }

    // ── Introspection ──

    /// Total number of providers registered locally (parents not counted).
    pub fn provider_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    /// Returns `true` if no local bindings exist.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    // ── Lookup ──

    /// First provider for `key`: local bindings win over the parent chain.
    fn first_entry<I: ?Sized + 'static>(&self, key: &ComponentKey) -> Option<&ProviderEntry<I>> {
        if let Some(slot) = self.bindings.get(key).and_then(|slots| slots.first()) {
            return slot.downcast_ref::<ProviderEntry<I>>();
        }
        self.parent.and_then(|parent| parent.first_entry::<I>(key))
    }

    /// All providers for `key`, local first, then the parent chain.
    fn collect_entries(&self, key: &ComponentKey, out: &mut Vec<ErasedEntry>) {
        if let Some(slots) = self.bindings.get(key) {
            out.extend(slots.iter().cloned());
        }
        if let Some(parent) = self.parent {
            parent.collect_entries(key, out);
        }
    }
}

impl Default for Container<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("identities", &self.bindings.len())
            .field("providers", &self.provider_count())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Container;
    pub use crate::builder::{BindingConfig, ComponentBuilder};
    pub use crate::context::ResolutionContext;
    pub use crate::error::{RabitaError, Result};
    pub use crate::inject::{Injectable, Resolvable};
    pub use crate::key::ComponentKey;
    pub use crate::module::Module;
    pub use crate::scope::Scope;
    pub use crate::{implements, injectable};
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("rabita_container=trace")
            .try_init();
    }

    fn data_ptr<T: ?Sized>(arc: &Arc<T>) -> *const () {
        Arc::as_ptr(arc) as *const ()
    }

    // ── shared fixtures ──

    trait Runner: Send + Sync + std::fmt::Debug {
        fn speed(&self) -> u32;
    }

    #[derive(Debug)]
    struct Cheetah;
    impl Runner for Cheetah {
        fn speed(&self) -> u32 {
            120
        }
    }
    crate::injectable!(Cheetah);
    crate::implements!(Cheetah: dyn Runner);

    // ── simple resolution ──

    #[test]
    fn transient_resolutions_are_distinct() {
        init_tracing();
        let mut c = Container::new();
        c.bind::<dyn Runner>().to::<Cheetah>();

        let first = c.get::<dyn Runner>().unwrap();
        let second = c.get::<dyn Runner>().unwrap();

        assert_eq!(first.speed(), 120);
        assert_ne!(data_ptr(&first), data_ptr(&second));
    }

    #[test]
    fn singleton_resolutions_share_one_instance() {
        let mut c = Container::new();
        c.bind::<dyn Runner>().to::<Cheetah>().in_singleton_scope();

        let first = c.get::<dyn Runner>().unwrap();
        let second = c.get::<dyn Runner>().unwrap();

        assert_eq!(data_ptr(&first), data_ptr(&second));
    }

    #[test]
    fn to_self_resolves_the_concrete_type() {
        let mut c = Container::new();
        c.bind::<Cheetah>().to_self();

        let first = c.get::<Cheetah>().unwrap();
        let second = c.get::<Cheetah>().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn function_factory_counts_constructions() {
        let built = Arc::new(AtomicU32::new(0));

        let mut c = Container::new();
        c.bind::<dyn Runner>().to_function({
            let built = built.clone();
            move |_| {
                built.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Cheetah))
            }
        });

        let _ = c.get::<dyn Runner>().unwrap();
        let _ = c.get::<dyn Runner>().unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn function_factory_singleton_constructs_once() {
        let built = Arc::new(AtomicU32::new(0));

        let mut c = Container::new();
        c.bind::<dyn Runner>()
            .to_function({
                let built = built.clone();
                move |_| {
                    built.fetch_add(1, Ordering::SeqCst);
                    Ok(Arc::new(Cheetah))
                }
            })
            .in_singleton_scope();

        let first = c.get::<dyn Runner>().unwrap();
        let second = c.get::<dyn Runner>().unwrap();

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(data_ptr(&first), data_ptr(&second));
    }

    // ── multi-interface bindings ──

    #[test]
    fn multiple_interfaces_share_single_construction() {
        trait Walker: Send + Sync {
            fn walk(&self) -> u32;
        }
        trait Jumper: Send + Sync {
            fn jump(&self) -> u32;
        }

        #[derive(Debug)]
        struct Human;
        impl Walker for Human {
            fn walk(&self) -> u32 {
                1
            }
        }
        impl Jumper for Human {
            fn jump(&self) -> u32 {
                3
            }
        }
        impl Runner for Human {
            fn speed(&self) -> u32 {
                2
            }
        }
        crate::injectable!(Human);
        crate::implements!(Human: dyn Walker, dyn Jumper, dyn Runner);

        let mut c = Container::new();
        c.bind::<dyn Runner>()
            .and::<dyn Jumper>()
            .and::<dyn Walker>()
            .to::<Human>()
            .in_singleton_scope();

        let walker = c.get::<dyn Walker>().unwrap();
        let runner = c.get::<dyn Runner>().unwrap();
        let jumper = c.get::<dyn Jumper>().unwrap();

        assert_eq!(walker.walk(), 1);
        assert_eq!(runner.speed(), 2);
        assert_eq!(jumper.jump(), 3);
        assert_eq!(data_ptr(&walker), data_ptr(&runner));
        assert_eq!(data_ptr(&walker), data_ptr(&jumper));
    }

    #[test]
    fn multiple_interfaces_transient_construct_separately() {
        trait Walker: Send + Sync {}

        #[derive(Debug)]
        struct Wolf;
        impl Walker for Wolf {}
        impl Runner for Wolf {
            fn speed(&self) -> u32 {
                50
            }
        }
        crate::injectable!(Wolf);
        crate::implements!(Wolf: dyn Walker, dyn Runner);

        let mut c = Container::new();
        c.bind::<dyn Walker>().and::<dyn Runner>().to::<Wolf>();

        let walker = c.get::<dyn Walker>().unwrap();
        let runner = c.get::<dyn Runner>().unwrap();
        assert_ne!(data_ptr(&walker), data_ptr(&runner));
    }

    // ── nested dependencies ──

    #[test]
    fn nested_dependencies_resolve_recursively() {
        trait Nest: Send + Sync {}

        struct SpiderNest;
        impl Nest for SpiderNest {}
        crate::injectable!(SpiderNest);
        crate::implements!(SpiderNest: dyn Nest);

        struct Spider {
            nest: Arc<dyn Nest>,
        }
        crate::injectable!(Spider { nest: Arc<dyn Nest> });

        let mut c = Container::new();
        c.bind::<Spider>().to_self();
        c.bind::<dyn Nest>().to::<SpiderNest>().in_singleton_scope();

        let one = c.get::<Spider>().unwrap();
        let two = c.get::<Spider>().unwrap();

        assert!(!Arc::ptr_eq(&one, &two));
        assert_eq!(data_ptr(&one.nest), data_ptr(&two.nest));
    }

    #[test]
    fn declared_collection_parameter_receives_every_binding() {
        trait Page: Send + Sync {
            fn number(&self) -> usize;
        }

        struct FirstPage;
        impl Page for FirstPage {
            fn number(&self) -> usize {
                1
            }
        }
        crate::injectable!(FirstPage);
        crate::implements!(FirstPage: dyn Page);

        struct SecondPage;
        impl Page for SecondPage {
            fn number(&self) -> usize {
                2
            }
        }
        crate::injectable!(SecondPage);
        crate::implements!(SecondPage: dyn Page);

        struct Book {
            pages: Vec<Arc<dyn Page>>,
        }
        crate::injectable!(Book { pages: Vec<Arc<dyn Page>> });

        let mut c = Container::new();
        c.bind::<dyn Page>().to::<FirstPage>();
        c.bind::<dyn Page>().to::<SecondPage>();
        c.bind::<Book>().to_self();

        let book = c.get::<Book>().unwrap();
        let numbers: Vec<usize> = book.pages.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    // ── missing components ──

    #[test]
    fn missing_component_fails() {
        let c = Container::new();
        match c.get::<dyn Runner>() {
            Err(RabitaError::ComponentNotFound(key)) => {
                assert!(key.type_name().contains("Runner"));
            }
            other => panic!("expected ComponentNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn missing_transitive_dependency_fails() {
        #[derive(Debug)]
        struct WaterPool;
        crate::injectable!(WaterPool);

        #[derive(Debug)]
        struct Swimmer {
            #[allow(dead_code)]
            pool: Arc<WaterPool>,
        }
        crate::injectable!(Swimmer { pool: Arc<WaterPool> });

        let mut c = Container::new();
        c.bind::<Swimmer>().to_self();

        match c.get::<Swimmer>() {
            Err(RabitaError::ComponentNotFound(key)) => {
                assert!(key.type_name().contains("WaterPool"));
            }
            other => panic!("expected ComponentNotFound, got: {other:?}"),
        }
    }

    // ── collections ──

    #[test]
    fn empty_collection_resolves_without_error() {
        let c = Container::new();
        let all = c.get_all::<dyn Runner>().unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn collection_preserves_bind_order_and_shares_singletons() {
        trait Serpent: Send + Sync {
            fn species(&self) -> &'static str;
        }

        macro_rules! serpent {
            ($ty:ident, $name:literal) => {
                struct $ty;
                impl Serpent for $ty {
                    fn species(&self) -> &'static str {
                        $name
                    }
                }
                crate::injectable!($ty);
                crate::implements!($ty: dyn Serpent);
            };
        }
        serpent!(Adder, "adder");
        serpent!(Boa, "boa");
        serpent!(Cobra, "cobra");
        serpent!(Mamba, "mamba");

        let mut c = Container::new();
        c.bind::<dyn Serpent>().to::<Adder>().in_singleton_scope();
        c.bind::<dyn Serpent>().to::<Boa>().in_singleton_scope();
        c.bind::<dyn Serpent>().to::<Cobra>().in_singleton_scope();
        c.bind::<dyn Serpent>().to::<Mamba>().in_singleton_scope();

        // single resolution takes the first bound provider
        let single = c.get::<dyn Serpent>().unwrap();
        assert_eq!(single.species(), "adder");

        let all = c.get_all::<dyn Serpent>().unwrap();
        let species: Vec<_> = all.iter().map(|s| s.species()).collect();
        assert_eq!(species, vec!["adder", "boa", "cobra", "mamba"]);

        // the shared instance is the same one the single resolution saw
        assert_eq!(data_ptr(&single), data_ptr(&all[0]));
    }

    // ── cycles ──

    #[test]
    fn constructor_cycle_fails() {
        #[derive(Debug)]
        struct Start {
            #[allow(dead_code)]
            middle: Arc<Middle>,
        }
        #[derive(Debug)]
        struct Middle {
            #[allow(dead_code)]
            end: Arc<End>,
        }
        #[derive(Debug)]
        struct End {
            #[allow(dead_code)]
            start: Arc<Start>,
        }
        crate::injectable!(Start { middle: Arc<Middle> });
        crate::injectable!(Middle { end: Arc<End> });
        crate::injectable!(End { start: Arc<Start> });

        let mut c = Container::new();
        c.bind::<Start>().to_self();
        c.bind::<Middle>().to_self();
        c.bind::<End>().to_self();

        match c.get::<Start>() {
            Err(RabitaError::CircularDependency(key)) => {
                assert!(key.type_name().contains("Start"));
            }
            other => panic!("expected CircularDependency, got: {other:?}"),
        }
    }

    #[test]
    fn function_factory_cycle_fails() {
        struct Start {
            #[allow(dead_code)]
            middle: Arc<Middle>,
        }
        struct Middle {
            #[allow(dead_code)]
            start: Arc<Start>,
        }
        crate::injectable!(Middle { start: Arc<Start> });

        let mut c = Container::new();
        c.bind::<Start>().to_function(|ctx| {
            let middle = ctx.container().get_with::<Middle>(ctx)?;
            Ok(Arc::new(Start { middle }))
        });
        c.bind::<Middle>().to_self();

        assert!(matches!(
            c.get::<Start>(),
            Err(RabitaError::CircularDependency(_))
        ));
    }

    // ── hierarchy ──

    #[test]
    fn child_resolves_parent_binding_but_not_vice_versa() {
        struct City;
        crate::injectable!(City);
        struct Building;
        crate::injectable!(Building);

        let mut parent = Container::new();
        parent.bind::<City>().to_self().in_singleton_scope();

        let mut child = Container::with_parent(&parent);
        child.bind::<Building>().to_self().in_singleton_scope();

        let building = child.get::<Building>().unwrap();
        let city_via_child = child.get::<City>().unwrap();
        let city_via_parent = parent.get::<City>().unwrap();

        assert!(Arc::ptr_eq(&city_via_child, &city_via_parent));
        let _ = building;

        assert!(matches!(
            parent.get::<Building>(),
            Err(RabitaError::ComponentNotFound(_))
        ));
    }

    #[test]
    fn hierarchical_collection_is_child_then_parent() {
        trait Animal: Send + Sync {
            fn kind(&self) -> &'static str;
        }

        macro_rules! animal {
            ($ty:ident, $name:literal) => {
                struct $ty;
                impl Animal for $ty {
                    fn kind(&self) -> &'static str {
                        $name
                    }
                }
                crate::injectable!($ty);
                crate::implements!($ty: dyn Animal);
            };
        }
        animal!(Fish, "fish");
        animal!(Bird, "bird");
        animal!(Snake, "snake");
        animal!(Lynx, "lynx");

        let mut parent = Container::new();
        parent.bind::<dyn Animal>().to::<Fish>().in_singleton_scope();
        parent.bind::<dyn Animal>().to::<Bird>().in_singleton_scope();

        let mut child = Container::with_parent(&parent);
        child.bind::<dyn Animal>().to::<Snake>().in_singleton_scope();
        child.bind::<dyn Animal>().to::<Lynx>().in_singleton_scope();

        let from_parent = parent.get_all::<dyn Animal>().unwrap();
        assert_eq!(from_parent.len(), 2);

        let from_child = child.get_all::<dyn Animal>().unwrap();
        let kinds: Vec<_> = from_child.iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec!["snake", "lynx", "fish", "bird"]);
    }

    // ── requester-aware construction ──

    #[test]
    fn requester_name_personalizes_construction() {
        struct Home {
            name: String,
        }

        trait Snake: Send + Sync {
            fn home_name(&self) -> String;
        }

        macro_rules! homed_snake {
            ($ty:ident, $name:literal) => {
                struct $ty {
                    home: Arc<Home>,
                }
                impl Snake for $ty {
                    fn home_name(&self) -> String {
                        self.home.name.clone()
                    }
                }
                crate::injectable!($ty as $name { home: Arc<Home> });
                crate::implements!($ty: dyn Snake);
            };
        }
        homed_snake!(GrassSnake, "GrassSnake");
        homed_snake!(Python, "Python");

        let mut c = Container::new();
        c.bind::<Home>().to_function(|ctx| {
            let name = format!("{}'s home", ctx.requester()?.name());
            Ok(Arc::new(Home { name }))
        });
        c.bind::<dyn Snake>().to::<GrassSnake>();
        c.bind::<dyn Snake>().to::<Python>();

        let snakes = c.get_all::<dyn Snake>().unwrap();
        assert_eq!(snakes.len(), 2);
        assert_eq!(snakes[0].home_name(), "GrassSnake's home");
        assert_eq!(snakes[1].home_name(), "Python's home");
    }

    #[test]
    fn alias_personalizes_construction() {
        struct Pet {
            name: String,
        }

        struct HouseOne {
            pet: Arc<Pet>,
        }
        crate::injectable!(HouseOne { pet: Arc<Pet> });

        struct HouseTwo {
            pet: Arc<Pet>,
        }
        crate::injectable!(HouseTwo { pet: Arc<Pet> });

        let mut c = Container::new();
        c.bind::<Pet>().to_function(|ctx| {
            let name = format!("{} pet", ctx.requester()?.name());
            Ok(Arc::new(Pet { name }))
        });
        c.bind::<HouseOne>().to_self().alias("Snake's").in_singleton_scope();
        c.bind::<HouseTwo>().to_self().alias("Lion's").in_singleton_scope();

        let one = c.get::<HouseOne>().unwrap();
        let two = c.get::<HouseTwo>().unwrap();

        assert_eq!(one.pet.name, "Snake's pet");
        assert_eq!(two.pet.name, "Lion's pet");
    }

    #[test]
    fn top_level_request_has_unspecified_requester() {
        struct Pet {
            owner: String,
        }

        let mut c = Container::new();
        c.bind::<Pet>().to_function(|ctx| {
            let owner = ctx.requester()?.name().into_owned();
            Ok(Arc::new(Pet { owner }))
        });

        let pet = c.get::<Pet>().unwrap();
        assert_eq!(pet.owner, "Unspecified");
    }

    // ── wide constructor declarations ──

    #[test]
    fn ten_parameter_declaration_resolves() {
        struct Bear;
        crate::injectable!(Bear);

        #[allow(dead_code)]
        struct Zoo {
            b1: Arc<Bear>,
            b2: Arc<Bear>,
            b3: Arc<Bear>,
            b4: Arc<Bear>,
            b5: Arc<Bear>,
            b6: Arc<Bear>,
            b7: Arc<Bear>,
            b8: Arc<Bear>,
            b9: Arc<Bear>,
            b10: Arc<Bear>,
        }
        crate::injectable!(Zoo {
            b1: Arc<Bear>,
            b2: Arc<Bear>,
            b3: Arc<Bear>,
            b4: Arc<Bear>,
            b5: Arc<Bear>,
            b6: Arc<Bear>,
            b7: Arc<Bear>,
            b8: Arc<Bear>,
            b9: Arc<Bear>,
            b10: Arc<Bear>,
        });

        let mut c = Container::new();
        c.bind::<Bear>().to_self();
        c.bind::<Zoo>().to_self();

        let zoo = c.get::<Zoo>().unwrap();
        // transient bears: all ten are distinct instances
        assert!(!Arc::ptr_eq(&zoo.b1, &zoo.b2));
        assert!(!Arc::ptr_eq(&zoo.b9, &zoo.b10));
    }

    // ── request shapes ──

    #[test]
    fn resolve_accepts_both_request_shapes() {
        let mut c = Container::new();
        c.bind::<dyn Runner>().to::<Cheetah>().in_singleton_scope();

        let one: Arc<dyn Runner> = c.resolve().unwrap();
        let all: Vec<Arc<dyn Runner>> = c.resolve().unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(data_ptr(&one), data_ptr(&all[0]));
    }

    // ── introspection ──

    #[test]
    fn debug_output_counts_bindings() {
        let mut c = Container::new();
        assert!(c.is_empty());
        c.bind::<dyn Runner>().to::<Cheetah>();
        c.bind::<Cheetah>().to_self();

        let debug = format!("{c:?}");
        assert!(debug.contains("Container"));
        assert!(debug.contains("2"));
        assert!(!c.is_empty());
    }
}
