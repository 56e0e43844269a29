//! Binding builder — the registration surface.
//!
//! `container.bind::<I>()` opens a binding for one identity; `.and::<J>()`
//! stacks further identities onto it at the type level. A terminal call
//! (`to`, `to_function`, `to_constant`, `to_self`) creates ONE
//! [`InstanceStorage`] and registers one provider per listed identity, all
//! sharing that storage — binding an implementation under five interfaces
//! and resolving any of them in singleton scope yields one construction.
//!
//! ```rust,ignore
//! container.bind::<dyn Walker>().and::<dyn Runner>().to::<Cheetah>()
//!     .in_singleton_scope()
//!     .alias("cheetah");
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::Container;
use crate::context::ResolutionContext;
use crate::error::Result;
use crate::inject::Injectable;
use crate::key::ComponentKey;
use crate::provider::{CastProvider, Implements, ProviderEntry};
use crate::scope::Scope;
use crate::storage::InstanceStorage;

/// A type-level list of identities accumulated by `bind`/`and`, consumed by
/// the terminal builder calls. Implemented for `()` and
/// `(PhantomData<Identity>, Tail)`; not meant to be implemented elsewhere.
pub trait IdentitySet<Impl: ?Sized + Send + Sync + 'static> {
    #[doc(hidden)]
    fn bind_all(container: &mut Container<'_>, storage: &Arc<InstanceStorage<Impl>>);
}

impl<Impl: ?Sized + Send + Sync + 'static> IdentitySet<Impl> for () {
    fn bind_all(_: &mut Container<'_>, _: &Arc<InstanceStorage<Impl>>) {}
}

impl<Impl, Head, Tail> IdentitySet<Impl> for (PhantomData<Head>, Tail)
where
    Impl: Implements<Head> + ?Sized + Send + Sync + 'static,
    Head: ?Sized + 'static,
    Tail: IdentitySet<Impl>,
{
    fn bind_all(container: &mut Container<'_>, storage: &Arc<InstanceStorage<Impl>>) {
        container.add_provider_entry(
            ComponentKey::of::<Head>(),
            ProviderEntry::<Head>::new(CastProvider::<Impl, Head>::new(storage.clone())),
        );
        Tail::bind_all(container, storage);
    }
}

/// In-progress binding for one or more identities.
///
/// Produced by [`Container::bind`]; extended by [`and`](Self::and); closed
/// by one of the terminal calls.
pub struct ComponentBuilder<'a, 'p, L> {
    container: &'a mut Container<'p>,
    _identities: PhantomData<L>,
}

impl<'a, 'p, L> ComponentBuilder<'a, 'p, L> {
    pub(crate) fn new(container: &'a mut Container<'p>) -> Self {
        Self {
            container,
            _identities: PhantomData,
        }
    }

    /// Adds another identity to this binding.
    pub fn and<J: ?Sized + 'static>(self) -> ComponentBuilder<'a, 'p, (PhantomData<J>, L)> {
        ComponentBuilder::new(self.container)
    }

    /// Binds every listed identity to the implementation `Impl`, constructed
    /// through its [`Injectable`] declaration.
    ///
    /// `Impl` must implement every listed identity; a binding that does not
    /// hold is a compile error.
    pub fn to<Impl>(self) -> BindingConfig<Impl>
    where
        Impl: Injectable,
        L: IdentitySet<Impl>,
    {
        let storage = Arc::new(InstanceStorage::<Impl>::from_constructor());
        L::bind_all(self.container, &storage);
        BindingConfig { storage }
    }

    /// Binds every listed identity to instances produced by `factory`.
    ///
    /// The factory receives the resolution context and may resolve its own
    /// dependencies through it:
    ///
    /// ```rust,ignore
    /// container.bind::<Home>().to_function(|ctx| {
    ///     let owner = ctx.requester()?.name().into_owned();
    ///     Ok(Arc::new(Home { owner }))
    /// });
    /// ```
    pub fn to_function<Impl, F>(self, factory: F) -> BindingConfig<Impl>
    where
        Impl: ?Sized + Send + Sync + 'static,
        L: IdentitySet<Impl>,
        F: Fn(&mut ResolutionContext<'_>) -> Result<Arc<Impl>> + Send + Sync + 'static,
    {
        let storage = Arc::new(InstanceStorage::<Impl>::from_function(factory));
        L::bind_all(self.container, &storage);
        BindingConfig { storage }
    }

    /// Binds every listed identity to an already constructed instance.
    ///
    /// A constant needs no further configuration: it is inherently shared
    /// and was named by whoever built it.
    pub fn to_constant<Impl>(self, instance: Arc<Impl>)
    where
        Impl: ?Sized + Send + Sync + 'static,
        L: IdentitySet<Impl>,
    {
        let storage = Arc::new(InstanceStorage::<Impl>::from_constant(instance));
        L::bind_all(self.container, &storage);
    }
}

impl<'a, 'p, T> ComponentBuilder<'a, 'p, (PhantomData<T>, ())>
where
    T: Injectable,
{
    /// Binds the single listed identity to itself.
    ///
    /// Only available when exactly one identity was given.
    pub fn to_self(self) -> BindingConfig<T> {
        self.to::<T>()
    }
}

/// Configures the storage behind a completed binding.
///
/// Both methods return `self`, so configuration chains fluently.
pub struct BindingConfig<Impl: ?Sized + Send + Sync + 'static> {
    storage: Arc<InstanceStorage<Impl>>,
}

impl<Impl: ?Sized + Send + Sync + 'static> BindingConfig<Impl> {
    /// Marks the binding shared: one instance, created lazily, reused by
    /// every resolution through any of the bound identities.
    pub fn in_singleton_scope(self) -> Self {
        self.storage.set_scope(Scope::Singleton);
        self
    }

    /// Sets the diagnostic name pushed while this binding constructs, which
    /// is also what requester-aware factories observe.
    pub fn alias(self, name: impl Into<Arc<str>>) -> Self {
        self.storage.set_alias(name.into());
        self
    }
}
