//! Instance storage — lifetime policy wrapped around a factory.
//!
//! An [`InstanceStorage`] owns one construction strategy and decides, per
//! resolution, whether to invoke it (transient) or to serve a cached
//! instance (singleton). One storage may back several providers when an
//! implementation is bound under several identities, which is what makes a
//! shared multi-interface binding construct exactly once.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::context::{ResolutionContext, StackFrame};
use crate::error::Result;
use crate::inject::Injectable;
use crate::key::ComponentKey;
use crate::scope::Scope;

/// Construction strategy for an implementation type `T`.
pub enum Factory<T: ?Sized + Send + Sync + 'static> {
    /// Build through the type's [`Injectable`] declaration.
    Constructor(fn(&mut ResolutionContext<'_>) -> Result<Arc<T>>),

    /// Build through a user-supplied function.
    Function(Box<dyn Fn(&mut ResolutionContext<'_>) -> Result<Arc<T>> + Send + Sync>),

    /// Serve a pre-built instance.
    Constant(Arc<T>),
}

fn construct_arc<T: Injectable>(ctx: &mut ResolutionContext<'_>) -> Result<Arc<T>> {
    T::construct(ctx).map(Arc::new)
}

struct StorageState {
    scope: Scope,
    alias: Option<Arc<str>>,
}

/// Holds one factory plus its lifetime policy and, in singleton scope, the
/// cached instance.
///
/// Invariant: once the cache is populated it is never replaced.
pub struct InstanceStorage<T: ?Sized + Send + Sync + 'static> {
    factory: Factory<T>,
    default_name: Option<&'static str>,
    state: RwLock<StorageState>,
    instance: OnceCell<Arc<T>>,
}

impl<T: Injectable> InstanceStorage<T> {
    /// Storage invoking the type's [`Injectable`] declaration.
    pub fn from_constructor() -> Self {
        Self::with_factory(Factory::Constructor(construct_arc::<T>), T::NAME)
    }
}

impl<T: ?Sized + Send + Sync + 'static> InstanceStorage<T> {
    fn with_factory(factory: Factory<T>, default_name: Option<&'static str>) -> Self {
        Self {
            factory,
            default_name,
            state: RwLock::new(StorageState {
                scope: Scope::Transient,
                alias: None,
            }),
            instance: OnceCell::new(),
        }
    }

    /// Storage invoking a user-supplied factory function.
    pub fn from_function<F>(factory: F) -> Self
    where
        F: Fn(&mut ResolutionContext<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self::with_factory(Factory::Function(Box::new(factory)), None)
    }

    /// Storage serving an already constructed instance.
    pub fn from_constant(instance: Arc<T>) -> Self {
        Self::with_factory(Factory::Constant(instance), None)
    }

    pub(crate) fn set_scope(&self, scope: Scope) {
        self.state.write().scope = scope;
    }

    pub(crate) fn set_alias(&self, alias: Arc<str>) {
        self.state.write().alias = Some(alias);
    }

    /// Produces an instance according to the configured scope.
    ///
    /// The cache is check / create / set rather than initialize-under-lock:
    /// a self-referential singleton re-enters this method during its own
    /// construction and must reach the cycle detector, not block on a cell.
    pub fn get_instance(&self, ctx: &mut ResolutionContext<'_>) -> Result<Arc<T>> {
        if !self.state.read().scope.is_shared() {
            return self.create(ctx);
        }

        if let Some(existing) = self.instance.get() {
            return Ok(existing.clone());
        }

        let created = self.create(ctx)?;
        Ok(self.instance.get_or_init(|| created).clone())
    }

    /// One construction step: push the identity, check for a cycle, invoke
    /// the factory. The pushed identity is popped on every exit path.
    fn create(&self, ctx: &mut ResolutionContext<'_>) -> Result<Arc<T>> {
        let mut frame = StackFrame::push(ctx, self.component_key());
        frame.ensure_no_cycle()?;

        match &self.factory {
            Factory::Constructor(construct) => construct(frame.context()),
            Factory::Function(function) => function(frame.context()),
            Factory::Constant(instance) => Ok(instance.clone()),
        }
    }

    /// The identity pushed while this storage constructs: the configured
    /// alias wins, then the declared component name, then the type name.
    fn component_key(&self) -> ComponentKey {
        let display = {
            let state = self.state.read();
            state
                .alias
                .clone()
                .or_else(|| self.default_name.map(Arc::from))
        };
        ComponentKey::of::<T>().with_display(display)
    }
}
