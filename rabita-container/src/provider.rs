//! Providers — type-safe production of a bound identity.
//!
//! A [`Provider`] turns a resolution request for an identity `I` into an
//! `Arc<I>`. The one concrete implementation, [`CastProvider`], pairs an
//! implementation type with one bound identity: it asks the shared
//! [`InstanceStorage`] for an instance and re-types it through the
//! [`Implements`] capability. [`ProviderEntry`] boxes the provider so the
//! container can store it type-erased and recover it by downcast.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::ResolutionContext;
use crate::error::Result;
use crate::storage::InstanceStorage;

/// Compile-time capability: `Self` can be exposed behind the identity `I`.
///
/// This is the binding contract — `.to::<Impl>()` demands
/// `Impl: Implements<I>` for every bound identity, so binding an
/// implementation to an interface it does not satisfy is a compile error,
/// never a resolution failure.
///
/// Every type trivially implements its own identity; the [`implements!`]
/// macro declares the trait-object identities an implementation supports:
///
/// ```rust,ignore
/// struct ConsoleLogger;
/// rabita_container::implements!(ConsoleLogger: dyn Logger);
/// ```
///
/// [`implements!`]: crate::implements
pub trait Implements<I: ?Sized> {
    /// Re-types a shared handle of the implementation as the identity.
    fn upcast(self: Arc<Self>) -> Arc<I>;
}

impl<T: ?Sized> Implements<T> for T {
    fn upcast(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// Declares that an implementation can be bound under one or more
/// trait-object identities.
///
/// ```rust,ignore
/// trait Runner: Send + Sync {}
/// trait Walker: Send + Sync {}
///
/// struct Cheetah;
/// impl Runner for Cheetah {}
/// impl Walker for Cheetah {}
///
/// rabita_container::implements!(Cheetah: dyn Runner, dyn Walker);
/// ```
#[macro_export]
macro_rules! implements {
    ($impl:ty : $($iface:ty),+ $(,)?) => {
        $(
            impl $crate::provider::Implements<$iface> for $impl {
                fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$iface> {
                    self
                }
            }
        )+
    };
}

/// Produces instances of the identity `I` for one binding.
pub trait Provider<I: ?Sized> {
    /// Produces an instance, recursing through `ctx` for dependencies.
    fn produce(&self, ctx: &mut ResolutionContext<'_>) -> Result<Arc<I>>;
}

/// The provider backing one (implementation, identity) pair.
///
/// Shares its storage with every other identity registered in the same bind
/// call, so a shared-scoped implementation is constructed once no matter how
/// many identities expose it.
pub struct CastProvider<T, I>
where
    T: ?Sized + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    storage: Arc<InstanceStorage<T>>,
    _interface: PhantomData<fn() -> Arc<I>>,
}

impl<T, I> CastProvider<T, I>
where
    T: Implements<I> + ?Sized + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    pub fn new(storage: Arc<InstanceStorage<T>>) -> Self {
        Self {
            storage,
            _interface: PhantomData,
        }
    }
}

impl<T, I> Provider<I> for CastProvider<T, I>
where
    T: Implements<I> + ?Sized + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    fn produce(&self, ctx: &mut ResolutionContext<'_>) -> Result<Arc<I>> {
        let instance = self.storage.get_instance(ctx)?;
        Ok(<T as Implements<I>>::upcast(instance))
    }
}

/// Boxed provider for one identity, the unit the container stores
/// type-erased and recovers by downcasting to `ProviderEntry<I>`.
pub struct ProviderEntry<I: ?Sized + 'static> {
    inner: Box<dyn Provider<I> + Send + Sync>,
}

impl<I: ?Sized + 'static> ProviderEntry<I> {
    pub fn new<P>(provider: P) -> Self
    where
        P: Provider<I> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn produce(&self, ctx: &mut ResolutionContext<'_>) -> Result<Arc<I>> {
        self.inner.produce(ctx)
    }
}
