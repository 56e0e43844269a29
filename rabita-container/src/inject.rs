//! Constructor injection declarations.
//!
//! [`Injectable`] is the opt-in contract for automatic construction: a type
//! declares, in order, the shapes its constructor needs, and resolution
//! fills each one through the same context. The [`injectable!`] macro writes
//! the implementation from a field list:
//!
//! ```rust,ignore
//! struct Database {
//!     config: Arc<Config>,
//!     logger: Arc<dyn Logger>,
//! }
//! rabita_container::injectable!(Database { config: Arc<Config>, logger: Arc<dyn Logger> });
//! ```
//!
//! [`Resolvable`] is the request-shape normalization behind it: an `Arc<T>`
//! field is a single request, a `Vec<Arc<T>>` field a collection request.
//! Types whose construction cannot be expressed as a field list are bound
//! with a function factory instead.

use std::sync::Arc;

use crate::container::Container;
use crate::context::ResolutionContext;
use crate::error::Result;

/// A type the container can construct by resolving declared parameters.
///
/// Usually implemented through [`injectable!`](crate::injectable) rather
/// than by hand. `NAME` optionally declares the human-readable component
/// name reported in diagnostics and seen by requester-aware factories.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Declared display name for this component, if any.
    const NAME: Option<&'static str> = None;

    /// Builds an instance, resolving each declared parameter in order.
    fn construct(ctx: &mut ResolutionContext<'_>) -> Result<Self>;
}

/// A request shape the container knows how to fulfil.
///
/// Two shapes exist: `Arc<I>` resolves the first provider for `I`
/// (failing with `ComponentNotFound` when there is none) and `Vec<Arc<I>>`
/// resolves every provider for `I` (empty when there is none).
pub trait Resolvable: Sized {
    /// Resolves within an in-progress construction.
    fn resolve_with(ctx: &mut ResolutionContext<'_>) -> Result<Self>;

    /// Resolves as a fresh top-level request.
    fn resolve(container: &Container<'_>) -> Result<Self>;
}

impl<I: ?Sized + 'static> Resolvable for Arc<I> {
    fn resolve_with(ctx: &mut ResolutionContext<'_>) -> Result<Self> {
        let container = ctx.container();
        container.get_with::<I>(ctx)
    }

    fn resolve(container: &Container<'_>) -> Result<Self> {
        container.get::<I>()
    }
}

impl<I: ?Sized + 'static> Resolvable for Vec<Arc<I>> {
    fn resolve_with(ctx: &mut ResolutionContext<'_>) -> Result<Self> {
        let container = ctx.container();
        container.get_all_with::<I>(ctx)
    }

    fn resolve(container: &Container<'_>) -> Result<Self> {
        container.get_all::<I>()
    }
}

/// Declares a type constructor-injectable.
///
/// Three forms:
///
/// ```rust,ignore
/// // no dependencies
/// injectable!(Cheetah);
///
/// // ordered dependency declarations, one per field
/// injectable!(Spider { nest: Arc<dyn Nest> });
///
/// // with a declared component name
/// injectable!(GrassSnake as "GrassSnake" { home: Arc<Home> });
/// ```
#[macro_export]
macro_rules! injectable {
    ($ty:ty $(as $name:literal)? { $($field:ident : $dep:ty),* $(,)? }) => {
        impl $crate::inject::Injectable for $ty {
            $(const NAME: ::core::option::Option<&'static str> =
                ::core::option::Option::Some($name);)?

            fn construct(
                _ctx: &mut $crate::context::ResolutionContext<'_>,
            ) -> $crate::error::Result<Self> {
                ::core::result::Result::Ok(Self {
                    $($field: <$dep as $crate::inject::Resolvable>::resolve_with(_ctx)?,)*
                })
            }
        }
    };
    ($ty:ty $(as $name:literal)?) => {
        $crate::injectable!($ty $(as $name)? {});
    };
}
