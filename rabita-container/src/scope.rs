//! Component lifetime scopes.
//!
//! A scope decides what a resolution returns:
//! - [`Scope::Transient`] — a new instance on every resolution
//! - [`Scope::Singleton`] — one instance, created lazily and cached

use std::fmt;

/// Defines the lifetime of a component within the container.
///
/// Every binding starts out transient; [`in_singleton_scope`] switches it.
///
/// [`in_singleton_scope`]: crate::builder::BindingConfig::in_singleton_scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// New instance created on every resolution. Never cached.
    #[default]
    Transient,

    /// One instance shared by every resolution.
    ///
    /// Created on first resolve, lives until its storage is dropped.
    Singleton,
}

impl Scope {
    /// Returns `true` if this scope caches its instance.
    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self, Scope::Singleton)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Transient => write!(f, "Transient"),
            Scope::Singleton => write!(f, "Singleton"),
        }
    }
}
