//! Error types for Rabita container operations.
//!
//! Everything a resolution can fail with, each naming the component it
//! failed on. Binding contract violations (an implementation that does not
//! satisfy a bound identity, a type with no constructor declaration) are
//! compile errors and never reach this enum.

use crate::key::ComponentKey;

/// Main error type for all Rabita operations.
#[derive(Debug, thiserror::Error)]
pub enum RabitaError {
    /// A single-instance request found zero providers, anywhere in the
    /// parent chain. Collection requests return an empty vector instead.
    #[error("component for '{0}' not found")]
    ComponentNotFound(ComponentKey),

    /// Construction of a component was requested while that component was
    /// already under construction on the same resolution stack.
    #[error("found circular dependency on component '{0}'")]
    CircularDependency(ComponentKey),

    /// A context operation was used outside its precondition, e.g.
    /// [`requester`](crate::context::ResolutionContext::requester) on a
    /// stack with fewer than two entries.
    #[error("{0}")]
    InvalidOperation(&'static str),
}

/// Convenient Result type for Rabita operations.
pub type Result<T> = std::result::Result<T, RabitaError>;
