//! Core resolution engine for Rabita DI.

pub mod builder;
pub mod container;
pub mod context;
pub mod error;
pub mod inject;
pub mod key;
pub mod module;
pub mod provider;
pub mod scope;
pub mod storage;

pub use container::prelude;
pub use container::Container;
pub use error::{RabitaError, Result};
pub use key::ComponentKey;
pub use scope::Scope;
