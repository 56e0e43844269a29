//! Module trait — a group of related bindings.
//!
//! Modules keep registration close to the subsystem it configures instead
//! of one giant configuration block:
//!
//! ```rust,ignore
//! struct StorageModule;
//!
//! impl Module for StorageModule {
//!     fn register(&self, container: &mut Container<'_>) {
//!         container.bind::<dyn Repository>().to::<PostgresRepository>()
//!             .in_singleton_scope();
//!         container.bind::<MigrationRunner>().to_self();
//!     }
//! }
//!
//! container.install(&StorageModule);
//! ```

use crate::container::Container;

/// A group of related bindings applied to a container in one call.
pub trait Module {
    /// Registers this module's bindings.
    fn register(&self, container: &mut Container<'_>);

    /// Optional: human-readable name for log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
