//! # Rabita — Dependency Injection Container for Rust
//!
//! A compile-time checked, runtime-resolving IoC container: bind identities
//! to implementations, resolve whole object graphs on demand, and let the
//! container manage transient vs. singleton lifetimes, hierarchical
//! fallback and construction-cycle detection.
//!
//! ```rust
//! use rabita::prelude::*;
//! use std::sync::Arc;
//!
//! trait Mailer: Send + Sync {
//!     fn send(&self, to: &str) -> String;
//! }
//!
//! struct SmtpMailer;
//! impl Mailer for SmtpMailer {
//!     fn send(&self, to: &str) -> String { format!("mail for {to}") }
//! }
//! injectable!(SmtpMailer);
//! implements!(SmtpMailer: dyn Mailer);
//!
//! struct Signup {
//!     mailer: Arc<dyn Mailer>,
//! }
//! injectable!(Signup { mailer: Arc<dyn Mailer> });
//!
//! let mut container = Container::new();
//! container.bind::<dyn Mailer>().to::<SmtpMailer>().in_singleton_scope();
//! container.bind::<Signup>().to_self();
//!
//! let signup = container.get::<Signup>().expect("resolution failed");
//! assert_eq!(signup.mailer.send("ada"), "mail for ada");
//! ```

pub use rabita_container::*;
pub use rabita_support::*;
