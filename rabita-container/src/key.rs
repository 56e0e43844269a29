//! Component identification keys.
//!
//! [`ComponentKey`] identifies a component within the container. It combines
//! a [`TypeId`] with an optional display name used in diagnostics and
//! requester-aware factories.

use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rabita_support::rendering::shorten_type_name;

/// Identifies a component in the container.
///
/// A key is the Rust type ([`TypeId`]) of an abstract or concrete component.
/// The display name is cosmetic: two keys are equal iff their type ids are
/// equal, whatever their names.
///
/// # Examples
/// ```
/// use rabita_container::key::ComponentKey;
///
/// let key = ComponentKey::of::<String>();
/// assert_eq!(key.type_name(), "alloc::string::String");
///
/// // The display name never affects identity
/// assert_eq!(ComponentKey::named::<String>("primary"), key);
/// ```
#[derive(Clone)]
pub struct ComponentKey {
    type_id: TypeId,
    type_name: &'static str,
    display: Option<Arc<str>>,
}

/// Sentinel component seeded into a context when a top-level resolution has
/// no requester of its own.
pub struct Unspecified;

impl ComponentKey {
    /// Creates a key for type `T`. Works for `dyn Trait` identities too.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            display: None,
        }
    }

    /// Creates a key for type `T` carrying a display name.
    #[inline]
    pub fn named<T: ?Sized + 'static>(name: impl Into<Arc<str>>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            display: Some(name.into()),
        }
    }

    /// The key seeded into a context created for a bare top-level request.
    #[inline]
    pub fn unspecified() -> Self {
        Self::named::<Unspecified>("Unspecified")
    }

    pub(crate) fn with_display(mut self, display: Option<Arc<str>>) -> Self {
        self.display = display;
        self
    }

    /// Returns the [`TypeId`] of this component.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the diagnostic name: the display name when one was declared
    /// or configured, otherwise the shortened type name.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.display {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(shorten_type_name(self.type_name)),
        }
    }

    /// Returns `false` for the [`Unspecified`] sentinel.
    #[inline]
    pub fn is_specified(&self) -> bool {
        self.type_id != TypeId::of::<Unspecified>()
    }
}

impl PartialEq for ComponentKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKey {}

impl Hash for ComponentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display {
            Some(name) => write!(f, "ComponentKey({}, display={:?})", self.type_name, name),
            None => write!(f, "ComponentKey({})", self.type_name),
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
