//! Entity identity accessors for cursor links
//!
//! Cursor links carry the identities of the current page's boundary entities.
//! The accessor is an injected capability rather than a required interface:
//! entity types that expose a stable id implement [`HasId`] and get the
//! default accessor; anything else supplies a closure. Without either, cursor
//! pagination is inexpressible and no links are emitted.

use std::fmt;

/// Entity types that expose a stable string identity.
pub trait HasId {
    /// Stable identifier used as a cursor boundary.
    fn id(&self) -> String;
}

/// Function from entity to stable string identifier.
pub struct IdentityAccessor<T> {
    accessor: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> IdentityAccessor<T> {
    /// Wrap a custom accessor function.
    pub fn new<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            accessor: Box::new(accessor),
        }
    }

    /// Identity of an entity.
    pub fn id_of(&self, entity: &T) -> String {
        (self.accessor)(entity)
    }
}

impl<T: HasId> IdentityAccessor<T> {
    /// Default accessor for entity types that expose their own identity.
    pub fn from_has_id() -> Self {
        Self::new(|entity: &T| entity.id())
    }
}

impl<T> fmt::Debug for IdentityAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityAccessor").finish_non_exhaustive()
    }
}
