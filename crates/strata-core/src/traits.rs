//! Core traits shared across layers.

use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Trait for entities with a unique identifier.
pub trait Entity {
    /// Identifier type.
    type Id: Eq + Hash;

    /// Returns the entity's unique identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity view over an entity.
///
/// Entities keep structural equality. Wrap them in `ById` when set or map
/// semantics should follow identity instead: two wrapped values are equal iff
/// their ids are equal, and hashing only looks at the id.
#[derive(Debug, Clone)]
pub struct ById<T>(pub T);

impl<T: Entity> PartialEq for ById<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl<T: Entity> Eq for ById<T> {}

impl<T: Entity> Hash for ById<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id().hash(state);
    }
}

impl<T> Deref for ById<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
