//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities compare by identifier, never by attribute values. Implementors are
/// expected to derive `PartialEq`/`Hash` from [`Entity::id`] alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same entity iff their identifiers are equal.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
