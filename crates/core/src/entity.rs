//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Customers and orders are entities: two customers sharing a name are still
/// different customers.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
