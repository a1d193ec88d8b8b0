//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and never change after construction. A
/// customer name or a price is a value object; a customer is an entity (see
/// [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(i64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(350), Price(350));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
