//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. `Price`, `Rating` and the facet crate's `PriceRange` and
/// `FilterState` are value objects; `Product` is an entity.
///
/// ```ignore
/// let a = Price::from_cents(1999);
/// let b = Price::from_decimal(19.99)?;
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
