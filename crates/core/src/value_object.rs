//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are the same value. To "modify"
/// one, build a new one.
///
/// - `Category::Food` is a value object
/// - `Product { id: ProductId(...), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
