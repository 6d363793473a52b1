//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter
/// (`Money`, an invoice line, a recipient). To "modify" a value object,
/// create a new one with the new values.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared and logged like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
