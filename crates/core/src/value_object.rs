//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are immutable: two instances holding the
/// same values are equal, and "changing" one means building a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
