//! Value objects: compared by their contents, never by identity.

/// Marker trait for immutable, value-compared domain types.
///
/// A `Cpf` built from `"123.456.789-09"` equals one built from
/// `"12345678909"`; there is no notion of "which" CPF instance it is.
/// Construction is where validation happens, so holding a value object means
/// holding a valid value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
