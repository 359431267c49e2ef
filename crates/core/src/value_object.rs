//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by the
//! primitive they wrap. Two value objects wrapping equal primitives are equal.

use crate::error::ValidationError;

/// Self-validating wrapper around a single primitive.
///
/// Implementors keep their field private so [`ValueObject::new`] is the only
/// construction path. Validation runs exactly once, inside `new`, and fails on
/// the first violated rule; a value object that failed validation is never
/// observable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Pages(u32);
///
/// impl ValueObject for Pages {
///     type Raw = u32;
///
///     fn new(raw: impl Into<u32>) -> Result<Self, ValidationError> {
///         let raw = raw.into();
///         if raw == 0 {
///             return Err(ValidationError::EmptyText);
///         }
///         Ok(Self(raw))
///     }
///
///     fn as_generic_type(&self) -> &u32 {
///         &self.0
///     }
/// }
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Sized {
    /// The wrapped primitive.
    type Raw;

    /// Validate and wrap.
    fn new(raw: impl Into<Self::Raw>) -> Result<Self, ValidationError>;

    /// Returns the wrapped primitive, losslessly.
    fn as_generic_type(&self) -> &Self::Raw;
}
