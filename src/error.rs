//! Failure modes of the numeric boundary
use thiserror::Error;

/// Every conversion reports a precondition violation to its immediate caller
/// as one of these variants. No conversion ever clamps, wraps, or substitutes
/// a default value.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum ConversionError {
    /// The input integer lies outside the domain of the conversion
    #[error("input value is outside the representable range")]
    OutOfRange,

    /// A limb sequence has the wrong length, or one of its limbs overflows
    /// the fixed width of its slot
    #[error("limb sequence has the wrong shape")]
    MalformedLimbs,

    /// A structurally valid limb sequence encodes an integer at or above the
    /// field order
    #[error("limb sequence encodes a value that exceeds the field order")]
    ValueExceedsFieldOrder,
}
