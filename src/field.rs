//! The Stark field element
use crate::{error::ConversionError, BigInt};

/// The prime order of the field: 2^251 + 17 * 2^192 + 1
pub const FIELD_ORDER: BigInt = BigInt::from_be_hex(
    "00000000000000000000000000000000000000000000000000000000000000000800000000000011000000000000000000000000000000000000000000000001",
);

/// A scalar of the field, held as an integer strictly below [`FIELD_ORDER`].
/// The bound is checked once at construction, so a `Felt` in hand is always
/// a valid field element.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Felt {
    value: BigInt,
}

impl Felt {
    pub const ZERO: Self = Self {
        value: BigInt::ZERO,
    };

    /// The largest field element, one below the field order
    pub const MAX: Self = Self {
        value: FIELD_ORDER.wrapping_sub(&BigInt::ONE),
    };

    /// Validate a raw integer into a field element
    pub fn from_uint(value: BigInt) -> Result<Self, ConversionError> {
        if value >= FIELD_ORDER {
            return Err(ConversionError::OutOfRange);
        }
        return Ok(Self { value });
    }

    pub fn get_value(&self) -> &BigInt {
        &self.value
    }
}
