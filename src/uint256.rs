//! A 256-bit unsigned integer split into two 128-bit limbs
use crate::{error::ConversionError, BigInt};
use crypto_bigint::Encoding;
use std::cmp::Ordering;

/// Exclusive upper bound of the 256-bit domain
pub const UINT256_BOUND: BigInt = BigInt::ONE.shl_vartime(256);

/// An unsigned integer below 2^256, stored as the pair (low, high) with
/// value low + high * 2^128. Every such integer has exactly one pair, so the
/// derived equality (limb by limb) agrees with numeric equality. Numeric
/// ordering is provided separately through [`Ord`].
///
/// This is a different numeric domain than [`crate::field::Felt`]: a felt is
/// bounded by the field order, this type by 2^256. Neither converts
/// implicitly into the other.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct SplitUint256 {
    low: u128,
    high: u128,
}

impl SplitUint256 {
    pub const ZERO: Self = Self { low: 0, high: 0 };
    pub const ONE: Self = Self { low: 1, high: 0 };

    pub fn new(low: u128, high: u128) -> Self {
        return Self { low, high };
    }

    /// Split a boundary integer into its 128-bit halves
    pub fn from_uint(value: &BigInt) -> Result<Self, ConversionError> {
        if *value >= UINT256_BOUND {
            return Err(ConversionError::OutOfRange);
        }
        let bytes = value.to_be_bytes();
        let split = bytes.len() - 16;
        let high = u128::from_be_bytes(bytes[split - 16..split].try_into().unwrap());
        let low = u128::from_be_bytes(bytes[split..].try_into().unwrap());
        return Ok(Self { low, high });
    }

    /// Validate a (low, high) pair received from the call boundary, where
    /// each limb arrives as an untyped integer. A limb that overflows its
    /// 128-bit slot signals a defect at the origin and is rejected rather
    /// than folded into the value.
    pub fn from_limbs(low: &BigInt, high: &BigInt) -> Result<Self, ConversionError> {
        let slot = BigInt::from_u128(u128::MAX);
        if *low > slot || *high > slot {
            return Err(ConversionError::MalformedLimbs);
        }
        return Ok(Self::new(narrow_to_u128(low), narrow_to_u128(high)));
    }

    /// Reassemble the full integer, low + high * 2^128
    pub fn to_uint(&self) -> BigInt {
        return BigInt::from_u128(self.high)
            .shl_vartime(128)
            .bitor(&BigInt::from_u128(self.low));
    }

    pub fn get_low(&self) -> u128 {
        self.low
    }

    pub fn get_high(&self) -> u128 {
        self.high
    }
}

/// Numeric order of the represented integers, with the high limb deciding
impl Ord for SplitUint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        return (self.high, self.low).cmp(&(other.high, other.low));
    }
}

impl PartialOrd for SplitUint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Take the low 128 bits of a boundary integer already known to fit
fn narrow_to_u128(limb: &BigInt) -> u128 {
    let bytes = limb.to_be_bytes();
    let start = bytes.len() - 16;
    return u128::from_be_bytes(bytes[start..].try_into().unwrap());
}
