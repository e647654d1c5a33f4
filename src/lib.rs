//! Conversions between Stark field elements and fixed-width integers
use crypto_bigint::Uint;

/// Use the same big integer type at every call boundary
pub const LIMBS: usize = 512 / 64; // 8 words each 64 bits, a total of 512 bits
pub type BigInt = Uint<LIMBS>;

pub mod error;
pub mod field;
pub mod uint256;
pub mod words;
