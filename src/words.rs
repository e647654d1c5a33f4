//! Decomposition of a field element into fixed-width words
//!
//! The field order is not a power of two, so a felt does not fill its word
//! sequence exactly. Splitting and reassembly therefore bound-check on both
//! sides of the conversion: a felt is validated before it is split, and a
//! word sequence that reassembles to an integer at or above the field order
//! is rejected as non-canonical instead of being reduced.
use crate::{
    error::ConversionError,
    field::{Felt, FIELD_ORDER},
    BigInt,
};
use crypto_bigint::Encoding;

/// Number of words in a decomposed felt
pub const WORD_COUNT: usize = 4;

/// Width of each word in bits
pub const WORD_BITS: usize = 64;

/// A felt split into four 64-bit words, most significant word first:
/// the felt equals word_1 * 2^192 + word_2 * 2^128 + word_3 * 2^64 + word_4.
/// Every felt has exactly one word encoding.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct FeltWords {
    pub word_1: u64,
    pub word_2: u64,
    pub word_3: u64,
    pub word_4: u64,
}

impl FeltWords {
    pub fn new(word_1: u64, word_2: u64, word_3: u64, word_4: u64) -> Self {
        return Self {
            word_1,
            word_2,
            word_3,
            word_4,
        };
    }

    /// Validate words received from the call boundary, where each word
    /// arrives as an untyped integer rather than a fixed-width one. A
    /// sequence with the wrong length, or with a word that overflows its
    /// 64-bit slot, is rejected.
    pub fn from_limbs(limbs: &[BigInt]) -> Result<Self, ConversionError> {
        if limbs.len() != WORD_COUNT {
            return Err(ConversionError::MalformedLimbs);
        }
        let mut words = [0u64; WORD_COUNT];
        for (word, limb) in words.iter_mut().zip(limbs.iter()) {
            *word = narrow_to_word(limb)?;
        }
        return Ok(Self::new(words[0], words[1], words[2], words[3]));
    }

    /// The words in most-significant-first order
    pub fn to_array(&self) -> [u64; WORD_COUNT] {
        [self.word_1, self.word_2, self.word_3, self.word_4]
    }
}

/// Split a felt into four 64-bit words, most significant word first
pub fn felt_to_words(felt: &Felt) -> FeltWords {
    let bytes = felt.get_value().to_be_bytes();
    let mut words = [0u64; WORD_COUNT];
    for (i, word) in words.iter_mut().enumerate() {
        let start = bytes.len() - (WORD_COUNT - i) * WORD_BITS / 8;
        *word = u64::from_be_bytes(bytes[start..start + 8].try_into().unwrap());
    }
    return FeltWords::new(words[0], words[1], words[2], words[3]);
}

/// Reassemble a felt from its four words. Words encoding an integer at or
/// above the field order do not correspond to any felt and are rejected.
pub fn words_to_felt(words: &FeltWords) -> Result<Felt, ConversionError> {
    let mut value = BigInt::ZERO;
    for word in words.to_array() {
        value = value.shl_vartime(WORD_BITS).bitor(&BigInt::from_u64(word));
    }
    return Felt::from_uint(value).map_err(|_| ConversionError::ValueExceedsFieldOrder);
}

/// Narrow a boundary integer into a single word
fn narrow_to_word(limb: &BigInt) -> Result<u64, ConversionError> {
    if *limb > BigInt::from_u64(u64::MAX) {
        return Err(ConversionError::MalformedLimbs);
    }
    let bytes = limb.to_be_bytes();
    let start = bytes.len() - 8;
    return Ok(u64::from_be_bytes(bytes[start..].try_into().unwrap()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::{rand_core::OsRng, NonZero, RandomMod};

    /// The address-sized scalar used as the reference decomposition vector
    const SAMPLE_FELT: &str = "000000000000000000000000000000000000000000000000000000000000000000ffffffffff2234245fffffffffff234234fffffff234453ffffffffff3534f";

    #[test]
    fn test_felt_to_words() {
        let input = Felt::from_uint(BigInt::from_be_hex(SAMPLE_FELT)).unwrap();
        let words = felt_to_words(&input);
        assert_eq!(words.word_1, 0x00ffffffffff2234);
        assert_eq!(words.word_2, 0x245fffffffffff23);
        assert_eq!(words.word_3, 0x4234fffffff23445);
        assert_eq!(words.word_4, 0x3ffffffffff3534f);
        assert_eq!(words_to_felt(&words).unwrap(), input);
    }

    #[test]
    fn test_zero_round_trip() {
        let words = felt_to_words(&Felt::ZERO);
        assert_eq!(words, FeltWords::new(0, 0, 0, 0));
        assert_eq!(words_to_felt(&words).unwrap(), Felt::ZERO);
    }

    /// The largest felt sits right below the field order and must survive
    /// the round trip exactly
    #[test]
    fn test_max_felt_round_trip() {
        let words = felt_to_words(&Felt::MAX);
        assert_eq!(words, FeltWords::new(0x0800000000000011, 0, 0, 0));
        assert_eq!(words_to_felt(&words).unwrap(), Felt::MAX);
    }

    /// Splitting is canonical: reassembling and splitting again always
    /// reproduces the same words
    #[test]
    fn test_random_round_trip() {
        let modulus = NonZero::new(FIELD_ORDER).unwrap();
        for _ in 1..100 {
            let felt = Felt::from_uint(BigInt::random_mod(&mut OsRng, &modulus)).unwrap();
            let words = felt_to_words(&felt);
            let reconstructed = words_to_felt(&words).unwrap();
            assert_eq!(reconstructed, felt);
            assert_eq!(felt_to_words(&reconstructed), words);
        }
    }

    /// Each word fits its slot, yet together they encode an integer at or
    /// above the field order
    #[test]
    fn test_rejects_noncanonical_words() {
        // exactly the field order: 2^251 + 17 * 2^192 + 1
        let order = FeltWords::new(0x0800000000000011, 0, 0, 1);
        assert_eq!(
            words_to_felt(&order),
            Err(ConversionError::ValueExceedsFieldOrder)
        );
        let saturated = FeltWords::new(u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(
            words_to_felt(&saturated),
            Err(ConversionError::ValueExceedsFieldOrder)
        );
    }

    #[test]
    fn test_rejects_malformed_limbs() {
        let short = vec![BigInt::ONE; WORD_COUNT - 1];
        assert_eq!(
            FeltWords::from_limbs(&short),
            Err(ConversionError::MalformedLimbs)
        );
        let long = vec![BigInt::ONE; WORD_COUNT + 1];
        assert_eq!(
            FeltWords::from_limbs(&long),
            Err(ConversionError::MalformedLimbs)
        );

        // one past the top of the 64-bit slot
        let wide = BigInt::ONE.shl_vartime(WORD_BITS);
        let limbs = [wide, BigInt::ZERO, BigInt::ZERO, BigInt::ZERO];
        assert_eq!(
            FeltWords::from_limbs(&limbs),
            Err(ConversionError::MalformedLimbs)
        );
    }

    #[test]
    fn test_from_limbs_matches_decomposition() {
        let input = Felt::from_uint(BigInt::from_be_hex(SAMPLE_FELT)).unwrap();
        let limbs = felt_to_words(&input)
            .to_array()
            .map(BigInt::from_u64);
        let words = FeltWords::from_limbs(&limbs).unwrap();
        assert_eq!(words, felt_to_words(&input));
    }
}
