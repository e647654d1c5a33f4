//! A vanilla voting scenario: every voter carries a voting power of one

use felt_words::field::Felt;
use felt_words::uint256::SplitUint256;
use felt_words::words::{felt_to_words, words_to_felt};
use felt_words::BigInt;

const VOTE_TIMESTAMP: u64 = 1;
const VOTER_ADDRESS: u128 = 0xffffffffffffffffffff;

/// The vanilla strategy grants one vote to any address at any time
fn get_voting_power(_timestamp: u64, _voter: &Felt, _params: &[BigInt]) -> SplitUint256 {
    return SplitUint256::ONE;
}

fn main() {
    // Carry the voter address across the word boundary and back
    let voter = Felt::from_uint(BigInt::from_u128(VOTER_ADDRESS)).unwrap();
    let words = felt_to_words(&voter);
    let returned = words_to_felt(&words).unwrap();
    if returned != voter {
        panic!("Voter address corrupted crossing the word boundary");
    }

    // The strategy reports its result as two untyped limbs
    let power = get_voting_power(VOTE_TIMESTAMP, &voter, &[]);
    let low = BigInt::from_u128(power.get_low());
    let high = BigInt::from_u128(power.get_high());
    let reported = SplitUint256::from_limbs(&low, &high).unwrap();
    if reported != SplitUint256::from_uint(&BigInt::ONE).unwrap() {
        panic!("Voting power is not one");
    }

    println!(
        "Voter {:#x} holds voting power (low = {}, high = {})",
        VOTER_ADDRESS,
        reported.get_low(),
        reported.get_high(),
    );
}
