//! Random identifier generation
//!
//! Short lowercase identifiers used to tag request log lines. Sampling is
//! rejection-based so every alphabet letter is drawn with equal probability.

use rand::RngCore;

/// Alphabet identifiers are drawn from
const ALPHABET: &str = "abcdefghijklmnopqrstuvxyz";

/// Number of characters in a generated identifier
const SIZE: usize = 8;

/// Generate a random identifier
///
/// Random bytes are masked down to the next power of two above the alphabet
/// length; masked values outside the alphabet are rejected rather than
/// wrapped, so no letter is over-represented.
#[must_use]
pub fn generate() -> String {
    let letters: Vec<char> = ALPHABET.chars().collect();
    let mask = if letters.len() > 1 {
        (2_usize << (usize::BITS - 1 - (letters.len() - 1).leading_zeros())) - 1
    } else {
        1
    };
    // 1.6 gives a slight oversupply of bytes per round, as 8/5 in integers
    let step = (8 * mask * SIZE).div_ceil(5 * letters.len());

    let mut rng = rand::rng();
    let mut buffer = vec![0_u8; step];
    let mut identifier = String::with_capacity(SIZE);
    loop {
        rng.fill_bytes(&mut buffer);
        for byte in &buffer {
            let index = usize::from(*byte) & mask;
            if let Some(letter) = letters.get(index) {
                identifier.push(*letter);
                if identifier.len() == SIZE {
                    return identifier;
                }
            }
        }
    }
}
