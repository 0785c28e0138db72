//! Alias code candidate generation.
//!
//! Candidates are drawn uniformly from the 62-symbol alphanumeric alphabet.
//! Uniqueness is NOT guaranteed here; the link service checks every
//! candidate against the store and retries on collision.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default alias length. 62^8 ≈ 2.2e14 combinations.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Generates a random alias candidate of `length` characters from
/// `[A-Za-z0-9]`, each drawn independently and uniformly.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
