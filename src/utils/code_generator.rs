//! Short code generation.

use rand::{Rng, distr::Alphanumeric};

/// Generates a random short code of the given length.
///
/// Draws uniformly from the 62-symbol alphabet `[A-Za-z0-9]` using the
/// thread-local RNG. Not seeded and not cryptographically secure. No
/// collision check is performed against existing entries; the store treats a
/// colliding code as an overwrite.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
