use getrandom::fill;
use tracing::debug;

use crate::error::HashError;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<(), HashError> {
    fill(buf).map_err(|e| HashError::Entropy(e.to_string()))
}

/// Generate `len` random bytes and return them hex encoded
pub fn generate_salt(len: usize) -> Result<String, HashError> {
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    debug!(salt_bytes = len, "generated salt");
    Ok(hex::encode(salt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_lowercase_hex_of_requested_size() {
        let salt = generate_salt(64).unwrap();
        assert_eq!(salt.len(), 128);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn salts_differ() {
        assert_ne!(generate_salt(16).unwrap(), generate_salt(16).unwrap());
    }
}
