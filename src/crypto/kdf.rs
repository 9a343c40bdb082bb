use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use tracing::debug;
use zeroize::Zeroizing;

use super::Digest;
use crate::error::HashError;

/// Run PBKDF2-HMAC over `password` and `salt`, producing `key_len` raw bytes.
///
/// The salt is taken as given; callers pass the hex text of the salt, not
/// its decoded bytes. `iterations` must already be validated as non-zero,
/// see [`HashConfig::validate`](crate::HashConfig::validate).
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    digest: Digest,
) -> Result<Zeroizing<Vec<u8>>, HashError> {
    let mut key = Zeroizing::new(vec![0u8; key_len]);
    let out = key.as_mut_slice();

    match digest {
        Digest::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, iterations, out),
        Digest::Sha224 => pbkdf2_hmac::<Sha224>(password, salt, iterations, out),
        Digest::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations, out),
        Digest::Sha384 => pbkdf2_hmac::<Sha384>(password, salt, iterations, out),
        Digest::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, iterations, out),
        Digest::Sha512_224 => pbkdf2_hmac::<Sha512_224>(password, salt, iterations, out),
        Digest::Sha512_256 => pbkdf2_hmac::<Sha512_256>(password, salt, iterations, out),
    }

    debug!(%digest, iterations, key_bytes = key_len, "derived key");
    Ok(key)
}

/// Derive and hex encode in one step.
pub fn derive_key_hex(
    password: &str,
    salt: &str,
    iterations: u32,
    key_len: usize,
    digest: Digest,
) -> Result<String, HashError> {
    let key = derive_key(
        password.as_bytes(),
        salt.as_bytes(),
        iterations,
        key_len,
        digest,
    )?;
    Ok(hex::encode(key.as_slice()))
}
