//! Salted PBKDF2 password hashing.
//!
//! [`PasswordHasher::hash`] stretches a password into a hex encoded derived
//! key and returns it together with the salt that was used.
//! [`PasswordHasher::verify`] recomputes the key for a stored salt and
//! compares it with the stored hash.
//!
//! ```no_run
//! use pwstretch::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let stored = hasher.hash_default("correct-password")?;
//!
//! assert!(hasher.verify("correct-password", stored.hash(), stored.salt())?);
//! assert!(!hasher.verify("wrong-password", stored.hash(), stored.salt())?);
//! # Ok::<(), pwstretch::HashError>(())
//! ```

mod config;
mod crypto;
mod error;

pub use crate::config::{
    DEFAULT_DIGEST, DEFAULT_ITERATIONS, DEFAULT_LEN, DEFAULT_SALT_LEN, HashConfig, HashOptions,
};
pub use crate::crypto::Digest;
pub use crate::error::HashError;
use subtle::ConstantTimeEq;
use tracing::debug;

/// A derived key and the salt it was derived with, both as strings ready to
/// be stored by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    hash: String,
    salt: String,
}

impl PasswordHash {
    /// Hex encoded derived key.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Salt used for the derivation.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Split into `(hash, salt)`.
    pub fn into_parts(self) -> (String, String) {
        (self.hash, self.salt)
    }
}

/// Hashes and verifies passwords with a fixed instance configuration.
///
/// The hasher holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    config: HashConfig,
}

impl PasswordHasher {
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// Build an instance configuration by layering `options` over the
    /// hard-coded defaults. A salt in `options` is ignored.
    pub fn from_options(options: &HashOptions) -> Result<Self, HashError> {
        let config = HashConfig::default().merge(options)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash `password` using the instance configuration and a fresh salt.
    pub fn hash_default(&self, password: &str) -> Result<PasswordHash, HashError> {
        self.hash(password, &HashOptions::default())
    }

    /// Hash `password`.
    ///
    /// Without a salt in `options` a random one of `salt_len` hex characters
    /// is generated first. A supplied salt is used verbatim and returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a merged length is zero or odd, or iterations is zero
    /// - the digest name is not supported
    /// - the OS random generator fails
    pub fn hash(&self, password: &str, options: &HashOptions) -> Result<PasswordHash, HashError> {
        let config = self.config.merge(options)?;

        let salt = match options.explicit_salt() {
            Some(salt) => salt.to_string(),
            None => crypto::generate_salt(config.salt_bytes())?,
        };

        let hash = crypto::derive_key_hex(
            password,
            &salt,
            config.iterations(),
            config.key_bytes(),
            config.digest(),
        )?;

        Ok(PasswordHash { hash, salt })
    }

    /// Check `password` against a hash previously produced with `salt` under
    /// the instance configuration.
    ///
    /// A mismatch yields `Ok(false)`; errors are reserved for derivation
    /// failures.
    pub fn verify(&self, password: &str, expected_hash: &str, salt: &str) -> Result<bool, HashError> {
        self.verify_with(password, expected_hash, salt, &HashOptions::default())
    }

    /// Like [`verify`](Self::verify), but with `options` layered over the
    /// instance configuration, for credentials stored with their own
    /// parameters. `salt` replaces any salt set in `options`.
    pub fn verify_with(
        &self,
        password: &str,
        expected_hash: &str,
        salt: &str,
        options: &HashOptions,
    ) -> Result<bool, HashError> {
        let options = options.clone().with_salt(salt);
        let recomputed = self.hash(password, &options)?;

        let matches: bool = recomputed
            .hash
            .as_bytes()
            .ct_eq(expected_hash.as_bytes())
            .into();
        debug!(matches, "verified password");

        Ok(matches)
    }
}
