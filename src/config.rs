//! Hashing parameters and their defaults.
//!
//! Lengths are expressed the way callers see them: as the number of hex
//! characters in the encoded output. The raw byte counts handed to the
//! primitives are half of that, so both lengths must be even.

use serde::{Deserialize, Serialize};

use crate::crypto::Digest;
use crate::error::HashError;

/// Default derived key length in hex characters (256 raw bytes).
pub const DEFAULT_LEN: usize = 512;
/// Default salt length in hex characters (64 raw bytes).
pub const DEFAULT_SALT_LEN: usize = 128;
/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 18_000;
/// Default PBKDF2 digest.
pub const DEFAULT_DIGEST: Digest = Digest::Sha512;

/// Fully resolved, validated hashing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHashConfig")]
pub struct HashConfig {
    len: usize,
    salt_len: usize,
    iterations: u32,
    digest: Digest,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            salt_len: DEFAULT_SALT_LEN,
            iterations: DEFAULT_ITERATIONS,
            digest: DEFAULT_DIGEST,
        }
    }
}

#[allow(clippy::len_without_is_empty)] // lengths are validated non-zero
impl HashConfig {
    pub fn new(
        len: usize,
        salt_len: usize,
        iterations: u32,
        digest: Digest,
    ) -> Result<Self, HashError> {
        let config = Self {
            len,
            salt_len,
            iterations,
            digest,
        };
        config.validate()?;
        Ok(config)
    }

    /// Length of the hex encoded derived key.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Length of the hex encoded generated salt.
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Raw bytes requested from the key derivation.
    pub fn key_bytes(&self) -> usize {
        self.len / 2
    }

    /// Raw bytes requested from the random generator.
    pub fn salt_bytes(&self) -> usize {
        self.salt_len / 2
    }

    pub fn validate(&self) -> Result<(), HashError> {
        check_hex_len("len", self.len)?;
        check_hex_len("saltLen", self.salt_len)?;
        if self.iterations < 1 {
            return Err(HashError::InvalidConfig(
                "iterations must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Layer `options` over this configuration. Fields left unset in
    /// `options` keep the value from `self`.
    pub fn merge(&self, options: &HashOptions) -> Result<Self, HashError> {
        let digest = match options.digest.as_deref() {
            Some(name) => name.parse()?,
            None => self.digest,
        };

        Self::new(
            options.len.unwrap_or(self.len),
            options.salt_len.unwrap_or(self.salt_len),
            options.iterations.unwrap_or(self.iterations),
            digest,
        )
    }
}

fn check_hex_len(field: &str, value: usize) -> Result<(), HashError> {
    if value == 0 {
        return Err(HashError::InvalidConfig(format!("{field} must be > 0")));
    }
    if value % 2 != 0 {
        return Err(HashError::InvalidConfig(format!(
            "{field} must be even, got {value}"
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawHashConfig {
    len: usize,
    salt_len: usize,
    iterations: u32,
    digest: Digest,
}

impl Default for RawHashConfig {
    fn default() -> Self {
        let defaults = HashConfig::default();
        Self {
            len: defaults.len,
            salt_len: defaults.salt_len,
            iterations: defaults.iterations,
            digest: defaults.digest,
        }
    }
}

impl TryFrom<RawHashConfig> for HashConfig {
    type Error = HashError;

    fn try_from(raw: RawHashConfig) -> Result<Self, Self::Error> {
        HashConfig::new(raw.len, raw.salt_len, raw.iterations, raw.digest)
    }
}

/// Per-call (or per-instance) overrides.
///
/// Any field left as `None` falls back to the next layer: instance
/// configuration, then the hard-coded defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashOptions {
    /// Salt to derive against instead of generating one. Used verbatim.
    pub salt: Option<String>,
    pub len: Option<usize>,
    pub salt_len: Option<usize>,
    pub iterations: Option<u32>,
    /// Digest name, e.g. `"sha256"`. Unknown names fail at call time.
    pub digest: Option<String>,
}

impl HashOptions {
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = Some(salt_len);
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    /// The caller supplied salt, if any. An empty salt counts as absent.
    pub fn explicit_salt(&self) -> Option<&str> {
        self.salt.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = HashConfig::default();
        assert_eq!(config.len(), 512);
        assert_eq!(config.salt_len(), 128);
        assert_eq!(config.iterations(), 18_000);
        assert_eq!(config.digest(), Digest::Sha512);
        assert_eq!(config.key_bytes(), 256);
        assert_eq!(config.salt_bytes(), 64);
    }

    #[test]
    fn odd_or_zero_lengths_are_rejected() {
        assert!(HashConfig::new(511, 128, 1, Digest::Sha512).is_err());
        assert!(HashConfig::new(512, 127, 1, Digest::Sha512).is_err());
        assert!(HashConfig::new(0, 128, 1, Digest::Sha512).is_err());
        assert!(HashConfig::new(512, 0, 1, Digest::Sha512).is_err());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        match HashConfig::new(64, 32, 0, Digest::Sha256) {
            Err(HashError::InvalidConfig(msg)) => assert!(msg.contains("iterations")),
            other => panic!("expected InvalidConfig, got: {other:?}"),
        }
    }

    #[test]
    fn merge_prefers_explicit_options() {
        let instance = HashConfig::new(64, 32, 100, Digest::Sha256).unwrap();
        let merged = instance
            .merge(&HashOptions::default().with_len(128).with_digest("sha384"))
            .unwrap();

        assert_eq!(merged.len(), 128);
        assert_eq!(merged.salt_len(), 32);
        assert_eq!(merged.iterations(), 100);
        assert_eq!(merged.digest(), Digest::Sha384);
    }

    #[test]
    fn merge_with_empty_options_is_identity() {
        let instance = HashConfig::new(64, 32, 100, Digest::Sha256).unwrap();
        assert_eq!(instance.merge(&HashOptions::default()).unwrap(), instance);
    }

    #[test]
    fn merge_reports_unknown_digest() {
        let err = HashConfig::default()
            .merge(&HashOptions::default().with_digest("md5"))
            .unwrap_err();
        assert_eq!(err, HashError::UnsupportedDigest("md5".into()));
    }

    #[test]
    fn empty_salt_counts_as_absent() {
        assert_eq!(HashOptions::default().with_salt("").explicit_salt(), None);
        assert_eq!(
            HashOptions::default().with_salt("abcd").explicit_salt(),
            Some("abcd")
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(HashConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "len": 512,
                "saltLen": 128,
                "iterations": 18000,
                "digest": "sha512"
            })
        );
    }

    #[test]
    fn deserialization_fills_defaults_and_validates() {
        let config: HashConfig =
            serde_json::from_str(r#"{"iterations": 1000, "digest": "SHA256"}"#).unwrap();
        assert_eq!(config.len(), DEFAULT_LEN);
        assert_eq!(config.iterations(), 1000);
        assert_eq!(config.digest(), Digest::Sha256);

        assert!(serde_json::from_str::<HashConfig>(r#"{"len": 33}"#).is_err());
        assert!(serde_json::from_str::<HashConfig>(r#"{"digest": "md5"}"#).is_err());
    }
}
