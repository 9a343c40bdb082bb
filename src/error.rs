use thiserror::Error;

/// Errors returned by hashing and verification.
///
/// A password that does not match is not an error; see
/// [`PasswordHasher::verify`](crate::PasswordHasher::verify).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// A length is zero or odd, or the iteration count is zero.
    #[error("invalid hash configuration: {0}")]
    InvalidConfig(String),

    /// The digest name is not a PBKDF2 digest this crate supports.
    #[error("unsupported digest '{0}'")]
    UnsupportedDigest(String),

    /// The OS random generator could not produce a salt.
    #[error("OS random generator unavailable: {0}")]
    Entropy(String),
}

impl HashError {
    /// Whether the error came from one of the underlying primitives
    /// (random generator or key derivation) rather than from parameter checks.
    pub fn is_primitive_failure(&self) -> bool {
        matches!(self, HashError::UnsupportedDigest(_) | HashError::Entropy(_))
    }
}
