//! Cryptographic primitives for password stretching.
//!
//! Provides salt generation and PBKDF2 key derivation over SHA-1 and the SHA-2
//! family.

pub mod digest;
pub mod kdf;
pub mod random;

pub use digest::Digest;
pub use kdf::derive_key_hex;
pub use random::generate_salt;
