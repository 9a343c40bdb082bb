use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HashError;

/// Hash function driving the PBKDF2 HMAC.
///
/// Names follow the OpenSSL spelling (`sha1`, `sha512`, `sha512-256`, ...) so
/// values stored next to existing credentials keep parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Digest {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl Digest {
    pub const ALL: [Digest; 7] = [
        Digest::Sha1,
        Digest::Sha224,
        Digest::Sha256,
        Digest::Sha384,
        Digest::Sha512,
        Digest::Sha512_224,
        Digest::Sha512_256,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Digest::Sha1 => "sha1",
            Digest::Sha224 => "sha224",
            Digest::Sha256 => "sha256",
            Digest::Sha384 => "sha384",
            Digest::Sha512 => "sha512",
            Digest::Sha512_224 => "sha512-224",
            Digest::Sha512_256 => "sha512-256",
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.to_ascii_lowercase();
        Digest::ALL
            .into_iter()
            .find(|d| d.as_str() == lowered)
            .ok_or_else(|| HashError::UnsupportedDigest(name.to_string()))
    }
}

impl TryFrom<String> for Digest {
    type Error = HashError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.as_str().to_string()
    }
}
