//! Digest newtypes and the per-artifact checksum triple.

use serde::{Deserialize, Serialize};

/// Newtype for a lowercase hexadecimal digest string.
///
/// Provides compile-time distinction from other strings and optional
/// runtime validation. The index and release formats carry MD5 (32 hex
/// chars), SHA-1 (40) and SHA-256 (64) digests side by side, so the type
/// is algorithm-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HexDigest(String);

impl HexDigest {
    /// Create a new `HexDigest` without validation (for freshly computed
    /// digests, which are lowercase hex by construction).
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create a validated `HexDigest`.
    ///
    /// Accepts MD5, SHA-1 or SHA-256 length hex strings and normalizes
    /// them to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error string if `s` is not 32, 40 or 64 ASCII hex
    /// characters.
    pub fn validated(s: &str) -> Result<Self, String> {
        if matches!(s.len(), 32 | 40 | 64) && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_lowercase()))
        } else {
            Err(format!(
                "Invalid digest: expected 32, 40 or 64 hex chars, got '{s}'"
            ))
        }
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for HexDigest {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for HexDigest {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The three checksum algorithms carried by the index and release formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgo {
    /// MD5 (legacy, still emitted for compatibility).
    Md5,
    /// SHA-1 (legacy, still emitted for compatibility).
    Sha1,
    /// SHA-256.
    Sha256,
}

impl ChecksumAlgo {
    /// All algorithms in the order the release manifest lists them.
    pub const ALL: [Self; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// The block header this algorithm uses in a `Release` file.
    pub fn release_header(self) -> &'static str {
        match self {
            Self::Md5 => "MD5Sum",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }
}

impl std::fmt::Display for ChecksumAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.release_header())
    }
}

/// MD5, SHA-1 and SHA-256 digests of one byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChecksumSet {
    /// MD5 digest (32 hex chars).
    pub md5: HexDigest,
    /// SHA-1 digest (40 hex chars).
    pub sha1: HexDigest,
    /// SHA-256 digest (64 hex chars).
    pub sha256: HexDigest,
}

impl ChecksumSet {
    /// Get the digest for one algorithm.
    pub fn get(&self, algo: ChecksumAlgo) -> &HexDigest {
        match algo {
            ChecksumAlgo::Md5 => &self.md5,
            ChecksumAlgo::Sha1 => &self.sha1,
            ChecksumAlgo::Sha256 => &self.sha256,
        }
    }
}
