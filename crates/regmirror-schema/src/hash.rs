//! Digest newtypes used for content addressing.

use serde::{Deserialize, Serialize};

/// Number of digest bytes kept in an [`UploadDigest`].
pub const UPLOAD_DIGEST_LEN: usize = 16;

/// Short BLAKE3 digest used to make upload file names unique.
///
/// Only guards against accidental collisions between staged uploads, so the
/// 256-bit BLAKE3 output is truncated to 128 bits (32 hex characters). This is
/// not an integrity hash and must never be compared against published
/// checksums.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadDigest(String);

impl UploadDigest {
    /// Digest arbitrary bytes.
    pub fn compute(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Self(hex::encode(&hash.as_bytes()[..UPLOAD_DIGEST_LEN]))
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UploadDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UploadDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
