//! Local staging paths for incoming tarball uploads.
//!
//! Layout: `<upload_dir>/<flattened name>-<version prefix>.<digest>.tgz`
//!
//! Concurrent uploads of the same package and version must never share a path,
//! so the digest covers the suggested file name plus a fresh random token.

use std::path::PathBuf;
use std::sync::Arc;

use rand::RngCore;
use regmirror_schema::{PackageName, UploadDigest, Version};

use crate::config::Config;

/// Number of version characters kept in an upload file name.
pub const VERSION_PREFIX_CHARS: usize = 20;

const TARBALL_EXT: &str = ".tgz";

/// 128 bits of randomness mixed into every upload file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadToken([u8; 16]);

impl UploadToken {
    /// Draw a token from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Build a token from fixed bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Lowercase hex form (32 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// File name for an upload, given an explicit token.
///
/// The suggested name loses its `.tgz` suffix and gains `.<token>`; that string
/// is digested, and the digest lands between the bounded name/version prefix
/// and the `.tgz` extension. Never fails and performs no I/O.
pub fn upload_file_name(
    name: &PackageName,
    version: &Version,
    suggested: &str,
    token: &UploadToken,
) -> String {
    let stem = suggested.strip_suffix(TARBALL_EXT).unwrap_or(suggested);
    let randomized = format!("{stem}.{}", token.to_hex());
    let digest = UploadDigest::compute(randomized.as_bytes());
    format!(
        "{}-{}.{digest}{TARBALL_EXT}",
        name.flattened(),
        version.prefix(VERSION_PREFIX_CHARS)
    )
}

/// Builds unique staging paths under the configured upload directory.
#[derive(Debug, Clone)]
pub struct StoragePathBuilder {
    config: Arc<Config>,
}

impl StoragePathBuilder {
    /// Create a builder reading `upload_dir` from `config`.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// A fresh, unique staging path for an upload.
    ///
    /// Two calls with identical arguments return different paths.
    pub fn upload_path(&self, name: &PackageName, version: &Version, suggested: &str) -> PathBuf {
        self.upload_path_with_token(name, version, suggested, &UploadToken::generate())
    }

    /// Same as [`upload_path`](Self::upload_path) with a caller-supplied token.
    pub fn upload_path_with_token(
        &self,
        name: &PackageName,
        version: &Version,
        suggested: &str,
        token: &UploadToken,
    ) -> PathBuf {
        let path = self
            .config
            .upload_dir
            .join(upload_file_name(name, version, suggested, token));
        tracing::debug!("Allocated upload path for {name}@{version}: {}", path.display());
        path
    }
}
