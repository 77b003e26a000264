//! Object-store keys for mirrored artifacts and metadata.
//!
//! | Kind              | Key                                                |
//! |-------------------|----------------------------------------------------|
//! | Tarball           | `/{name}/-/{filename}`                             |
//! | Version manifest  | `/{name}/sync/packages/package-{version}.json`     |
//! | Dist tag          | `/{name}/sync/tags/tag-{tag}.json`                 |
//! | Unpublish marker  | `/{name}/sync/unpublish/unpublish-package.json`    |
//!
//! Keys are bit-exact contracts with objects already stored in the bucket.
//! No component of a key is validated or escaped here.

use regmirror_schema::{ArtifactKind, PackageName, SCOPE_MARKER};

use crate::backup::{package_file_name, tag_file_name};

/// Fixed file name of the unpublish marker.
pub const UNPUBLISH_FILE: &str = "unpublish-package.json";

/// Key of a package tarball.
///
/// For a scoped package whose `filename` was derived from the local name only
/// (`pkg-1.0.0.tgz`), the scope is prepended so the key nests under the scope:
/// `@scope/pkg` + `pkg-1.0.0.tgz` gives `/@scope/pkg/-/@scope/pkg-1.0.0.tgz`.
pub fn tarball_key(name: &PackageName, filename: &str) -> String {
    match name.scope() {
        Some(scope) if !filename.starts_with(SCOPE_MARKER) => {
            format!("/{name}/-/{scope}/{filename}")
        }
        _ => format!("/{name}/-/{filename}"),
    }
}

/// Key of a per-version manifest.
pub fn package_file_key(name: &PackageName, version: &str) -> String {
    format!("/{}{}", sync_package_dir(name), package_file_name(version))
}

/// Key of a distribution tag.
pub fn dist_tag_key(name: &PackageName, tag: &str) -> String {
    format!("/{}{}", sync_tag_dir(name), tag_file_name(tag))
}

/// Key of the unpublish marker.
pub fn unpublish_key(name: &PackageName) -> String {
    format!("/{name}/sync/unpublish/{UNPUBLISH_FILE}")
}

/// Listing prefix for a package's tag objects. Note: no leading `/`.
pub fn sync_tag_dir(name: &PackageName) -> String {
    format!("{name}/sync/tags/")
}

/// Listing prefix for a package's version manifests. Note: no leading `/`.
pub fn sync_package_dir(name: &PackageName) -> String {
    format!("{name}/sync/packages/")
}

/// An artifact reference together with the identifier its kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKey<'a> {
    /// Tarball file name.
    Tarball(&'a str),
    /// Manifest version.
    VersionManifest(&'a str),
    /// Tag name.
    DistTag(&'a str),
    /// Unpublish marker.
    UnpublishMarker,
}

impl ArtifactKey<'_> {
    /// The kind this reference belongs to.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Tarball(_) => ArtifactKind::Tarball,
            Self::VersionManifest(_) => ArtifactKind::VersionManifest,
            Self::DistTag(_) => ArtifactKind::DistTag,
            Self::UnpublishMarker => ArtifactKind::UnpublishMarker,
        }
    }

    /// Object-store key for this artifact of `name`.
    pub fn cdn_key(&self, name: &PackageName) -> String {
        match *self {
            Self::Tarball(filename) => tarball_key(name, filename),
            Self::VersionManifest(version) => package_file_key(name, version),
            Self::DistTag(tag) => dist_tag_key(name, tag),
            Self::UnpublishMarker => unpublish_key(name),
        }
    }
}
