//! Package descriptors as stored by the registry and served to clients.
//!
//! Only the fields the mirror inspects are typed; everything else is kept in
//! `extra` so a descriptor survives a read-modify-write unchanged.

use serde::{Deserialize, Serialize};

use crate::types::{PackageName, Version};

/// Distribution descriptor of a package version (`dist` in the manifest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dist {
    /// Advertised download URL of the tarball.
    #[serde(default)]
    pub tarball: String,
    /// SHA-1 of the tarball, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shasum: Option<String>,
    /// Remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A resolved package version descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDoc {
    /// Package name.
    pub name: PackageName,
    /// Resolved version.
    pub version: Version,
    /// Distribution descriptor. Versions without one are not downloadable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<Dist>,
    /// Set when the version was published directly to this registry rather
    /// than mirrored from upstream.
    #[serde(
        default,
        rename = "_publish_on_cnpm",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub published_locally: bool,
    /// Remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PackageDoc {
    /// Create a bare descriptor with no distribution info.
    pub fn new(name: impl Into<PackageName>, version: impl Into<Version>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dist: None,
            published_locally: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Attach an empty distribution descriptor.
    pub fn with_dist(mut self) -> Self {
        self.dist = Some(Dist::default());
        self
    }
}

/// One module row as returned by the registry's module store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// The package descriptor of this row, if it was loaded.
    #[serde(default)]
    pub package: Option<PackageDoc>,
}
