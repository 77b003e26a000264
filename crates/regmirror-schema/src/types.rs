//! Core identity types: package names, versions, and actors.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::{SCOPE_MARKER, SCOPE_SEPARATOR};

/// Errors returned by the strict [`PackageName::validated`] constructor.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NameError {
    /// The name is the empty string.
    #[error("Empty package name")]
    Empty,

    /// A scoped name is missing its `/local` segment or has an empty scope.
    #[error("Invalid scoped package name: expected '@scope/name', got '{0}'")]
    MalformedScope(String),
}

/// A registry package name, either plain (`lodash`) or scoped (`@babel/core`).
///
/// The name is stored exactly as given. Object-store keys are bit-exact
/// contracts, so no case folding or trimming is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Create a package name without validation.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a package name, rejecting empty names and scoped names that
    /// lack a non-empty scope and local part.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for `""` and [`NameError::MalformedScope`]
    /// for inputs such as `@`, `@scope` or `@/pkg`.
    pub fn validated(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let candidate = Self::new(name);
        if candidate.is_scoped() {
            match name[1..].split_once(SCOPE_SEPARATOR) {
                Some((scope, local)) if !scope.is_empty() && !local.is_empty() => {}
                _ => return Err(NameError::MalformedScope(name.to_string())),
            }
        }
        Ok(candidate)
    }

    /// True iff the first character is `@`.
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with(SCOPE_MARKER)
    }

    /// The scope segment (`@scope`), i.e. everything before the first `/`.
    ///
    /// Returns `None` for plain names. A scoped name with no `/` yields the
    /// whole name, matching a plain split on the separator.
    pub fn scope(&self) -> Option<&str> {
        if !self.is_scoped() {
            return None;
        }
        self.0.split(SCOPE_SEPARATOR).next()
    }

    /// Name flattened into a single path segment: `/` becomes `-` and `@` is
    /// dropped, so `@scope/pkg` turns into `scope-pkg`.
    pub fn flattened(&self) -> String {
        self.0.replace(SCOPE_SEPARATOR, "-").replace(SCOPE_MARKER, "")
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for PackageName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// An opaque version string. No semver parsing is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Create a new version from the given string (stored as-is).
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    /// The first `max_chars` characters of the version.
    ///
    /// Counts characters rather than bytes so a multi-byte version string is
    /// never split inside a code point.
    pub fn prefix(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Return the version string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Kind of object mirrored into the CDN origin.
///
/// Determines which key template is used for the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// The package tarball itself (`/{name}/-/{filename}`).
    Tarball,
    /// Per-version manifest (`/{name}/sync/packages/package-{version}.json`).
    VersionManifest,
    /// Distribution tag pointer (`/{name}/sync/tags/tag-{tag}.json`).
    DistTag,
    /// Unpublish marker (`/{name}/sync/unpublish/unpublish-package.json`).
    UnpublishMarker,
}

impl ArtifactKind {
    /// All kinds, in key-table order.
    pub const ALL: [Self; 4] = [
        Self::Tarball,
        Self::VersionManifest,
        Self::DistTag,
        Self::UnpublishMarker,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tarball => "tarball",
            Self::VersionManifest => "version-manifest",
            Self::DistTag => "dist-tag",
            Self::UnpublishMarker => "unpublish-marker",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized schemes of an `Authorization` header.
///
/// An unrecognized header is represented as `None` at the call site rather
/// than as a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthScheme {
    /// `Basic <base64 user:pass>`
    Basic,
    /// `Bearer <token>`
    Bearer,
}

impl AuthScheme {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Bearer => "BEARER",
        }
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated user acting on the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Login name.
    pub name: String,
    /// Whether the session was established for an administrator.
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

impl Actor {
    /// Create a new actor.
    pub fn new(name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            is_admin,
        }
    }
}

/// One entry of a package's maintainer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    /// Maintainer login name.
    pub name: String,
    /// Contact address, when the registry recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Maintainer {
    /// Create a maintainer entry with no email.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_names_expose_their_scope() {
        let name = PackageName::from("@babel/core");
        assert!(name.is_scoped());
        assert_eq!(name.scope(), Some("@babel"));

        let plain = PackageName::from("lodash");
        assert!(!plain.is_scoped());
        assert_eq!(plain.scope(), None);
    }

    #[test]
    fn only_first_segment_is_the_scope() {
        let name = PackageName::from("@a/b/c");
        assert_eq!(name.scope(), Some("@a"));
    }

    #[test]
    fn flattened_drops_marker_and_separators() {
        assert_eq!(PackageName::from("@scope/pkg").flattened(), "scope-pkg");
        assert_eq!(PackageName::from("pkg").flattened(), "pkg");
    }

    #[test]
    fn malformed_names_are_not_rejected_by_new() {
        let bare = PackageName::from("@");
        assert!(bare.is_scoped());
        assert_eq!(bare.scope(), Some("@"));
    }

    #[test]
    fn validated_rejects_malformed_names() {
        assert_eq!(PackageName::validated(""), Err(NameError::Empty));
        assert!(matches!(
            PackageName::validated("@"),
            Err(NameError::MalformedScope(_))
        ));
        assert!(matches!(
            PackageName::validated("@scope"),
            Err(NameError::MalformedScope(_))
        ));
        assert!(matches!(
            PackageName::validated("@/pkg"),
            Err(NameError::MalformedScope(_))
        ));
        assert!(PackageName::validated("@scope/pkg").is_ok());
        assert!(PackageName::validated("pkg").is_ok());
    }

    #[test]
    fn version_prefix_counts_characters() {
        let v = Version::from("1.0.0-alpha.1234567890123");
        assert_eq!(v.prefix(20), "1.0.0-alpha.12345678");
        assert_eq!(Version::from("1.0.0").prefix(20), "1.0.0");
        assert_eq!(Version::from("ääää").prefix(2), "ää");
    }

    #[test]
    fn actor_reads_is_admin_flag() {
        let actor: Actor = serde_json::from_str(r#"{"name":"root","isAdmin":true}"#).unwrap();
        assert!(actor.is_admin);
        let actor: Actor = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();
        assert!(!actor.is_admin);
    }
}
