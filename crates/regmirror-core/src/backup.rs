//! Flat file names for archived metadata snapshots.
//!
//! Layout: `tag-<tag>.json` for distribution tags and `package-<version>.json`
//! for per-version manifests. The same names are the final segment of the
//! corresponding CDN keys (see [`crate::keys`]).
//!
//! Decoding strips exactly one trailing `.json`, so a tag such as `a.json`
//! round-trips through `tag-a.json.json`. The empty identifier does not
//! round-trip: `tag-.json` is not recognized, because at least one character
//! is required between prefix and suffix. Identifiers containing a newline do
//! not round-trip either.

use std::sync::LazyLock;

use regex::Regex;

const TAG_PREFIX: &str = "tag-";
const PACKAGE_PREFIX: &str = "package-";
const SUFFIX: &str = ".json";

static TAG_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tag-(.+)\.json$").expect("valid tag file pattern"));

static PACKAGE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^package-(.+)\.json$").expect("valid package file pattern"));

/// Backup file name for a distribution tag.
pub fn tag_file_name(tag: &str) -> String {
    format!("{TAG_PREFIX}{tag}{SUFFIX}")
}

/// Backup file name for a package version manifest.
pub fn package_file_name(version: &str) -> String {
    format!("{PACKAGE_PREFIX}{version}{SUFFIX}")
}

/// Tag name encoded in a backup file name, if it is one.
pub fn tag_from_file_name(file_name: &str) -> Option<&str> {
    capture(&TAG_FILE_RE, file_name)
}

/// Version encoded in a backup file name, if it is one.
pub fn version_from_file_name(file_name: &str) -> Option<&str> {
    capture(&PACKAGE_FILE_RE, file_name)
}

/// Whether `file_name` is a tag backup.
pub fn is_backup_tag_file(file_name: &str) -> bool {
    TAG_FILE_RE.is_match(file_name)
}

/// Whether `file_name` is a version manifest backup.
pub fn is_backup_pkg_file(file_name: &str) -> bool {
    PACKAGE_FILE_RE.is_match(file_name)
}

fn capture<'a>(re: &Regex, file_name: &'a str) -> Option<&'a str> {
    re.captures(file_name)
        .and_then(|caps| caps.get(1))
        .as_ref()
        .map(regex::Match::as_str)
}

/// A recognized backup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupFile<'a> {
    /// `tag-<tag>.json`
    Tag(&'a str),
    /// `package-<version>.json`
    Package(&'a str),
}

impl<'a> BackupFile<'a> {
    /// Classify a file name. Tag files are checked first; the two shapes
    /// cannot both match.
    pub fn parse(file_name: &'a str) -> Option<Self> {
        tag_from_file_name(file_name)
            .map(Self::Tag)
            .or_else(|| version_from_file_name(file_name).map(Self::Package))
    }

    /// Re-encode into the file name it was parsed from.
    pub fn file_name(&self) -> String {
        match self {
            Self::Tag(tag) => tag_file_name(tag),
            Self::Package(version) => package_file_name(version),
        }
    }
}
