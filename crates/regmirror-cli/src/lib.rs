//! regmirror - operator tooling for the registry mirror
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Prints the staging paths, object-store keys, backup file names and access
//! decisions the mirror would compute, so sync scripts and operators can use
//! the exact same naming rules as the registry itself.

pub mod cmd;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regmirror_core::Config;

#[derive(Debug, Parser)]
#[command(name = "regmirror")]
#[command(author, version, about = "regmirror - registry mirror key-space tool")]
pub struct Cli {
    /// Path to the mirror configuration (TOML)
    #[arg(short, long, global = true, env = "REGMIRROR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Allocate a unique staging path for a tarball upload
    UploadPath {
        /// Package name, plain or @scope/name
        name: String,
        /// Package version
        version: String,
        /// Suggested file name of the upload (e.g. pkg-1.0.0.tgz)
        filename: String,
    },
    /// Print object-store keys
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Encode or decode metadata backup file names
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Evaluate authorization and permission checks
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Compute the advertised tarball URL of a package version
    TarballUrl {
        /// Package name (omit when --manifest is given)
        #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
        name: Option<String>,
        /// Package version (omit when --manifest is given)
        #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
        version: Option<String>,
        /// Host override (takes precedence over the configured registry host)
        #[arg(long)]
        host: Option<String>,
        /// Host the request arrived on
        #[arg(long, default_value = "localhost")]
        request_host: String,
        /// Protocol the request arrived on
        #[arg(long, default_value = "http")]
        request_protocol: String,
        /// Rewrite the `dist.tarball` of this JSON descriptor and print it
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Check whether module rows (JSON array) were published to this registry
    LocalModule {
        /// JSON file containing the module rows
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum KeyCommands {
    /// Tarball key (`/{name}/-/{filename}`)
    Tarball { name: String, filename: String },
    /// Version manifest key
    Manifest { name: String, version: String },
    /// Distribution tag key
    Tag { name: String, tag: String },
    /// Unpublish marker key
    Unpublish { name: String },
    /// Listing prefixes for tags and version manifests
    Dirs { name: String },
}

#[derive(Debug, Subcommand)]
pub enum BackupCommands {
    /// Classify backup file names (one result line per file)
    Decode {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Backup file name of a distribution tag
    EncodeTag { tag: String },
    /// Backup file name of a version manifest
    EncodeVersion { version: String },
}

#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Classify an Authorization header value
    Classify { header: String },
    /// Check whether a user is a configured admin
    Admin { user: String },
    /// Check whether a user may maintain a package
    Maintainer {
        user: String,
        /// The user's session is an admin session
        #[arg(long)]
        admin: bool,
        /// Maintainer names of the package
        #[arg(long, value_delimiter = ',')]
        maintainers: Vec<String>,
    },
    /// Check whether a package belongs to a configured private scope
    Private { name: String },
    /// Check whether a request looks like it comes from the sync worker
    SyncWorker {
        /// Value of the `cache` query parameter
        #[arg(long)]
        cache: Option<String>,
        /// Value of the User-Agent header
        #[arg(long)]
        user_agent: Option<String>,
    },
}

/// Load the configuration file if one was given, otherwise defaults plus
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<Arc<Config>> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let mut config = Config::default();
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
    };
    Ok(Arc::new(config))
}
