//! Core of the registry mirror: where uploads are staged on disk, which
//! object-store keys mirrored artifacts live under, how metadata backups are
//! named, and who may mutate what.
//!
//! Every operation is a pure function of its inputs and an immutable
//! [`Config`] snapshot, so all of it is safe to call from any number of
//! request handlers concurrently.

pub mod access;
pub mod backup;
pub mod config;
pub mod download;
pub mod keys;
pub mod paths;
pub mod publish;
pub mod request;

pub use access::{AccessClassifier, classify_authorization, is_sync_worker_request};
pub use backup::BackupFile;
pub use config::{Config, ConfigError};
pub use download::DownloadUrlBuilder;
pub use keys::ArtifactKey;
pub use paths::{StoragePathBuilder, UploadToken};
pub use publish::is_local_module;
pub use request::{Params, RequestContext};

pub use regmirror_schema::{
    Actor, ArtifactKind, AuthScheme, Dist, Maintainer, ModuleRecord, PackageDoc, PackageName,
    UploadDigest, Version,
};

/// User-Agent fragment sent by legacy sync clients.
pub const SYNC_WORKER_USER_AGENT: &str = "npm_service.cnpmjs.org/";
