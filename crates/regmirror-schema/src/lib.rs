//! Shared types for the registry mirror: package identities, descriptors,
//! access-control actors, and digest newtypes.

pub mod hash;
pub mod package;
pub mod types;

// Re-exports
pub use hash::*;
pub use package::{Dist, ModuleRecord, PackageDoc};
pub use types::*;

/// Scope marker that prefixes every scoped package name (`@scope/local`).
pub const SCOPE_MARKER: char = '@';

/// Separator between the scope and the local part of a scoped name.
pub const SCOPE_SEPARATOR: char = '/';
