//! Whether a package originates from this registry.

use regmirror_schema::ModuleRecord;

/// True iff any row's descriptor was published directly to this registry
/// rather than mirrored from upstream. Rows without a descriptor are skipped.
pub fn is_local_module(records: &[ModuleRecord]) -> bool {
    records
        .iter()
        .filter_map(|r| r.package.as_ref())
        .any(|pkg| pkg.published_locally)
}
