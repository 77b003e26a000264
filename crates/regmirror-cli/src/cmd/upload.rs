use std::sync::Arc;

use regmirror_core::{Config, PackageName, StoragePathBuilder, Version};

/// Print a fresh staging path. Nothing is created on disk.
pub fn upload_path(config: &Arc<Config>, name: &str, version: &str, filename: &str) {
    let builder = StoragePathBuilder::new(Arc::clone(config));
    let path = builder.upload_path(&PackageName::from(name), &Version::from(version), filename);
    println!("{}", path.display());
}
