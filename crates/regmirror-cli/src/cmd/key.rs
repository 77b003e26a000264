use regmirror_core::PackageName;
use regmirror_core::keys::{self, ArtifactKey};

pub fn tarball(name: &str, filename: &str) {
    print_key(name, ArtifactKey::Tarball(filename));
}

pub fn manifest(name: &str, version: &str) {
    print_key(name, ArtifactKey::VersionManifest(version));
}

pub fn tag(name: &str, tag: &str) {
    print_key(name, ArtifactKey::DistTag(tag));
}

pub fn unpublish(name: &str) {
    print_key(name, ArtifactKey::UnpublishMarker);
}

pub fn dirs(name: &str) {
    let name = PackageName::from(name);
    println!("tags\t{}", keys::sync_tag_dir(&name));
    println!("packages\t{}", keys::sync_package_dir(&name));
}

fn print_key(name: &str, key: ArtifactKey<'_>) {
    let name = PackageName::from(name);
    tracing::debug!("Building {} key for {name}", key.kind());
    println!("{}", key.cdn_key(&name));
}
