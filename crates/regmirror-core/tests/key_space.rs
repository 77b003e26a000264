//! Integration tests for the storage key space.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use regmirror_core::access::is_maintainer;
use regmirror_core::backup::{
    is_backup_pkg_file, is_backup_tag_file, package_file_name, tag_file_name,
    tag_from_file_name, version_from_file_name,
};
use regmirror_core::keys::{self, sync_package_dir, sync_tag_dir};
use regmirror_core::{
    AccessClassifier, Actor, ArtifactKey, AuthScheme, BackupFile, Config, DownloadUrlBuilder,
    Maintainer, PackageDoc, PackageName, Params, RequestContext, StoragePathBuilder, Version,
    classify_authorization, is_sync_worker_request,
};

fn config() -> Arc<Config> {
    let config = Config::from_toml(
        r#"
upload_dir = "/srv/mirror/uploads"
scopes = ["@myscope"]
registry_host = "registry.example.com"

[admins]
root = "root@example.com"
ci = false
"#,
    )
    .expect("valid config");
    Arc::new(config)
}

#[test]
fn concurrent_uploads_never_share_a_path() {
    let builder = StoragePathBuilder::new(config());
    let name = PackageName::from("@myscope/widget");
    let version = Version::from("1.0.0");

    let paths: HashSet<PathBuf> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..64)
                        .map(|_| builder.upload_path(&name, &version, "widget-1.0.0.tgz"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    assert_eq!(paths.len(), 8 * 64);
    for path in &paths {
        assert!(path.starts_with("/srv/mirror/uploads"));
        let file = path.file_name().and_then(|f| f.to_str()).expect("utf-8 name");
        assert!(file.starts_with("myscope-widget-1.0.0."));
        assert!(file.ends_with(".tgz"));
    }
}

#[test]
fn published_tarball_lands_under_its_scope() {
    let scoped = PackageName::from("@s/p");
    assert_eq!(
        ArtifactKey::Tarball("p-1.0.0.tgz").cdn_key(&scoped),
        "/@s/p/-/@s/p-1.0.0.tgz"
    );
    let plain = PackageName::from("p");
    assert_eq!(keys::tarball_key(&plain, "p-1.0.0.tgz"), "/p/-/p-1.0.0.tgz");
}

#[test]
fn listed_metadata_objects_decode_back_to_identifiers() {
    let name = PackageName::from("@myscope/widget");
    let tag_key = keys::dist_tag_key(&name, "beta");
    let manifest_key = keys::package_file_key(&name, "1.2.3");

    let tag_file = tag_key
        .strip_prefix(&format!("/{}", sync_tag_dir(&name)))
        .expect("tag key under tag dir");
    let manifest_file = manifest_key
        .strip_prefix(&format!("/{}", sync_package_dir(&name)))
        .expect("manifest key under package dir");

    assert!(is_backup_tag_file(tag_file));
    assert!(is_backup_pkg_file(manifest_file));
    assert_eq!(BackupFile::parse(tag_file), Some(BackupFile::Tag("beta")));
    assert_eq!(
        BackupFile::parse(manifest_file),
        Some(BackupFile::Package("1.2.3"))
    );
}

#[test]
fn backup_names_round_trip() {
    for id in ["latest", "next-2", "1.0.0", "1.0.0-beta.1+exp.sha.5114f85"] {
        assert_eq!(tag_from_file_name(&tag_file_name(id)), Some(id));
        assert_eq!(version_from_file_name(&package_file_name(id)), Some(id));
    }
    for file in ["tag-latest.json", "package-3.0.0.json"] {
        let decoded = BackupFile::parse(file).expect("recognized");
        assert_eq!(decoded.file_name(), file);
    }
    assert!(is_backup_tag_file("tag-beta.json"));
    assert!(!is_backup_tag_file("package-1.0.0.json"));
}

#[test]
fn request_gate() {
    let access = AccessClassifier::new(config());

    assert_eq!(classify_authorization("Bearer abc123"), Some(AuthScheme::Bearer));
    assert_eq!(classify_authorization("BASIC xyz"), Some(AuthScheme::Basic));
    assert_eq!(classify_authorization(""), None);

    let sync = RequestContext::new("h", "http").with_query("cache", "0");
    assert!(is_sync_worker_request(&sync.query, &sync.headers));
    let legacy =
        RequestContext::new("h", "http").with_header("user-agent", "npm_service.cnpmjs.org/1.0");
    assert!(is_sync_worker_request(&legacy.query, &legacy.headers));
    let curl = RequestContext::new("h", "http").with_header("user-agent", "curl/7");
    assert!(!is_sync_worker_request(&curl.query, &curl.headers));
    assert!(!is_sync_worker_request(&Params::new(), &Params::new()));

    assert!(access.is_admin("root"));
    assert!(!access.is_admin("ci"));
    assert!(!access.is_admin("nobody"));

    assert!(access.is_private_scoped_package("@myscope/x"));
    assert!(!access.is_private_scoped_package("@public/x"));
    assert!(!access.is_private_scoped_package("plainname"));
    assert!(!access.is_private_scoped_package(""));
}

#[test]
fn admin_and_maintainer_scenario() {
    let root = Actor::new("root", true);
    assert!(is_maintainer(&root, Some(&[][..])));

    let bob = Actor::new("bob", false);
    let maintainers = vec![Maintainer::new("carol")];
    assert!(!is_maintainer(&bob, Some(maintainers.as_slice())));
}

#[test]
fn served_descriptor_gets_registry_url() {
    let urls = DownloadUrlBuilder::new(config());
    let request = RequestContext::new("127.0.0.1:7001", "http");

    let mut served = PackageDoc::new("@myscope/widget", "1.0.0").with_dist();
    urls.set_download_url(&mut served, &request, None);
    assert_eq!(
        served.dist.expect("dist kept").tarball,
        "http://registry.example.com/@myscope/widget/download/@myscope/widget-1.0.0.tgz"
    );

    let mut bare = PackageDoc::new("widget", "1.0.0");
    urls.set_download_url(&mut bare, &request, None);
    assert!(bare.dist.is_none());
}

#[test]
fn stored_manifest_json_gets_registry_url_and_keeps_unknown_fields() {
    let urls = DownloadUrlBuilder::new(config());
    let request = RequestContext::new("127.0.0.1:7001", "http");
    let stored = r#"{
        "name": "widget",
        "version": "3.1.0",
        "description": "kept as-is",
        "dist": { "tarball": "http://upstream/widget-3.1.0.tgz", "shasum": "abc" }
    }"#;

    let mut doc: PackageDoc = serde_json::from_str(stored).expect("valid manifest");
    urls.set_download_url(&mut doc, &request, None);
    let served = serde_json::to_value(&doc).expect("serializable");

    assert_eq!(
        served["dist"]["tarball"],
        "http://registry.example.com/widget/download/widget-3.1.0.tgz"
    );
    assert_eq!(served["dist"]["shasum"], "abc");
    assert_eq!(served["description"], "kept as-is");
    assert!(served.get("_publish_on_cnpm").is_none());
}
