use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use regmirror_core::{Config, DownloadUrlBuilder, PackageDoc, RequestContext};

/// Where the descriptor to compute a URL for comes from.
#[derive(Debug)]
pub enum UrlSource<'a> {
    /// A bare `name@version` with an empty `dist`.
    Bare { name: &'a str, version: &'a str },
    /// A JSON descriptor on disk, rewritten and printed in full.
    Manifest(&'a Path),
}

/// Arguments of the `tarball-url` command.
#[derive(Debug)]
pub struct UrlRequest<'a> {
    pub source: UrlSource<'a>,
    pub host: Option<&'a str>,
    pub request_host: &'a str,
    pub request_protocol: &'a str,
}

/// Print the advertised URL, or the rewritten descriptor for a manifest.
/// Descriptors without `dist` are printed unchanged.
pub fn tarball_url(config: &Arc<Config>, req: &UrlRequest<'_>) -> Result<()> {
    let builder = DownloadUrlBuilder::new(Arc::clone(config));
    let request = RequestContext::new(req.request_host, req.request_protocol);

    match req.source {
        UrlSource::Bare { name, version } => {
            let pkg = PackageDoc::new(name, version).with_dist();
            println!("{}", builder.tarball_url(&pkg, &request, req.host));
        }
        UrlSource::Manifest(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut pkg: PackageDoc = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            builder.set_download_url(&mut pkg, &request, req.host);
            println!("{}", serde_json::to_string_pretty(&pkg)?);
        }
    }
    Ok(())
}
