//! Externally advertised tarball URLs.

use std::sync::Arc;

use regmirror_schema::PackageDoc;

use crate::config::Config;
use crate::request::RequestContext;

/// Fills in `dist.tarball` for package descriptors served to clients.
#[derive(Debug, Clone)]
pub struct DownloadUrlBuilder {
    config: Arc<Config>,
}

impl DownloadUrlBuilder {
    /// Create a builder over `config`.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// `{protocol}://{host}/{name}/download/{name}-{version}.tgz`
    ///
    /// Host precedence: `host_override`, configured registry host, request
    /// host. Protocol precedence: configured protocol, request protocol. Empty
    /// strings count as unset at every level.
    pub fn tarball_url(
        &self,
        pkg: &PackageDoc,
        request: &RequestContext,
        host_override: Option<&str>,
    ) -> String {
        let host = host_override
            .filter(|h| !h.is_empty())
            .or_else(|| self.config.registry_host())
            .unwrap_or(&request.host);
        let protocol = self.config.protocol().unwrap_or(&request.protocol);
        format!(
            "{protocol}://{host}/{name}/download/{name}-{version}.tgz",
            name = pkg.name,
            version = pkg.version
        )
    }

    /// Set `pkg.dist.tarball` in place. A descriptor without `dist` is left
    /// untouched.
    pub fn set_download_url(
        &self,
        pkg: &mut PackageDoc,
        request: &RequestContext,
        host_override: Option<&str>,
    ) {
        if pkg.dist.is_none() {
            return;
        }
        let url = self.tarball_url(pkg, request, host_override);
        if let Some(dist) = pkg.dist.as_mut() {
            dist.tarball = url;
        }
    }
}
