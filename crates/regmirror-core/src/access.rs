//! Credential classification and permission predicates.
//!
//! Consulted once per inbound request, before any mutating operation.

use std::sync::Arc;

use regmirror_schema::{Actor, AuthScheme, Maintainer, PackageName};

use crate::SYNC_WORKER_USER_AGENT;
use crate::config::Config;
use crate::request::{Params, header};

/// Authorization schemes, checked in order; the first matching prefix wins.
const AUTH_SCHEMES: [(&str, AuthScheme); 2] = [
    ("basic ", AuthScheme::Basic),
    ("bearer ", AuthScheme::Bearer),
];

/// Signals that a request was issued by the sync worker. Any one suffices.
const SYNC_WORKER_SIGNALS: [fn(&Params, &Params) -> bool; 2] = [no_cache_query, legacy_user_agent];

fn no_cache_query(query: &Params, _headers: &Params) -> bool {
    query.get("cache").is_some_and(|v| v == "0")
}

fn legacy_user_agent(_query: &Params, headers: &Params) -> bool {
    header(headers, "user-agent").is_some_and(|ua| ua.contains(SYNC_WORKER_USER_AGENT))
}

/// Classify a raw `Authorization` header value.
///
/// Surrounding whitespace is ignored and the scheme is matched
/// case-insensitively. Returns `None` for anything else, including `""`.
pub fn classify_authorization(value: &str) -> Option<AuthScheme> {
    let value = value.trim();
    AUTH_SCHEMES
        .iter()
        .find(|(prefix, _)| {
            value
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .map(|&(_, scheme)| scheme)
}

/// Whether the request comes from the internal sync worker: `cache=0` in the
/// query, or a legacy sync client `User-Agent`.
pub fn is_sync_worker_request(query: &Params, headers: &Params) -> bool {
    let matched = SYNC_WORKER_SIGNALS
        .iter()
        .any(|signal| signal(query, headers));
    if matched {
        tracing::debug!("Request classified as sync worker");
    }
    matched
}

/// Whether `actor` may maintain a package with the given maintainer list.
///
/// Admins always may. Otherwise the actor's name must appear in the list; an
/// absent list counts as empty.
pub fn is_maintainer(actor: &Actor, maintainers: Option<&[Maintainer]>) -> bool {
    if actor.is_admin {
        return true;
    }
    maintainers
        .unwrap_or_default()
        .iter()
        .any(|m| m.name == actor.name)
}

/// Permission checks that depend on the configured admins and scopes.
#[derive(Debug, Clone)]
pub struct AccessClassifier {
    config: Arc<Config>,
}

impl AccessClassifier {
    /// Create a classifier over `config`.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// True iff `username` maps to a string in the admin table.
    ///
    /// Booleans, numbers and other values do not grant admin rights.
    pub fn is_admin(&self, username: &str) -> bool {
        self.config
            .admins
            .get(username)
            .is_some_and(toml::Value::is_str)
    }

    /// True iff `name` is scoped and its scope is one of the configured
    /// private scopes. Empty and plain names are never private.
    pub fn is_private_scoped_package(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let name = PackageName::from(name);
        name.scope()
            .is_some_and(|scope| self.config.scopes.iter().any(|s| s == scope))
    }
}
