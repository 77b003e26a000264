//! The read-only slice of an inbound HTTP request that the core inspects.

use std::collections::HashMap;

/// Query parameters or headers, keyed by name.
pub type Params = HashMap<String, String>;

/// Look up a header by name, ignoring ASCII case.
pub fn header<'a>(headers: &'a Params, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Request facts handed over by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// `Host` the client addressed, e.g. `registry.local:7001`.
    pub host: String,
    /// Protocol the request arrived on (`http` or `https`).
    pub protocol: String,
    /// Parsed query string.
    pub query: Params,
    /// Request headers.
    pub headers: Params,
}

impl RequestContext {
    /// Create a context with no query parameters or headers.
    pub fn new(host: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            protocol: protocol.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        header(&self.headers, name)
    }
}
