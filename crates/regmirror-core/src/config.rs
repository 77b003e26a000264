//! Process-wide mirror configuration.
//!
//! Loaded once at start-up from a TOML file, then adjusted by `REGMIRROR_*`
//! environment variables. Components receive it as an `Arc<Config>` and never
//! mutate it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be deserialized into a [`Config`].
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable configuration snapshot consumed by every component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory for staged tarball uploads.
    pub upload_dir: PathBuf,
    /// Admin mapping: username to marker value. Only string markers grant
    /// admin rights; other values share the table for unrelated purposes.
    pub admins: HashMap<String, toml::Value>,
    /// Allowed private scopes, e.g. `@company`.
    pub scopes: Vec<String>,
    /// Host advertised in tarball URLs. Falls back to the request host.
    pub registry_host: Option<String>,
    /// Protocol advertised in tarball URLs. Falls back to the request protocol.
    pub protocol: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            admins: HashMap::new(),
            scopes: Vec::new(),
            registry_host: None,
            protocol: None,
        }
    }
}

/// Mirror home: `$REGMIRROR_HOME`, else `~/.regmirror`, else a relative
/// `.regmirror` when no home directory can be resolved.
pub fn mirror_home() -> PathBuf {
    if let Ok(val) = std::env::var("REGMIRROR_HOME") {
        return PathBuf::from(val);
    }
    dirs::home_dir().map_or_else(|| PathBuf::from(".regmirror"), |h| h.join(".regmirror"))
}

/// Default upload staging directory: `<mirror home>/downloads`
pub fn default_upload_dir() -> PathBuf {
    mirror_home().join("downloads")
}

impl Config {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or a key
    /// has the wrong type.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), reading overrides through `lookup` instead
    /// of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env(lookup);
        tracing::debug!(
            "Loaded config from {} (upload_dir={}, {} admins, {} scopes)",
            path.display(),
            config.upload_dir.display(),
            config.admins.len(),
            config.scopes.len()
        );
        Ok(config)
    }

    /// Apply `REGMIRROR_*` overrides using the given variable lookup.
    ///
    /// - `REGMIRROR_UPLOAD_DIR`
    /// - `REGMIRROR_REGISTRY_HOST`
    /// - `REGMIRROR_PROTOCOL`
    /// - `REGMIRROR_SCOPES` (comma separated)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("REGMIRROR_UPLOAD_DIR") {
            self.upload_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("REGMIRROR_REGISTRY_HOST") {
            self.registry_host = Some(host);
        }
        if let Some(protocol) = lookup("REGMIRROR_PROTOCOL") {
            self.protocol = Some(protocol);
        }
        if let Some(scopes) = lookup("REGMIRROR_SCOPES") {
            let parsed: Vec<String> = scopes
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if parsed.iter().any(|s| !s.starts_with('@')) {
                tracing::warn!("REGMIRROR_SCOPES contains entries without '@': {scopes}");
            }
            self.scopes = parsed;
        }
    }

    /// Configured registry host, treating an empty string as unset.
    pub fn registry_host(&self) -> Option<&str> {
        self.registry_host.as_deref().filter(|h| !h.is_empty())
    }

    /// Configured protocol, treating an empty string as unset.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
upload_dir = "/var/lib/regmirror/downloads"
scopes = ["@cnpm", "@company"]
registry_host = "registry.example.com"
protocol = "https"

[admins]
root = "root@example.com"
bot = true
"#;

    #[test]
    fn parses_all_keys() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/regmirror/downloads"));
        assert_eq!(config.scopes, vec!["@cnpm", "@company"]);
        assert_eq!(config.registry_host(), Some("registry.example.com"));
        assert_eq!(config.protocol(), Some("https"));
        assert!(config.admins["root"].is_str());
        assert!(config.admins["bot"].is_bool());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.upload_dir.ends_with("downloads"));
        assert!(config.admins.is_empty());
        assert!(config.scopes.is_empty());
        assert_eq!(config.registry_host(), None);
    }

    #[test]
    fn empty_host_and_protocol_are_unset() {
        let config = Config::from_toml("registry_host = \"\"\nprotocol = \"\"").unwrap();
        assert_eq!(config.registry_host(), None);
        assert_eq!(config.protocol(), None);
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = Config::from_toml("scopes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::from_toml(SAMPLE).unwrap();
        config.apply_env(|key| match key {
            "REGMIRROR_UPLOAD_DIR" => Some("/tmp/up".to_string()),
            "REGMIRROR_SCOPES" => Some("@a, @b,,".to_string()),
            _ => None,
        });
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/up"));
        assert_eq!(config.scopes, vec!["@a", "@b"]);
        assert_eq!(config.registry_host(), Some("registry.example.com"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::load_with(file.path(), |_| None).unwrap();
        assert_eq!(config.scopes, vec!["@cnpm", "@company"]);
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/regmirror/downloads"));
    }

    #[test]
    fn load_with_applies_given_overrides_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::load_with(file.path(), |key| {
            (key == "REGMIRROR_SCOPES").then(|| "@only".to_string())
        })
        .unwrap();
        assert_eq!(config.scopes, vec!["@only"]);
        assert_eq!(config.protocol(), Some("https"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with(&dir.path().join("nope.toml"), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
