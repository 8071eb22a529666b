//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which `PostStore` binding to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StoreBackend {
    /// JSON collection in a local data directory.
    #[default]
    Local,
    /// REST backend at `api_url`.
    Remote,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StoreBackend::Local),
            "remote" => Ok(StoreBackend::Remote),
            other => Err(format!("unknown store '{}'", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub api_url: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store = lookup("INKPOST_STORE")
            .and_then(|value| match value.parse::<StoreBackend>() {
                Ok(store) => Some(store),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring INKPOST_STORE, using local store");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            store,
            api_url: lookup("INKPOST_API_URL")
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
            data_dir: lookup("INKPOST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".inkpost")),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        store: Option<StoreBackend>,
        api_url: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(store) = store {
            self.store = store;
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.store, StoreBackend::Local);
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.data_dir, PathBuf::from(".inkpost"));
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("INKPOST_STORE", "Remote"),
            ("INKPOST_API_URL", "http://backend:9000"),
            ("INKPOST_DATA_DIR", "/var/lib/inkpost"),
        ]);
        assert_eq!(config.store, StoreBackend::Remote);
        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/inkpost"));
    }

    #[test]
    fn test_unknown_store_falls_back_to_local() {
        let config = config_from(&[("INKPOST_STORE", "carrier-pigeon")]);
        assert_eq!(config.store, StoreBackend::Local);
    }

    #[test]
    fn test_flags_override_environment() {
        let config = config_from(&[("INKPOST_STORE", "local")]).with_overrides(
            Some(StoreBackend::Remote),
            Some("http://other:1".to_string()),
            None,
        );
        assert_eq!(config.store, StoreBackend::Remote);
        assert_eq!(config.api_url, "http://other:1");
        assert_eq!(config.data_dir, PathBuf::from(".inkpost"));
    }
}
