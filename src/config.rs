use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1/";
pub const DEFAULT_REDIS_KEY: &str = "inventory";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown storage backend `{0}`, expected `redis` or `memory`")]
    UnknownStorage(String),
}

/// Where inventory records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StorageBackend::Redis),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_owned())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StorageBackend::Redis => write!(f, "redis"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Server settings, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub redis_url: String,
    pub redis_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            storage: StorageBackend::Redis,
            redis_url: DEFAULT_REDIS_URL.to_owned(),
            redis_key: DEFAULT_REDIS_KEY.to_owned(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let port = lookup("PORT")
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let storage = match lookup("INVENTORY_STORAGE") {
            Some(value) => value.parse()?,
            None => defaults.storage,
        };

        Ok(Settings {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            storage,
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            redis_key: lookup("INVENTORY_REDIS_KEY").unwrap_or(defaults.redis_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("INVENTORY_STORAGE", "Memory"),
            ("REDIS_URL", "redis://cache/"),
            ("INVENTORY_REDIS_KEY", "stock"),
        ]))
        .unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.storage, StorageBackend::Memory);
        assert_eq!(settings.redis_url, "redis://cache/");
        assert_eq!(settings.redis_key, "stock");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let settings = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
    }

    #[test]
    fn unknown_storage_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("INVENTORY_STORAGE", "sqlite")]));
        assert_eq!(err, Err(ConfigError::UnknownStorage("sqlite".to_owned())));
    }
}
