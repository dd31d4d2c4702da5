use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Server settings read from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        if static_dir.trim().is_empty() {
            return Err(ConfigError::Empty("STATIC_DIR"));
        }

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_site_config_defaults_success() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_site_config_overrides_success() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("BIND_ADDR", " 127.0.0.1:3000 "),
            ("STATIC_DIR", "/srv/site/static"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/site/static"));
    }

    #[test]
    fn test_site_config_fails_on_invalid_bind_addr() {
        let err = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
    }

    #[test]
    fn test_site_config_fails_on_empty_static_dir() {
        let err = SiteConfig::from_lookup(lookup(&[("STATIC_DIR", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty("STATIC_DIR")));
    }
}
