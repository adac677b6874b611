//! Runtime settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/retail";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Accepted credentials for the access gate. Never empty.
    pub api_keys: Vec<String>,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to defaults except `API_KEYS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse(
            "BIND_ADDR",
            get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        )?;
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => parse("DB_MAX_CONNECTIONS", v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(v) => parse("BODY_LIMIT_BYTES", v)?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };
        let api_keys: Vec<String> = get("API_KEYS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        if api_keys.is_empty() {
            return Err(ConfigError::Missing("API_KEYS"));
        }

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            api_keys,
            body_limit_bytes,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_keys_given() {
        let cfg = AppConfig::from_lookup(lookup(&[("API_KEYS", "secret")])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
        assert_eq!(cfg.api_keys, vec!["secret"]);
    }

    #[test]
    fn api_keys_are_split_and_trimmed() {
        let cfg = AppConfig::from_lookup(lookup(&[("API_KEYS", " a , b,,c ")])).unwrap();
        assert_eq!(cfg.api_keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_api_keys_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_KEYS")));
        let err = AppConfig::from_lookup(lookup(&[("API_KEYS", " , ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_KEYS")));
    }

    #[test]
    fn unparsable_numbers_and_addresses_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("API_KEYS", "k"),
            ("DB_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));

        let err = AppConfig::from_lookup(lookup(&[("API_KEYS", "k"), ("BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("API_KEYS", "k"),
            ("DATABASE_URL", "postgres://db:5432/shop"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("BODY_LIMIT_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db:5432/shop");
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.body_limit_bytes, 2048);
    }
}
