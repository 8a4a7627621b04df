use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_CMS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FEATURED_COUNT: usize = 3;
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CMS endpoint is not configured; set APPNEST_CMS_ENDPOINT")]
    MissingEndpoint,
    #[error("invalid value `{value}` for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub cms_endpoint: String,
    pub bind_addr: String,
    pub port: u16,
    /// Zero disables caching.
    pub cache_ttl: Duration,
    pub cms_timeout: Duration,
    pub featured_count: usize,
    /// Ask the CMS for the `featured` field on apps.
    pub explicit_featured: bool,
    pub static_dir: String,
    /// Lets non-local callers invalidate the cache via `x-admin-token`.
    pub admin_token: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let cms_endpoint = var("APPNEST_CMS_ENDPOINT")
            .or_else(|| var("GRAPHCMS_ENDPOINT"))
            .ok_or(ConfigError::MissingEndpoint)?;

        Ok(Self {
            cms_endpoint,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            cache_ttl: Duration::from_secs(parse_or(
                "APPNEST_CACHE_TTL_SECS",
                var("APPNEST_CACHE_TTL_SECS"),
                DEFAULT_CACHE_TTL_SECS,
            )?),
            cms_timeout: Duration::from_secs(parse_or(
                "APPNEST_CMS_TIMEOUT_SECS",
                var("APPNEST_CMS_TIMEOUT_SECS"),
                DEFAULT_CMS_TIMEOUT_SECS,
            )?),
            featured_count: parse_or(
                "APPNEST_FEATURED_COUNT",
                var("APPNEST_FEATURED_COUNT"),
                DEFAULT_FEATURED_COUNT,
            )?,
            explicit_featured: parse_or(
                "APPNEST_EXPLICIT_FEATURED",
                var("APPNEST_EXPLICIT_FEATURED"),
                false,
            )?,
            static_dir: var("APPNEST_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            admin_token: var("APPNEST_ADMIN_TOKEN"),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_endpoint_is_set() {
        let config =
            ServerConfig::from_lookup(lookup(&[("APPNEST_CMS_ENDPOINT", "https://cms.example.com")]))
                .expect("config");
        assert_eq!(config.cms_endpoint, "https://cms.example.com");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.cms_timeout, Duration::from_secs(10));
        assert_eq!(config.featured_count, 3);
        assert!(!config.explicit_featured);
        assert_eq!(config.static_dir, "../frontend/dist");
        assert_eq!(config.admin_token, None);
    }

    #[test]
    fn legacy_endpoint_variable_is_accepted() {
        let config = ServerConfig::from_lookup(lookup(&[("GRAPHCMS_ENDPOINT", "https://legacy")]))
            .expect("config");
        assert_eq!(config.cms_endpoint, "https://legacy");
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("APPNEST_CMS_ENDPOINT", "  ")]))
            .expect_err("blank endpoint");
        assert_eq!(err, ConfigError::MissingEndpoint);
    }

    #[test]
    fn bad_numbers_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("APPNEST_CMS_ENDPOINT", "https://cms"),
            ("APPNEST_CACHE_TTL_SECS", "soon"),
        ]))
        .expect_err("bad ttl");
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "APPNEST_CACHE_TTL_SECS",
                value: "soon".to_string(),
            }
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("APPNEST_CMS_ENDPOINT", "https://cms"),
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("APPNEST_CACHE_TTL_SECS", "0"),
            ("APPNEST_FEATURED_COUNT", "5"),
            ("APPNEST_EXPLICIT_FEATURED", "true"),
            ("APPNEST_ADMIN_TOKEN", " s3cret "),
        ]))
        .expect("config");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.cache_ttl, Duration::ZERO);
        assert_eq!(config.featured_count, 5);
        assert!(config.explicit_featured);
        assert_eq!(config.admin_token.as_deref(), Some("s3cret"));
    }
}
