use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_SERVER_HOST: &str = "::";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MAX_PAGE_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// 对外暴露的接口形式：路径参数风格或请求信封风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
    Rest,
    Envelope,
}

impl FromStr for ApiStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rest" => Ok(Self::Rest),
            "envelope" => Ok(Self::Envelope),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub storage_backend: StorageBackend,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub api_style: ApiStyle,
    pub max_page_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意键值查找函数构建配置，便于测试时注入
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage_backend = parse_or(&lookup, "STORAGE_BACKEND", StorageBackend::Postgres)?;
        let database_url = lookup("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let max_page_limit = parse_or(&lookup, "MAX_PAGE_LIMIT", DEFAULT_MAX_PAGE_LIMIT)?;
        if max_page_limit <= 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_PAGE_LIMIT",
                value: max_page_limit.to_string(),
            });
        }

        Ok(Config {
            database_url,
            storage_backend,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            api_style: parse_or(&lookup, "API_STYLE", ApiStyle::Rest)?,
            max_page_limit,
        })
    }
}

fn parse_or<T, L>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/users")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert_eq!(config.api_style, ApiStyle::Rest);
        assert_eq!(config.server_host, "::");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.max_page_limit, 100);
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn memory_backend_needs_no_url() {
        let config = config_from(&[("STORAGE_BACKEND", "memory"), ("API_STYLE", "Envelope")])
            .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.api_style, ApiStyle::Envelope);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("STORAGE_BACKEND", "memory"), ("SERVER_PORT", "http")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn rejects_non_positive_page_limit() {
        let err = config_from(&[("STORAGE_BACKEND", "memory"), ("MAX_PAGE_LIMIT", "0")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "MAX_PAGE_LIMIT", .. }));
    }
}
