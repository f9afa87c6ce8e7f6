use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_DB_PATH: &str = "./contact_form.db";
/// Relative to the working directory; matches a start from the workspace root.
pub const DEFAULT_STATIC_DIR: &str = "apps/server/public";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `CF_*` variables, after loading a `.env` file when one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_raw =
            lookup("CF_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_raw
            .parse()
            .with_context(|| format!("Invalid CF_LISTEN_ADDR: {listen_raw}"))?;
        let db_path = lookup("CF_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = lookup("CF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("CF_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let static_dir = lookup("CF_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());
        let log_format = match lookup("CF_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_original_deployment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 3001);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.static_dir, DEFAULT_STATIC_DIR);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("CF_LISTEN_ADDR", "127.0.0.1:8088"),
            ("CF_DB_PATH", "/tmp/c.db"),
            ("CF_CORS_ALLOW_ORIGINS", "https://a.example, https://b.example,"),
            ("CF_REQUEST_TIMEOUT_MS", "500"),
            ("CF_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8088");
        assert_eq!(config.db_path, "/tmp/c.db");
        assert_eq!(
            config.cors_allow,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        let config = config_from(&[("CF_REQUEST_TIMEOUT_MS", "soon")]).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_static_dir_holds_landing_page_from_workspace_root() {
        let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        assert!(workspace_root
            .join(DEFAULT_STATIC_DIR)
            .join("index.html")
            .is_file());
    }

    #[test]
    fn static_dir_can_be_overridden() {
        let config = config_from(&[("CF_STATIC_DIR", "/srv/contactbox")]).unwrap();
        assert_eq!(config.static_dir, "/srv/contactbox");
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        let err = config_from(&[("CF_LISTEN_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("CF_LISTEN_ADDR"));
    }
}
