use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    // Locale
    pub default_language: Language,
    pub language_override: Option<String>,
    pub host_timeout_ms: u64,

    // Project layout
    pub project_root: PathBuf,
    pub out_dir: PathBuf,

    // Dev server
    pub dev_server_host: IpAddr,
    pub dev_server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locale - the default must name a shipped dictionary
            default_language: match std::env::var("PLUGIN_DEFAULT_LANGUAGE") {
                Ok(value) => Language::resolve(&value).with_context(|| {
                    format!("PLUGIN_DEFAULT_LANGUAGE '{}' is not a supported language", value)
                })?,
                Err(_) => Language::default(),
            },
            language_override: std::env::var("PLUGIN_LANGUAGE").ok(),
            host_timeout_ms: std::env::var("PLUGIN_HOST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),

            // Project layout
            project_root: std::env::var("PLUGIN_PROJECT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            out_dir: std::env::var("PLUGIN_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),

            // Dev server - bind all interfaces so the host's iframe can reach it
            dev_server_host: std::env::var("DEV_SERVER_HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            dev_server_port: std::env::var("DEV_SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5173),
        })
    }

    /// How long the locale bootstrap waits for the host before falling back.
    pub fn host_timeout(&self) -> Duration {
        Duration::from_millis(self.host_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PLUGIN_DEFAULT_LANGUAGE",
            "PLUGIN_LANGUAGE",
            "PLUGIN_HOST_TIMEOUT_MS",
            "PLUGIN_PROJECT_ROOT",
            "PLUGIN_OUT_DIR",
            "DEV_SERVER_HOST",
            "DEV_SERVER_PORT",
        ] {
            std::env::remove_var(key);
        }
    }

    // ==================== Default Tests ====================

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.language_override, None);
        assert_eq!(config.host_timeout_ms, 2_000);
        assert_eq!(config.project_root, PathBuf::from("."));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.dev_server_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.dev_server_port, 5173);
    }

    #[test]
    #[serial]
    fn test_host_timeout_duration() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.host_timeout(), Duration::from_millis(2_000));
    }

    // ==================== Override Tests ====================

    #[test]
    #[serial]
    fn test_reads_language_settings() {
        clear_env();
        std::env::set_var("PLUGIN_DEFAULT_LANGUAGE", "zh");
        std::env::set_var("PLUGIN_LANGUAGE", "ja-JP");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_language, Language::Zh);
        assert_eq!(config.language_override.as_deref(), Some("ja-JP"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_default_language_accepts_full_tag() {
        clear_env();
        std::env::set_var("PLUGIN_DEFAULT_LANGUAGE", "ja-JP");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_language, Language::Ja);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unsupported_default_language_errors() {
        clear_env();
        std::env::set_var("PLUGIN_DEFAULT_LANGUAGE", "fr");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("PLUGIN_DEFAULT_LANGUAGE"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout_falls_back() {
        clear_env();
        std::env::set_var("PLUGIN_HOST_TIMEOUT_MS", "soon");

        let config = Config::from_env().unwrap();
        assert_eq!(config.host_timeout_ms, 2_000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_reads_dev_server_settings() {
        clear_env();
        std::env::set_var("DEV_SERVER_HOST", "127.0.0.1");
        std::env::set_var("DEV_SERVER_PORT", "4000");

        let config = Config::from_env().unwrap();
        assert_eq!(config.dev_server_host, "127.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(config.dev_server_port, 4000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_reads_project_paths() {
        clear_env();
        std::env::set_var("PLUGIN_PROJECT_ROOT", "/tmp/plugin");
        std::env::set_var("PLUGIN_OUT_DIR", "build");

        let config = Config::from_env().unwrap();
        assert_eq!(config.project_root, PathBuf::from("/tmp/plugin"));
        assert_eq!(config.out_dir, PathBuf::from("build"));

        clear_env();
    }
}
