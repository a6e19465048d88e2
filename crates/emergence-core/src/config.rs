//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Prefix for environment overrides, e.g. `EMERGENCE__SITE__BASE_PATH`.
pub const ENV_PREFIX: &str = "EMERGENCE";

/// Main configuration structure for the exhibit site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Crawler policy settings.
    #[serde(default)]
    pub robots: RobotsConfig,

    /// Embedded server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used in the robots.txt banner.
    #[serde(default = "default_title")]
    pub title: String,

    /// Public absolute URL of the site root (e.g., "https://sacda.ca/exhibits/emergence").
    #[serde(default = "default_canonical_url")]
    pub canonical_url: String,

    /// Deployment base path prefixed to asset references (e.g., "/exhibits/emergence").
    /// Empty when the site is served from the domain root.
    #[serde(default)]
    pub base_path: String,
}

/// Crawler policy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Seconds between crawler requests.
    #[serde(default = "default_crawl_delay")]
    pub crawl_delay: u32,
}

/// Embedded HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets served under the base path.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

// Default value functions
fn default_title() -> String {
    "Emergence: Out of the Shadows".to_string()
}

fn default_canonical_url() -> String {
    "https://sacda.ca/exhibits/emergence".to_string()
}

fn default_crawl_delay() -> u32 {
    1
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            canonical_url: default_canonical_url(),
            base_path: String::new(),
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            crawl_delay: default_crawl_delay(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file layered with `EMERGENCE__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::layered(Some(path), env_source())
    }

    /// Built-in defaults layered with `EMERGENCE__*` environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::layered(None, env_source())
    }

    fn layered(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }

        let settings = builder.add_source(env).build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Strip trailing slashes from the URL-like settings.
    fn normalize(&mut self) {
        if self.site.canonical_url.ends_with('/') {
            tracing::warn!("site.canonical_url should not have a trailing slash");
            self.site.canonical_url = self.site.canonical_url.trim_end_matches('/').to_string();
        }

        if self.site.base_path.ends_with('/') {
            tracing::warn!("site.base_path should not have a trailing slash");
            self.site.base_path = self.site.base_path.trim_end_matches('/').to_string();
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        let url = &self.site.canonical_url;
        if url.is_empty() {
            return Err(CoreError::config("site.canonical_url cannot be empty"));
        }

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CoreError::config(format!(
                "site.canonical_url must be an absolute http(s) URL, got {url:?}"
            )));
        }

        let base = &self.site.base_path;
        if !base.is_empty() && !base.starts_with('/') {
            return Err(CoreError::config(format!(
                "site.base_path must start with '/', got {base:?}"
            )));
        }

        Ok(())
    }

    /// Get the full public URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.canonical_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Exhibit"
canonical_url = "https://example.com/exhibits/test"
base_path = "/exhibits/test"

[robots]
crawl_delay = 5

[server]
host = "0.0.0.0"
port = 8080
static_dir = "public"
"#
        .to_string()
    }

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, content).expect("write");
        (dir, config_path)
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Exhibit");
        assert_eq!(config.site.canonical_url, "https://example.com/exhibits/test");
        assert_eq!(config.site.base_path, "/exhibits/test");
        assert_eq!(config.robots.crawl_delay, 5);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "public");
    }

    #[test]
    fn test_config_defaults() {
        let (_dir, config_path) = write_config("");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config, Config::default());
        assert_eq!(config.site.title, "Emergence: Out of the Shadows");
        assert_eq!(config.site.canonical_url, "https://sacda.ca/exhibits/emergence");
        assert_eq!(config.site.base_path, "");
        assert_eq!(config.robots.crawl_delay, 1);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "static");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let (_dir, config_path) = write_config(
            r#"
[site]
canonical_url = "https://example.com/"
base_path = "/sub/"
"#,
        );

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.canonical_url, "https://example.com");
        assert_eq!(config.site.base_path, "/sub");
    }

    #[test]
    fn test_root_base_path_becomes_empty() {
        let (_dir, config_path) = write_config("[site]\nbase_path = \"/\"\n");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.site.base_path, "");
    }

    #[test]
    fn test_url_for() {
        let config = Config::default();

        assert_eq!(
            config.url_for("/sitemap.xml"),
            "https://sacda.ca/exhibits/emergence/sitemap.xml"
        );
        assert_eq!(
            config.url_for("sitemap.xml"),
            "https://sacda.ca/exhibits/emergence/sitemap.xml"
        );
    }

    #[test]
    fn test_config_validation_relative_url() {
        let (_dir, config_path) = write_config("[site]\ncanonical_url = \"sacda.ca\"\n");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("absolute http(s) URL"));
    }

    #[test]
    fn test_config_validation_base_path_without_slash() {
        let (_dir, config_path) = write_config("[site]\nbase_path = \"exhibits\"\n");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_config_parse_error() {
        let (_dir, config_path) = write_config("[site\ntitle = ");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/site.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let (_dir, config_path) = write_config(&create_test_config());

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.base_path, "/exhibits/test");
        assert_eq!(config.robots.crawl_delay, 5);
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn test_env_overrides_file() {
        let (_dir, config_path) = write_config(&create_test_config());

        let config = Config::layered(
            Some(&config_path),
            env_with(&[
                ("EMERGENCE__SITE__BASE_PATH", "/preview/"),
                ("EMERGENCE__SERVER__PORT", "5000"),
            ]),
        )
        .expect("load config");

        assert_eq!(config.site.base_path, "/preview");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.site.title, "Test Exhibit");
    }

    #[test]
    fn test_env_overrides_defaults_without_file() {
        let config = Config::layered(None, env_with(&[("EMERGENCE__SITE__BASE_PATH", "/preview")]))
            .expect("load config");

        assert_eq!(config.site.base_path, "/preview");
        assert_eq!(config.site.canonical_url, "https://sacda.ca/exhibits/emergence");
        assert_eq!(config.robots.crawl_delay, 1);
    }

    #[test]
    fn test_env_values_are_validated() {
        let result = Config::layered(None, env_with(&[("EMERGENCE__SITE__BASE_PATH", "preview")]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_load_with_env_ignores_file_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.conf");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.base_path, "/exhibits/test");
        assert_eq!(config.robots.crawl_delay, 5);
    }
}
