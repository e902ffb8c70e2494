//! Dashboard configuration.
//!
//! Defaults live in `config/dashboard.toml` and are compiled into the
//! bundle. The NEO API key can be swapped at build time through the
//! `NEO_API_KEY` environment variable.

use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::NeoWatchError;

const DEFAULT_CONFIG: &str = include_str!("../config/dashboard.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    pub feed: FeedConfig,
    pub neo_api: NeoApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Local backend list endpoint and its polling cadence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedConfig {
    /// Path (or absolute URL) of the list endpoint, e.g. "/asteroids/"
    pub endpoint: String,
    /// Seconds between periodic list refreshes
    pub refresh_interval_secs: u32,
}

/// Third-party NEO lookup service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeoApiConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u32,
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u32,
}

fn default_notification_ms() -> u32 {
    3000
}

fn default_clock_tick_ms() -> u32 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            clock_tick_ms: default_clock_tick_ms(),
        }
    }
}

impl DashboardConfig {
    /// Load the embedded defaults, applying the build-time API key override.
    pub fn load() -> Result<Self, NeoWatchError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(key) = option_env!("NEO_API_KEY").filter(|k| !k.trim().is_empty()) {
            config.neo_api.api_key = key.trim().to_string();
        }
        info!(
            "Loaded dashboard config: feed={} refresh={}s",
            config.feed.endpoint, config.feed.refresh_interval_secs
        );
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, NeoWatchError> {
        let config: DashboardConfig =
            toml::from_str(content).map_err(|e| NeoWatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), NeoWatchError> {
        if self.feed.endpoint.trim().is_empty() {
            return Err(NeoWatchError::Config("feed.endpoint must not be empty".into()));
        }
        if self.feed.refresh_interval_secs == 0 {
            return Err(NeoWatchError::Config(
                "feed.refresh_interval_secs must be greater than zero".into(),
            ));
        }
        if self.ui.notification_ms == 0 || self.ui.clock_tick_ms == 0 {
            return Err(NeoWatchError::Config("ui timings must be greater than zero".into()));
        }
        Url::parse(&self.neo_api.base_url).map_err(|e| {
            NeoWatchError::Config(format!(
                "neo_api.base_url '{}' is not an absolute URL: {}",
                self.neo_api.base_url, e
            ))
        })?;
        Ok(())
    }

    pub fn refresh_interval_ms(&self) -> u32 {
        self.feed.refresh_interval_secs.saturating_mul(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = DashboardConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.feed.endpoint, "/asteroids/");
        assert_eq!(config.feed.refresh_interval_secs, 30);
        assert_eq!(config.refresh_interval_ms(), 30_000);
        assert_eq!(config.neo_api.base_url, "https://api.nasa.gov/neo/rest/v1/neo");
        assert_eq!(config.ui.notification_ms, 3000);
    }

    #[test]
    fn test_ui_section_is_optional() {
        let toml = r#"
            [feed]
            endpoint = "/asteroids/"
            refresh_interval_secs = 10

            [neo_api]
            base_url = "https://example.com/neo"
            api_key = "KEY"
        "#;
        let config = DashboardConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let toml = r#"
            [feed]
            endpoint = "/asteroids/"
            refresh_interval_secs = 0

            [neo_api]
            base_url = "https://example.com/neo"
            api_key = "KEY"
        "#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, NeoWatchError::Config(_)));
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let toml = r#"
            [feed]
            endpoint = "/asteroids/"
            refresh_interval_secs = 30

            [neo_api]
            base_url = "/neo"
            api_key = "KEY"
        "#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("not an absolute URL"), "got: {}", err);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = DashboardConfig::from_toml("[feed\nendpoint =").unwrap_err();
        assert!(matches!(err, NeoWatchError::Config(_)));
    }
}
