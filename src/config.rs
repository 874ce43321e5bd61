//! Application configuration

use std::path::Path;

use owo_colors::OwoColorize;
use serde::Deserialize;
use tracing::warn;

/// Quote currency used when neither the config file nor the CLI selects one.
pub const DEFAULT_CURRENCY: &str = "cad";

/// Settings read from the JSON config file. Every key is optional; a
/// missing or unparseable file falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_currency: Option<String>,
}

impl AppConfig {
    /// Load configuration, falling back to defaults with a warning when the
    /// file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            println!(" {} '{}' not found.", "Error:".yellow(), path.display());
            warn!(path = %path.display(), "config file not found, using defaults");
            return Self::default();
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                println!(" {} Failed to read '{}'.", "Error:".yellow(), path.display());
                warn!(path = %path.display(), error = %e, "config file unreadable");
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                println!(" {} Failed to parse '{}'.", "Error:".yellow(), path.display());
                warn!(path = %path.display(), error = %e, "config file unparseable");
                Self::default()
            }
        }
    }

    /// Configured default currency, or the compile-time default.
    pub fn currency(&self) -> &str {
        self.default_currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_currency_fallback() {
        let config = AppConfig::default();
        assert_eq!(config.currency(), DEFAULT_CURRENCY);
    }

    #[test]
    fn configured_currency_wins() {
        let config: AppConfig =
            serde_json::from_str(r#"{"default_currency": "usd"}"#).unwrap();
        assert_eq!(config.currency(), "usd");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AppConfig = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config.currency(), DEFAULT_CURRENCY);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/config.json"));
        assert_eq!(config.currency(), DEFAULT_CURRENCY);
    }
}
