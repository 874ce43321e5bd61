//! Portfolio holdings model and file loading
//!
//! Holdings are loaded once at startup from a JSON object mapping asset id
//! to owned quantity, and stay immutable for the whole session. File order
//! is display order, so parsing goes through `serde_json` with
//! `preserve_order` enabled.

use std::path::Path;

use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use tracing::warn;

/// Ordered asset → quantity portfolio, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct Holdings {
    entries: Vec<(String, f64)>,
}

impl Holdings {
    /// Build holdings from explicit entries, keeping the given order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(asset, qty)| (asset.into(), qty)).collect(),
        }
    }

    /// Parse a holdings JSON object, keeping key order.
    ///
    /// Entries with a negative or non-numeric quantity are skipped with a
    /// warning rather than failing the whole file.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| anyhow!("holdings file must be a JSON object"))?;

        let mut entries = Vec::with_capacity(object.len());
        for (asset, quantity) in object {
            match quantity.as_f64() {
                Some(qty) if qty >= 0.0 => entries.push((asset.clone(), qty)),
                Some(qty) => {
                    warn!(asset = %asset, quantity = qty, "negative quantity ignored");
                }
                None => {
                    warn!(asset = %asset, "non-numeric quantity ignored");
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load holdings from a file, falling back to an empty portfolio with a
    /// user-visible warning when the file is missing or unparseable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            println!(" {} '{}' not found.", "Error:".yellow(), path.display());
            warn!(path = %path.display(), "holdings file not found, starting empty");
            return Self::default();
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                println!(" {} Failed to read '{}'.", "Error:".yellow(), path.display());
                warn!(path = %path.display(), error = %e, "holdings file unreadable");
                return Self::default();
            }
        };

        match Self::parse(&text) {
            Ok(holdings) => holdings,
            Err(e) => {
                println!(" {} Failed to parse '{}'.", "Error:".yellow(), path.display());
                warn!(path = %path.display(), error = %e, "holdings file unparseable");
                Self::default()
            }
        }
    }

    /// Asset ids in display order.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(asset, _)| asset.as_str())
    }

    /// Quantity held of an asset, if present.
    pub fn quantity(&self, asset: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(held, _)| held == asset)
            .map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(asset, qty)| (asset.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
