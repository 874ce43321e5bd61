//! Price provider boundary
//!
//! Everything upstream of the valuation engine goes through the
//! [`PriceProvider`] trait. Raw provider JSON is converted into a typed
//! [`QuoteSet`] at this boundary so the rest of the crate never touches
//! untyped data; a missing asset or currency is an absent entry, not an
//! error.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::ProviderError;

mod coingecko;

pub use coingecko::{CoinGeckoClient, BASE_URL_ENV};

/// Current unit prices keyed by asset id, then by quote currency.
///
/// Mirrors the shape of CoinGecko's `simple/price` response:
/// `{ "bitcoin": { "usd": 50000.0 } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct QuoteSet {
    quotes: HashMap<String, HashMap<String, f64>>,
}

impl QuoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit price for an asset/currency pair, if the provider returned one.
    pub fn price(&self, asset: &str, currency: &str) -> Option<f64> {
        self.quotes.get(asset).and_then(|by_currency| by_currency.get(currency)).copied()
    }

    pub fn insert(&mut self, asset: &str, currency: &str, price: f64) {
        self.quotes
            .entry(asset.to_string())
            .or_default()
            .insert(currency.to_string(), price);
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Trait for current-price providers.
#[async_trait]
pub trait PriceProvider {
    /// Name of the provider, for diagnostics.
    fn name(&self) -> &str;

    /// Fetch unit prices for a batch of assets in one call.
    ///
    /// Assets the provider does not know are simply absent from the
    /// returned [`QuoteSet`].
    async fn get_prices(&self, assets: &[&str], quote_currency: &str)
        -> Result<QuoteSet, ProviderError>;

    /// Fetch the unit price for a single asset. Same response shape as
    /// [`PriceProvider::get_prices`].
    async fn get_price(&self, asset: &str, quote_currency: &str)
        -> Result<QuoteSet, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_set_lookup() {
        let mut quotes = QuoteSet::new();
        quotes.insert("bitcoin", "usd", 50000.0);
        quotes.insert("bitcoin", "eur", 46000.0);

        assert_eq!(quotes.price("bitcoin", "usd"), Some(50000.0));
        assert_eq!(quotes.price("bitcoin", "eur"), Some(46000.0));
        assert_eq!(quotes.price("bitcoin", "gbp"), None);
        assert_eq!(quotes.price("ethereum", "usd"), None);
    }

    #[test]
    fn quote_set_deserializes_provider_shape() {
        let body = r#"{"bitcoin":{"usd":50000.0},"ethereum":{"usd":3000.0}}"#;
        let quotes: QuoteSet = serde_json::from_str(body).unwrap();

        assert_eq!(quotes.price("bitcoin", "usd"), Some(50000.0));
        assert_eq!(quotes.price("ethereum", "usd"), Some(3000.0));
    }

    #[test]
    fn empty_response_is_not_an_error() {
        let quotes: QuoteSet = serde_json::from_str("{}").unwrap();
        assert!(quotes.is_empty());
        assert_eq!(quotes.price("xrp", "usd"), None);
    }
}
