//! CoinGecko `simple/price` client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::ProviderError;

use super::{PriceProvider, QuoteSet};

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "COINGECKO_API_URL";

/// HTTP client for the public CoinGecko price API.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client against the public API, honoring `COINGECKO_API_URL`
    /// if set.
    pub fn new() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against a custom endpoint (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn simple_price(&self, ids: &str, quote_currency: &str) -> Result<QuoteSet, ProviderError> {
        let url = format!("{}/api/v3/simple/price", self.base_url);

        debug!(ids, quote_currency, "requesting quotes");
        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids), ("vs_currencies", quote_currency)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let body = response.text().await?;
        let quotes: QuoteSet = serde_json::from_str(&body)?;

        info!(ids, quote_currency, "received quotes");
        Ok(quotes)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoClient {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn get_prices(
        &self,
        assets: &[&str],
        quote_currency: &str,
    ) -> Result<QuoteSet, ProviderError> {
        self.simple_price(&assets.join(","), quote_currency).await
    }

    async fn get_price(&self, asset: &str, quote_currency: &str) -> Result<QuoteSet, ProviderError> {
        self.simple_price(asset, quote_currency).await
    }
}
