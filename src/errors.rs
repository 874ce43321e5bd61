//! Error taxonomy for valuation and price lookups
//!
//! Domain failures are typed so command handlers can decide how to report
//! them; transport-level failures stay in `ProviderError` at the HTTP
//! boundary.

use thiserror::Error;

/// Failures from the price provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("price request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("price API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed price response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures from the valuation engine and conversion calculator.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The quote fetch itself failed; the provider's error is preserved.
    #[error("price provider unavailable: {0}")]
    Provider(#[from] ProviderError),

    /// The provider answered but had no quote for this asset/currency pair.
    #[error("no quote available for '{asset}' in {currency}")]
    QuoteUnavailable { asset: String, currency: String },

    /// Nothing in the portfolio could be priced, or every quantity is zero.
    /// Percentages are undefined at total zero, so valuation refuses to
    /// proceed. `skipped` lists the assets excluded for missing quotes so
    /// callers can surface them alongside the error.
    #[error("total portfolio value is zero; check holdings or currency")]
    ZeroTotalValuation { skipped: Vec<String> },
}
