//! Valuation engine and all-in conversion calculator
//!
//! [`compute_valuation`] prices the whole portfolio with one batched
//! provider call and derives per-asset value and percentage-of-total.
//! [`compute_all_in`] reuses it to answer "how much of asset X would I hold
//! if I liquidated everything into it".

use tracing::warn;

use crate::errors::PortfolioError;
use crate::holdings::Holdings;
use crate::provider::PriceProvider;

/// Priced position within a [`Valuation`].
#[derive(Debug, Clone)]
pub struct AssetValuation {
    pub asset: String,
    pub quantity: f64,
    /// Unit price in the valuation's quote currency.
    pub price: f64,
    /// `price * quantity`.
    pub value: f64,
    /// Share of the portfolio total, in percent.
    pub percent: f64,
}

/// Snapshot of the portfolio priced in a single quote currency.
///
/// Built fresh per request and never mutated afterwards. Assets the
/// provider had no quote for are excluded from `positions` and from
/// `total`, and listed in `skipped`; percentages of the included positions
/// always sum to 100.
#[derive(Debug, Clone)]
pub struct Valuation {
    pub currency: String,
    pub total: f64,
    /// Included positions, in holdings order.
    pub positions: Vec<AssetValuation>,
    /// Assets excluded because no quote was available.
    pub skipped: Vec<String>,
}

impl Valuation {
    /// The included position for an asset, if it was priced.
    pub fn position(&self, asset: &str) -> Option<&AssetValuation> {
        self.positions.iter().find(|p| p.asset == asset)
    }
}

/// Result of an all-in conversion.
#[derive(Debug, Clone, Copy)]
pub struct AllIn {
    /// Amount of the target asset held after converting everything into it.
    pub total: f64,
    /// Amount gained by the conversion (excludes any quantity already held).
    pub gain: f64,
}

/// Value the portfolio in `quote_currency` with one batched provider call.
///
/// Assets missing from the response are skipped, not fatal. Fails with
/// [`PortfolioError::ZeroTotalValuation`] when nothing could be priced or
/// every quantity is zero, since percentages are undefined at total zero.
pub async fn compute_valuation(
    holdings: &Holdings,
    quote_currency: &str,
    provider: &dyn PriceProvider,
) -> Result<Valuation, PortfolioError> {
    let assets: Vec<&str> = holdings.assets().collect();
    let quotes = provider.get_prices(&assets, quote_currency).await?;

    let mut positions = Vec::with_capacity(holdings.len());
    let mut skipped = Vec::new();
    let mut total = 0.0;

    for (asset, quantity) in holdings.iter() {
        let Some(price) = quotes.price(asset, quote_currency) else {
            warn!(asset, quote_currency, "no quote in provider response, excluding");
            skipped.push(asset.to_string());
            continue;
        };

        let value = price * quantity;
        total += value;
        positions.push(AssetValuation {
            asset: asset.to_string(),
            quantity,
            price,
            value,
            percent: 0.0,
        });
    }

    if total == 0.0 {
        return Err(PortfolioError::ZeroTotalValuation { skipped });
    }

    for position in &mut positions {
        position.percent = 100.0 * position.value / total;
    }

    Ok(Valuation {
        currency: quote_currency.to_string(),
        total,
        positions,
        skipped,
    })
}

/// Single-asset price lookup.
pub async fn lookup_price(
    asset: &str,
    quote_currency: &str,
    provider: &dyn PriceProvider,
) -> Result<f64, PortfolioError> {
    let quotes = provider.get_price(asset, quote_currency).await?;
    quotes
        .price(asset, quote_currency)
        .ok_or_else(|| PortfolioError::QuoteUnavailable {
            asset: asset.to_string(),
            currency: quote_currency.to_string(),
        })
}

/// Compute the all-in conversion of the whole portfolio into `target`.
///
/// If the target is already a priced holding, its own value is subtracted
/// before converting the rest; otherwise one extra single-asset lookup
/// fetches the target's price. A zero or missing target price fails with
/// [`PortfolioError::QuoteUnavailable`] instead of dividing by zero.
pub async fn compute_all_in(
    holdings: &Holdings,
    quote_currency: &str,
    target: &str,
    provider: &dyn PriceProvider,
) -> Result<AllIn, PortfolioError> {
    let valuation = compute_valuation(holdings, quote_currency, provider).await?;

    let quote_unavailable = || PortfolioError::QuoteUnavailable {
        asset: target.to_string(),
        currency: quote_currency.to_string(),
    };

    if let Some(position) = valuation.position(target) {
        if position.price == 0.0 {
            return Err(quote_unavailable());
        }
        let gain = (valuation.total - position.value) / position.price;
        Ok(AllIn {
            total: position.quantity + gain,
            gain,
        })
    } else {
        let price = lookup_price(target, quote_currency, provider).await?;
        if price == 0.0 {
            return Err(quote_unavailable());
        }
        let gain = valuation.total / price;
        Ok(AllIn { total: gain, gain })
    }
}
