//! Single-asset price lookup command

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::CommandContext;
use crate::display::display_name;
use crate::valuation::lookup_price;

#[derive(Args, Clone)]
pub struct PriceArgs {
    /// Asset id (e.g. 'bitcoin')
    pub asset: String,

    /// Quote currency (defaults to the selected currency)
    pub quote_currency: Option<String>,
}

pub struct PriceCommand {
    args: PriceArgs,
}

impl PriceCommand {
    pub fn new(args: PriceArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let asset = self.args.asset.to_lowercase();
        let currency = self
            .args
            .quote_currency
            .as_deref()
            .unwrap_or(&ctx.currency)
            .to_lowercase();

        let price = lookup_price(&asset, &currency, &ctx.provider)
            .await
            .with_context(|| format!("failed to fetch price for {asset}"))?;

        println!(
            " {} price: {} {}",
            display_name(&asset),
            price,
            currency.to_uppercase()
        );
        Ok(())
    }
}
