//! One-shot portfolio valuation display

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::CommandContext;
use crate::display::render_table;
use crate::errors::PortfolioError;
use crate::session::print_skip_warnings;
use crate::valuation::compute_valuation;

#[derive(Args, Clone)]
pub struct ShowArgs {}

pub struct ShowCommand {
    _args: ShowArgs,
}

impl ShowCommand {
    pub fn new(args: ShowArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if ctx.holdings.is_empty() {
            println!(" {} Portfolio is empty.", "Warning:".yellow());
        }

        match compute_valuation(&ctx.holdings, &ctx.currency, &ctx.provider).await {
            Ok(valuation) => {
                print_skip_warnings(&valuation.skipped, &ctx.currency);
                println!("{}", render_table(&valuation));
                Ok(())
            }
            Err(PortfolioError::ZeroTotalValuation { skipped }) => {
                print_skip_warnings(&skipped, &ctx.currency);
                Err(PortfolioError::ZeroTotalValuation { skipped })
                    .context("portfolio could not be valued")
            }
            Err(e) => Err(e).context("failed to fetch price data"),
        }
    }
}
