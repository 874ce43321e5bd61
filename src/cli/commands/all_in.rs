//! All-in conversion command

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::CommandContext;
use crate::display::display_name;
use crate::session::print_skip_warnings;
use crate::valuation::compute_all_in;

#[derive(Args, Clone)]
pub struct AllInArgs {
    /// Target asset id to convert the whole portfolio into
    pub target: String,
}

pub struct AllInCommand {
    args: AllInArgs,
}

impl AllInCommand {
    pub fn new(args: AllInArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let target = self.args.target.to_lowercase();

        let all_in = match compute_all_in(&ctx.holdings, &ctx.currency, &target, &ctx.provider)
            .await
        {
            Ok(all_in) => all_in,
            Err(crate::errors::PortfolioError::ZeroTotalValuation { skipped }) => {
                print_skip_warnings(&skipped, &ctx.currency);
                return Err(crate::errors::PortfolioError::ZeroTotalValuation { skipped })
                    .context("portfolio could not be valued");
            }
            Err(e) => return Err(e).context("failed to calculate all-in conversion"),
        };

        println!(
            " Total {}: {} (+ {})",
            display_name(&target),
            all_in.total,
            all_in.gain
        );
        Ok(())
    }
}
