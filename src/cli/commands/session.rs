//! Interactive session command (the default mode)

use anyhow::Result;
use clap::Args;

use crate::cli::CommandContext;
use crate::session::Session;

#[derive(Args, Clone)]
pub struct SessionArgs {}

pub struct SessionCommand {
    _args: SessionArgs,
}

impl SessionCommand {
    pub fn new(args: SessionArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut session = Session::new(&ctx.holdings, &ctx.provider, ctx.currency.clone());
        session.run().await
    }
}
