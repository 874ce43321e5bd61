//! CLI module for cryptofolio
//!
//! Argument parsing and the one-shot command surface. The interactive
//! session is the default; `show`, `price`, and `all-in` run a single
//! operation and exit. Each command follows the Args/Command pattern.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::AppConfig;
use crate::holdings::Holdings;
use crate::logging::{init_logging, LogMode, LoggingConfig};
use crate::provider::CoinGeckoClient;

use commands::all_in::{AllInArgs, AllInCommand};
use commands::price::{PriceArgs, PriceCommand};
use commands::session::{SessionArgs, SessionCommand};
use commands::show::{ShowArgs, ShowCommand};

#[derive(Parser)]
#[command(name = "cryptofolio")]
#[command(version)]
#[command(about = "Terminal cryptocurrency portfolio tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Holdings file path
    #[arg(long, global = true, default_value = "portfolio.json")]
    pub portfolio: PathBuf,

    /// Quote currency (overrides the config file default)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Log directory path
    #[arg(long, global = true, default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive portfolio session (default)
    Session(SessionArgs),

    /// Display the portfolio valuation table once
    Show(ShowArgs),

    /// Look up the price of a single asset
    Price(PriceArgs),

    /// Calculate converting the entire portfolio into one asset
    AllIn(AllInArgs),
}

/// Everything a command needs: loaded holdings, the selected quote
/// currency, and the price provider.
pub struct CommandContext {
    pub holdings: Holdings,
    pub currency: String,
    pub provider: CoinGeckoClient,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        // The interactive session owns the terminal; keep tracing out of it.
        let log_mode = match self.command {
            None | Some(Commands::Session(_)) => LogMode::FileOnly,
            Some(_) => LogMode::ConsoleAndFile,
        };
        init_logging(LoggingConfig::new(log_mode, &self.log_dir, self.verbose > 0))?;

        let config = AppConfig::load_or_default(&self.config);
        let currency = self
            .currency
            .unwrap_or_else(|| config.currency().to_string())
            .to_lowercase();
        let holdings = Holdings::load_or_default(&self.portfolio);

        let ctx = CommandContext {
            holdings,
            currency,
            provider: CoinGeckoClient::new(),
        };

        match self.command {
            None => SessionCommand::new(SessionArgs {}).execute(&ctx).await,
            Some(Commands::Session(args)) => SessionCommand::new(args).execute(&ctx).await,
            Some(Commands::Show(args)) => ShowCommand::new(args).execute(&ctx).await,
            Some(Commands::Price(args)) => PriceCommand::new(args).execute(&ctx).await,
            Some(Commands::AllIn(args)) => AllInCommand::new(args).execute(&ctx).await,
        }
    }
}
