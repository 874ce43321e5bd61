//! Interactive portfolio session
//!
//! Line-oriented command loop: blank input refreshes the table, named
//! commands switch currency, look up prices, or run all-in conversions.
//! The selected quote currency lives on the [`Session`] value and is
//! threaded explicitly through every handler, never through globals.
//! Every failure is reported and the loop continues; only `exit` or EOF
//! ends the session.

use std::io::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::display::{display_name, render_help, render_table, render_title};
use crate::errors::PortfolioError;
use crate::holdings::Holdings;
use crate::provider::PriceProvider;
use crate::valuation::{compute_all_in, compute_valuation, lookup_price};

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank input: refresh the portfolio display.
    Refresh,
    Help,
    Currency { code: Option<String> },
    Price { asset: Option<String>, currency: Option<String> },
    AllIn { target: Option<String> },
    Exit,
    Unknown(String),
}

/// Parse one input line. Input is lowercased and whitespace-split; the
/// first word selects the command, the rest are arguments.
pub fn parse_command(line: &str) -> Command {
    let lowered = line.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let Some(&command) = words.first() else {
        return Command::Refresh;
    };

    match command {
        "exit" | "e" => Command::Exit,
        "help" | "?" | "h" => Command::Help,
        "currency" | "c" => Command::Currency {
            code: words.get(1).map(|s| s.to_string()),
        },
        "price" | "p" => Command::Price {
            asset: words.get(1).map(|s| s.to_string()),
            currency: words.get(2).map(|s| s.to_string()),
        },
        "all-in" | "allin" | "a-i" | "ai" => Command::AllIn {
            target: words.get(1).map(|s| s.to_string()),
        },
        other => Command::Unknown(other.to_string()),
    }
}

/// Interactive session state: the read-only holdings, the provider, and
/// the currently selected quote currency.
pub struct Session<'a> {
    holdings: &'a Holdings,
    provider: &'a dyn PriceProvider,
    currency: String,
}

impl<'a> Session<'a> {
    pub fn new(holdings: &'a Holdings, provider: &'a dyn PriceProvider, currency: String) -> Self {
        Self {
            holdings,
            provider,
            currency,
        }
    }

    /// Currently selected quote currency.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Run the command loop over stdin until `exit` or EOF.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", render_title());
        println!("\n Welcome!\n");

        if self.holdings.is_empty() {
            println!(" {} Portfolio is empty.", "Warning:".yellow());
        }
        self.display_portfolio().await;

        println!("\n Press Enter to refresh or type '?' for help.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("\n >> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            println!();

            if !self.dispatch(parse_command(&line)).await {
                break;
            }
        }

        Ok(())
    }

    /// Execute one command. Returns false when the session should end.
    async fn dispatch(&mut self, command: Command) -> bool {
        info!(?command, currency = %self.currency, "dispatching session command");
        match command {
            Command::Refresh => self.display_portfolio().await,
            Command::Exit => {
                println!(" Goodbye!\n");
                return false;
            }
            Command::Help => {
                println!("{}", render_title());
                println!("{}", render_help());
            }
            Command::Currency { code: None } => {
                println!(" {} Missing currency argument.", "Error:".red());
            }
            Command::Currency { code: Some(code) } => {
                self.currency = code;
                self.display_portfolio().await;
            }
            Command::Price { asset: None, .. } => {
                println!(" {} Specify a coin name.", "Error:".red());
            }
            Command::Price {
                asset: Some(asset),
                currency,
            } => {
                let currency = currency.unwrap_or_else(|| self.currency.clone());
                self.show_price(&asset, &currency).await;
            }
            Command::AllIn { target: None } => {
                println!(" {} Specify a target coin.", "Error:".red());
            }
            Command::AllIn {
                target: Some(target),
            } => self.show_all_in(&target).await,
            Command::Unknown(_) => {
                println!(" {} Unknown command.", "Error:".red());
            }
        }
        true
    }

    /// Value the portfolio and print the table, reporting any failure.
    pub async fn display_portfolio(&self) {
        match compute_valuation(self.holdings, &self.currency, self.provider).await {
            Ok(valuation) => {
                print_skip_warnings(&valuation.skipped, &self.currency);
                println!("{}", render_table(&valuation));
            }
            Err(PortfolioError::ZeroTotalValuation { skipped }) => {
                print_skip_warnings(&skipped, &self.currency);
                println!(
                    " {} Total value is zero. Check portfolio or currency.",
                    "Error:".red()
                );
            }
            Err(e) => println!(" {} {}", "Error fetching price data:".red(), e),
        }
    }

    async fn show_price(&self, asset: &str, currency: &str) {
        match lookup_price(asset, currency, self.provider).await {
            Ok(price) => println!(
                " {} price: {} {}",
                display_name(asset),
                price,
                currency.to_uppercase()
            ),
            Err(e) => println!(
                " {} {}: {}",
                "Error fetching price for".red(),
                display_name(asset),
                e
            ),
        }
    }

    async fn show_all_in(&self, target: &str) {
        match compute_all_in(self.holdings, &self.currency, target, self.provider).await {
            Ok(all_in) => println!(
                " Total {}: {} (+ {})",
                display_name(target),
                all_in.total,
                all_in.gain
            ),
            Err(PortfolioError::ZeroTotalValuation { skipped }) => {
                print_skip_warnings(&skipped, &self.currency);
                println!(
                    " {} Total value is zero. Check portfolio or currency.",
                    "Error:".red()
                );
            }
            Err(e) => println!(" {} {}", "Error calculating all-in conversion:".red(), e),
        }
    }
}

/// Warn about assets excluded from a valuation for missing quotes.
pub fn print_skip_warnings(skipped: &[String], currency: &str) {
    for asset in skipped {
        println!(
            " {} No pricing data found for \"{}\" in {}",
            "Warning:".yellow(),
            asset,
            currency.to_uppercase()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_refreshes() {
        assert_eq!(parse_command(""), Command::Refresh);
        assert_eq!(parse_command("   "), Command::Refresh);
    }

    #[test]
    fn exit_aliases() {
        assert_eq!(parse_command("exit"), Command::Exit);
        assert_eq!(parse_command("e"), Command::Exit);
    }

    #[test]
    fn help_aliases() {
        for input in ["help", "?", "h", "HELP"] {
            assert_eq!(parse_command(input), Command::Help, "input: {input}");
        }
    }

    #[test]
    fn currency_with_and_without_argument() {
        assert_eq!(
            parse_command("currency usd"),
            Command::Currency {
                code: Some("usd".to_string())
            }
        );
        assert_eq!(
            parse_command("c BTC"),
            Command::Currency {
                code: Some("btc".to_string())
            }
        );
        assert_eq!(parse_command("currency"), Command::Currency { code: None });
    }

    #[test]
    fn price_with_optional_currency() {
        assert_eq!(
            parse_command("price bitcoin"),
            Command::Price {
                asset: Some("bitcoin".to_string()),
                currency: None
            }
        );
        assert_eq!(
            parse_command("p bitcoin usd"),
            Command::Price {
                asset: Some("bitcoin".to_string()),
                currency: Some("usd".to_string())
            }
        );
        assert_eq!(
            parse_command("price"),
            Command::Price {
                asset: None,
                currency: None
            }
        );
    }

    #[test]
    fn all_in_aliases() {
        for input in ["all-in monero", "allin monero", "a-i monero", "ai monero"] {
            assert_eq!(
                parse_command(input),
                Command::AllIn {
                    target: Some("monero".to_string())
                },
                "input: {input}"
            );
        }
        assert_eq!(parse_command("all-in"), Command::AllIn { target: None });
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_command("frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn input_is_lowercased_and_trimmed() {
        assert_eq!(
            parse_command("  PRICE Bitcoin-Cash  USD "),
            Command::Price {
                asset: Some("bitcoin-cash".to_string()),
                currency: Some("usd".to_string())
            }
        );
    }
}
