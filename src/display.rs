//! Fixed-width table rendering for valuations
//!
//! Pure formatting: every number here was already computed by the
//! valuation engine. The table is built as a header row plus data rows,
//! then rendered under one border policy (top border, header, separator,
//! data rows, bottom border) followed by a centered total-value summary.

use crate::valuation::Valuation;

/// Width of each table column, in display characters.
pub const COLUMN_WIDTH: usize = 22;

/// Number of table columns: Coin, Total, Price, Value, % of Total Value.
pub const NUM_COLUMNS: usize = 5;

/// Full table width including borders and padding.
pub const TABLE_WIDTH: usize = NUM_COLUMNS * COLUMN_WIDTH + 16;

/// Quote currencies whose totals read naturally at 2 decimals;
/// crypto-denominated totals get 8.
const FIAT_CURRENCIES: &[&str] = &["usd", "cad"];

/// Human-readable asset name: hyphens become spaces, words are
/// title-cased (`bitcoin-cash` -> `Bitcoin Cash`). Idempotent on names
/// without hyphens.
pub fn display_name(asset: &str) -> String {
    asset
        .split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn border() -> String {
    format!(" {}", "=".repeat(TABLE_WIDTH))
}

fn format_row(cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .map(|cell| format!("{:<width$}", cell, width = COLUMN_WIDTH))
        .collect();
    format!(" | {} |", padded.join(" | "))
}

fn header_row(currency: &str) -> Vec<String> {
    let currency = currency.to_uppercase();
    vec![
        "Coin".to_string(),
        "Total".to_string(),
        format!("Price ({currency})"),
        format!("Value ({currency})"),
        "% of Total Value".to_string(),
    ]
}

fn summary_line(valuation: &Valuation) -> String {
    let total = if FIAT_CURRENCIES.contains(&valuation.currency.as_str()) {
        format!("{:.2}", valuation.total)
    } else {
        format!("{:.8}", valuation.total)
    };
    let text = format!(
        "Total Value ({}): {}",
        valuation.currency.to_uppercase(),
        total
    );
    format!(" |{:^width$}|", text, width = TABLE_WIDTH - 2)
}

/// Render a valuation as a bordered fixed-width table with a total-value
/// summary. Rows appear in the valuation's (holdings) order; assets the
/// engine excluded are simply absent.
pub fn render_table(valuation: &Valuation) -> String {
    let mut rows: Vec<Vec<String>> = vec![header_row(&valuation.currency)];
    for position in &valuation.positions {
        rows.push(vec![
            display_name(&position.asset),
            format!("{}", position.quantity),
            format!("{:.8}", position.price),
            format!("{:.8}", position.value),
            format!("{:.2} %", position.percent),
        ]);
    }

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(border());
    lines.push(format_row(&rows[0]));
    lines.push(border());
    for row in &rows[1..] {
        lines.push(format_row(row));
    }
    lines.push(border());
    lines.push(summary_line(valuation));
    lines.push(border());

    lines.join("\n")
}

/// Render the centered program title banner.
pub fn render_title() -> String {
    let title = format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let banner = format!(" |{:^width$}|", title, width = TABLE_WIDTH - 2);
    [border(), banner, border()].join("\n")
}

/// Help screen listing all session commands and aliases.
pub fn render_help() -> &'static str {
    r#"
 Press Enter to refresh prices.

 Holdings are read from the portfolio file at startup.

 Note: When checking against bitcoin as a currency, use the code 'btc'. When
       checking the price of bitcoin itself, use the asset id 'bitcoin'.

 Commands:

  'help':
      - Display this help screen.
      - Aliases: '?', 'h'

  'currency':
      - Change the currently selected currency.
      - Alias: 'c'

  'price':
      - Check the price of a cryptocurrency against fiat or bitcoin.
      - Alias: 'p'

  'all-in':
      - Calculate the total amount of a cryptocurrency acquired from
        converting the entire portfolio into it.
      - Aliases: 'allin', 'a-i', 'ai'

  'exit':
      - Terminate the program.
      - Alias: 'e'
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::AssetValuation;

    fn sample_valuation() -> Valuation {
        Valuation {
            currency: "usd".to_string(),
            total: 130000.0,
            positions: vec![
                AssetValuation {
                    asset: "bitcoin".to_string(),
                    quantity: 2.0,
                    price: 50000.0,
                    value: 100000.0,
                    percent: 76.92307692307693,
                },
                AssetValuation {
                    asset: "ethereum".to_string(),
                    quantity: 10.0,
                    price: 3000.0,
                    value: 30000.0,
                    percent: 23.076923076923077,
                },
            ],
            skipped: vec![],
        }
    }

    #[test]
    fn display_name_replaces_hyphens_and_title_cases() {
        assert_eq!(display_name("bitcoin-cash"), "Bitcoin Cash");
        assert_eq!(display_name("bitcoin"), "Bitcoin");
        assert_eq!(display_name("usd-coin"), "Usd Coin");
    }

    #[test]
    fn display_name_is_idempotent_on_clean_names() {
        for name in ["Bitcoin", "Ethereum", "Monero"] {
            assert_eq!(display_name(&display_name(name)), display_name(name));
        }
    }

    #[test]
    fn every_line_has_the_fixed_table_width() {
        let table = render_table(&sample_valuation());
        for line in table.lines() {
            // Leading space plus the bordered width.
            assert_eq!(line.chars().count(), TABLE_WIDTH + 1, "line: {line:?}");
        }
    }

    #[test]
    fn table_has_border_policy_shape() {
        let table = render_table(&sample_valuation());
        let lines: Vec<&str> = table.lines().collect();

        // top border, header, separator, 2 data rows, bottom border,
        // summary, closing border
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], border());
        assert!(lines[1].contains("Coin") && lines[1].contains("Price (USD)"));
        assert_eq!(lines[2], border());
        assert!(lines[3].contains("Bitcoin"));
        assert!(lines[4].contains("Ethereum"));
        assert_eq!(lines[5], border());
        assert!(lines[6].contains("Total Value (USD): 130000.00"));
        assert_eq!(lines[7], border());
    }

    #[test]
    fn rows_format_prices_and_percentages() {
        let table = render_table(&sample_valuation());
        assert!(table.contains("50000.00000000"));
        assert!(table.contains("100000.00000000"));
        assert!(table.contains("76.92 %"));
        assert!(table.contains("23.08 %"));
    }

    #[test]
    fn crypto_totals_use_eight_decimals() {
        let mut valuation = sample_valuation();
        valuation.currency = "btc".to_string();
        valuation.total = 2.5;

        let table = render_table(&valuation);
        assert!(table.contains("Total Value (BTC): 2.50000000"));
    }

    #[test]
    fn excluded_assets_do_not_appear() {
        let mut valuation = sample_valuation();
        valuation.skipped = vec!["obscurecoin".to_string()];

        let table = render_table(&valuation);
        assert!(!table.contains("Obscurecoin"));
    }

    #[test]
    fn title_banner_is_centered_and_bordered() {
        let banner = render_title();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], border());
        assert!(lines[1].contains(env!("CARGO_PKG_NAME")));
        assert_eq!(lines[1].chars().count(), TABLE_WIDTH + 1);
    }
}
