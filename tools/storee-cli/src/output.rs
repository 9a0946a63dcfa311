//! Terminal output for `storee`.
//!
//! With `--json` only the JSON document goes to stdout; the human
//! messages are dropped so the output can be piped.

use std::time::Duration;

use console::{style, truncate_str};
use indicatif::{ProgressBar, ProgressStyle};
use storee_sdk::storee_commerce::money::Money;

const SPINNER_TICK: Duration = Duration::from_millis(100);

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn human(&self) -> bool {
        !self.json
    }

    pub fn info(&self, msg: &str) {
        if self.human() {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.human() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.human() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in JSON mode too, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && self.human() {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.human() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("could not encode output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.human() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// One table row. Cells longer than their column are cut with `…`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.human() {
            println!("  {}", table_cells(cols, widths));
        }
    }

    /// Bar for a known number of steps, hidden in JSON mode.
    pub fn progress(&self, len: u64, msg: &str) -> ProgressBar {
        if !self.human() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(msg.to_string());
        pb
    }

    /// Spinner while waiting on the store.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.human() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(SPINNER_TICK);
        pb
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn table_cells(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| {
            let cell = truncate_str(col, *width, "…");
            format!("{:width$}", cell, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Where a listing came from: the live store or the demo catalog.
pub fn source_badge(is_demo: bool) -> String {
    if is_demo {
        style("demo").yellow().to_string()
    } else {
        style("live").green().to_string()
    }
}

/// Price column text, with a sign for variant deltas.
pub fn price_cell(amount: Money, signed: bool) -> String {
    if signed {
        amount.delta_label()
    } else {
        amount.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cells_pad_and_truncate() {
        let row = table_cells(&["Sahara Modular Sofa", "sofa"], &[10, 6]);
        assert_eq!(row, "Sahara Mo…  sofa  ");
    }

    #[test]
    fn test_price_cell() {
        assert_eq!(price_cell(Money::sar(8500), false), "8,500 SAR");
        assert_eq!(price_cell(Money::sar(-300), true), "-300 SAR");
    }
}
