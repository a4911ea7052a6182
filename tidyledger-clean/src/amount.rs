//! Amount and currency extraction from free-form statement cells.
//!
//! Inputs have no fixed grammar: currency symbols, accounting-style
//! parenthesized negatives, thousands separators, trailing currency
//! suffixes, and mojibake all show up in real exports. Parsing is total —
//! malformed text degrades to an absent amount, never an error.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tidyledger_core::Cell;

/// Parsed output of one raw amount cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAmount {
    /// Signed value; `None` when the cell was absent or unparseable.
    pub amount: Option<f64>,
    /// Detected currency code, or the configured default.
    pub currency: String,
}

/// Parses one raw amount cell into a [`ParsedAmount`].
#[derive(Debug)]
pub struct AmountParser {
    numeric_run: Regex,
    default_currency: String,
}

impl AmountParser {
    pub fn new(default_currency: impl Into<String>) -> Result<Self> {
        // First maximal run of digits, commas, and periods.
        let numeric_run = Regex::new(r"[0-9.,]+")?;
        Ok(Self {
            numeric_run,
            default_currency: default_currency.into(),
        })
    }

    /// Parse a cell. Total: every input yields exactly one `ParsedAmount`.
    pub fn parse(&self, cell: &Cell) -> ParsedAmount {
        if cell.is_empty() {
            return ParsedAmount {
                amount: None,
                currency: self.default_currency.clone(),
            };
        }

        let text = cell.to_text();
        let trimmed = text.trim();

        // Detection never consumes the matched text.
        let currency = self.detect_currency(trimmed);

        // Accounting-style (123.45) first, then a leading dash on whatever
        // remains. Both set the same flag, so "(-123.45)" negates once —
        // the double-negative form is deliberately not special-cased.
        let mut negative = false;
        let mut rest = trimmed;
        if rest.starts_with('(') && rest.ends_with(')') && rest.len() >= 2 {
            negative = true;
            rest = &rest[1..rest.len() - 1];
        }
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        }

        let amount = self
            .numeric_run
            .find(rest)
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            .map(|v| if negative { -v } else { v });

        ParsedAmount { amount, currency }
    }

    fn detect_currency(&self, text: &str) -> String {
        if text.contains('$') {
            return "USD".to_string();
        }
        if text.to_lowercase().contains("usd") {
            return "USD".to_string();
        }
        // Half-width or full-width yen sign. UTF-8-read-as-Latin-1 mojibake
        // ("Â¥") still contains U+00A5, so it matches too.
        if text.contains('¥') || text.contains('￥') {
            return "JPY".to_string();
        }
        self.default_currency.clone()
    }
}
