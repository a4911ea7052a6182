//! Cleaning configuration: summary keywords, default currency, and the
//! canonical output schema.
//!
//! Passed explicitly into the cleaning stage so behavior is fully determined
//! by inputs — no ambient globals.

use serde::{Deserialize, Serialize};

/// Sentinel currency code used when no currency marker is detected.
pub const DEFAULT_CURRENCY: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Lower-cased substrings that mark a row as a summary line
    /// (Subtotal / Total / Opening Balance).
    pub summary_keywords: Vec<String>,
    /// Currency code reported when no marker matches.
    pub default_currency: String,
    /// Name of the raw amount-bearing column the parser reads.
    pub amount_column: String,
    /// Canonical column list enforced by the downstream finalize-schema stage.
    pub standard_columns: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            summary_keywords: vec![
                "subtotal".to_string(),
                "total".to_string(),
                "opening balance".to_string(),
            ],
            default_currency: DEFAULT_CURRENCY.to_string(),
            amount_column: "amount".to_string(),
            standard_columns: vec![
                "date".to_string(),
                "description".to_string(),
                "amount".to_string(),
                "currency".to_string(),
                "notes".to_string(),
                "source_file".to_string(),
            ],
        }
    }
}
