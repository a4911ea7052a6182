//! Cleaning stage orchestration.
//!
//! The full pipeline runs header normalization, merged-cell expansion, noise
//! filtering, date parsing, amount/currency parsing, and schema finalization
//! in order. Only the noise-filter + amount-parse stage lives here; the rest
//! are collaborators behind the [`Stage`] seam.

use anyhow::{Context, Result};
use tidyledger_core::{Cell, CleanConfig, Table};
use tracing::debug;

use crate::amount::AmountParser;
use crate::classify;

/// One table-in, table-out pipeline stage.
pub trait Stage {
    fn apply(&self, table: Table) -> Result<Table>;
}

/// Runs a table through an ordered list of stages.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn run(&self, table: Table) -> Result<Table> {
        let mut current = table;
        for stage in &self.stages {
            current = stage.apply(current)?;
        }
        Ok(current)
    }
}

/// Noise-row filtering followed by per-row amount/currency parsing.
///
/// Assumes the input table is already header-normalized and merged-cell
/// expanded. The configured amount column must exist; that is the one
/// precondition surfaced as an error.
pub struct CleaningStage {
    config: CleanConfig,
    parser: AmountParser,
}

impl CleaningStage {
    pub fn new(config: CleanConfig) -> Result<Self> {
        let parser = AmountParser::new(config.default_currency.clone())?;
        Ok(Self { config, parser })
    }
}

impl Stage for CleaningStage {
    fn apply(&self, table: Table) -> Result<Table> {
        let amount_col = table
            .column_index(&self.config.amount_column)
            .with_context(|| {
                format!(
                    "input table has no amount column '{}'",
                    self.config.amount_column
                )
            })?;

        let header_labels = table.columns().to_vec();
        let mut cleaned =
            classify::filter_noise(&table, &header_labels, &self.config.summary_keywords);

        let mut amounts = Vec::with_capacity(cleaned.len());
        let mut currencies = Vec::with_capacity(cleaned.len());
        for row in cleaned.rows() {
            let parsed = self.parser.parse(&row[amount_col]);
            amounts.push(parsed.amount.map_or(Cell::Empty, Cell::Number));
            currencies.push(Cell::Text(parsed.currency));
        }
        cleaned.set_column("amount", amounts)?;
        cleaned.set_column("currency", currencies)?;

        debug!(rows = cleaned.len(), "cleaning stage complete");
        Ok(cleaned)
    }
}
