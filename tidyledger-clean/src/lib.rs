//! tidyledger-clean: noise-row filtering and amount/currency parsing for
//! normalized statement tables.

pub mod amount;
pub mod classify;
pub mod stage;

pub use amount::{AmountParser, ParsedAmount};
pub use classify::{filter_noise, is_empty_row, is_repeated_header, is_summary_row};
pub use stage::{CleaningStage, Pipeline, Stage};
