//! tidyledger-core: table data model and cleaning configuration

pub mod config;
pub mod table;

pub use config::{CleanConfig, DEFAULT_CURRENCY};
pub use table::{Cell, Row, Table};
