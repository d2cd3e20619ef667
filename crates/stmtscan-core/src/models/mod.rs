//! Data models for statement scanning.

pub mod config;
pub mod record;

pub use config::ScanConfig;
pub use record::{finalize_records, StatementRecord, CSV_HEADER};
