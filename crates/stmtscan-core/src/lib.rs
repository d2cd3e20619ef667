//! Core library for PDF statement scanning.
//!
//! This crate provides:
//! - First-page PDF text extraction (via lopdf)
//! - Statement field extraction (total value, period end date, account number)
//! - Record validation and ordering for the CSV summary

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{PdfError, Result, ScanError};
pub use models::{finalize_records, ScanConfig, StatementRecord, CSV_HEADER};
pub use pdf::{first_page_text, PdfExtractor};
pub use statement::parse_statement_text;
