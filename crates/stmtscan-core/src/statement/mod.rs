//! Rule-based field extraction for statement first pages.

pub mod parser;
pub mod patterns;

pub use parser::parse_statement_text;
