//! Statement record model and end-of-run validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Date format used for every record that survives validation.
pub const RECORD_DATE_FORMAT: &str = "%m/%d/%Y";

/// CSV column names, in output order.
pub const CSV_HEADER: [&str; 4] = ["Filename", "date", "value", "account_number"];

/// One row of extracted data corresponding to one processed PDF file.
///
/// Fields are already-formatted strings; `date`, `value` and `account_number`
/// may each be empty when the source statement lacked the label line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Source PDF file name (not the full path).
    #[serde(rename = "Filename")]
    pub filename: String,
    /// Statement period end date, MM/DD/YYYY or empty.
    pub date: String,
    /// Total dollar value without the currency symbol, or empty.
    pub value: String,
    /// Account number, or empty.
    pub account_number: String,
}

impl StatementRecord {
    /// Parsed calendar date of this record, if the date field is valid.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, RECORD_DATE_FORMAT).ok()
    }
}

/// Validate and order records for output.
///
/// Records whose date does not parse as a valid MM/DD/YYYY calendar date are
/// dropped (and logged); an empty date always fails the parse. Survivors are
/// stably sorted by ascending date, ties broken by lexical account number.
/// No deduplication is performed.
pub fn finalize_records(records: Vec<StatementRecord>) -> Vec<StatementRecord> {
    let mut valid: Vec<(NaiveDate, StatementRecord)> = Vec::with_capacity(records.len());

    for record in records {
        match record.parsed_date() {
            Some(date) => valid.push((date, record)),
            None => warn!("Invalid or missing date in row: {:?}", record),
        }
    }

    valid.sort_by(|a, b| {
        (a.0, &a.1.account_number).cmp(&(b.0, &b.1.account_number))
    });

    valid.into_iter().map(|(_, record)| record).collect()
}
