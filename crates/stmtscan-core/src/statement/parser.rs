//! Line-oriented field extraction from statement first-page text.
//!
//! Each field is located by its label line and captured by regex. The first
//! matching line wins for every label; later candidates are ignored. Missing
//! fields degrade to empty strings, never to errors.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use super::patterns::{
    ACCOUNT_LINE_PREFIX, ACCOUNT_NUMBER, CURRENCY_AMOUNT, PERIOD_END, PERIOD_LABEL,
    TOTAL_VALUE_LABEL,
};
use crate::models::record::StatementRecord;

/// Parse extracted first-page text into a statement record.
///
/// `filename` is carried into the record and used in diagnostics; it does not
/// influence extraction. All three fields are independently optional and come
/// back as empty strings when their label line is absent or malformed.
pub fn parse_statement_text(text: &str, filename: &str) -> StatementRecord {
    let value = extract_total_value(text);
    let date = extract_period_end_date(text);
    let account_number = extract_account_number(text);

    if value.is_empty() {
        warn!("Missing dollar value in file: {}", filename);
    }
    if date.is_empty() {
        warn!("Missing date in file: {}", filename);
    }
    if account_number.is_empty() {
        warn!("Missing account number in file: {}", filename);
    }

    StatementRecord {
        filename: filename.to_string(),
        date,
        value,
        account_number,
    }
}

/// Extract the dollar figure from the first line labeled "TOTAL VALUE".
fn extract_total_value(text: &str) -> String {
    let Some(line) = text.lines().find(|line| line.contains(TOTAL_VALUE_LABEL)) else {
        return String::new();
    };

    match CURRENCY_AMOUNT.find(line) {
        Some(m) => {
            let value = m.as_str().trim().replace('$', "");
            info!("Found balance: {}", value);
            value
        }
        None => String::new(),
    }
}

/// Extract the period end date from the first line labeled "PERIOD".
///
/// The line is expected to read "... FROM <date> TO <date>"; the capture after
/// "TO" is parsed as a textual date ("January 5, 2024") and reformatted to
/// MM/DD/YYYY. Any other phrasing yields an empty date.
fn extract_period_end_date(text: &str) -> String {
    let Some(line) = text.lines().find(|line| line.contains(PERIOD_LABEL)) else {
        return String::new();
    };

    match PERIOD_END.captures(line) {
        Some(caps) => {
            let date = format_statement_date(caps[1].trim());
            if !date.is_empty() {
                info!("Found date: {}", date);
            }
            date
        }
        None => String::new(),
    }
}

/// Extract the account number from the first line starting with
/// "Account Number:".
fn extract_account_number(text: &str) -> String {
    let Some(line) = text
        .lines()
        .find(|line| line.starts_with(ACCOUNT_LINE_PREFIX))
    else {
        info!("No line starting with 'Account Number:' found");
        return String::new();
    };

    debug!("Account line found: {}", line);

    match ACCOUNT_NUMBER.captures(line) {
        Some(caps) => {
            let account_number = caps[1].trim().to_string();
            info!("Found account number: {}", account_number);
            account_number
        }
        None => {
            info!("Account number not found in the line starting with 'Account Number:'");
            String::new()
        }
    }
}

/// Reformat a textual date ("January 5, 2024") as MM/DD/YYYY.
///
/// Returns an empty string when the input does not parse; the failure is
/// logged, never raised.
fn format_statement_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%B %d, %Y") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => {
            error!("Date conversion failed for '{}'", date_str);
            String::new()
        }
    }
}
