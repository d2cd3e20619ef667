//! Common regex patterns for statement field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency amount: optional dollar sign, thousands groups, optional cents
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"\$?\d+(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();

    // Period end date: "FROM <...> TO <textual date>" on the PERIOD line
    pub static ref PERIOD_END: Regex = Regex::new(
        r"TO\s+([\w\s,]+)"
    ).unwrap();

    // Account number following the "Account Number:" label
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"Account Number:?[\s:]*(\S+)"
    ).unwrap();
}

/// Line label that marks the total-value line of a statement.
pub const TOTAL_VALUE_LABEL: &str = "TOTAL VALUE";

/// Line label that marks the statement-period line.
pub const PERIOD_LABEL: &str = "PERIOD";

/// Prefix that marks the account-number line.
pub const ACCOUNT_LINE_PREFIX: &str = "Account Number:";
