//! Calendar date format used by the ledger table and its inputs

use chrono::NaiveDate;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Day-month-year, e.g. `05-06-2024`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// A strftime pattern for calendar dates (no time component)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Parse a date, failing with [`LedgerError::Format`] on any mismatch
    pub fn parse(&self, s: &str) -> LedgerResult<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), &self.0).map_err(|_| LedgerError::bad_date(s, &self.0))
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }

    /// The pattern spelled for people, e.g. `dd-mm-yyyy`
    pub fn hint(&self) -> String {
        self.0
            .replace("%d", "dd")
            .replace("%m", "mm")
            .replace("%Y", "yyyy")
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
