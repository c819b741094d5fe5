//! Console input
//!
//! Validators that turn raw user text into record fields, and a prompter
//! that keeps asking until each validator accepts the answer.

pub mod prompt;

pub use prompt::Prompter;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, DateFormat, Money};

/// Parse a transaction date; blank input means `today`
pub fn parse_date(input: &str, format: &DateFormat, today: NaiveDate) -> LedgerResult<NaiveDate> {
    if input.trim().is_empty() {
        return Ok(today);
    }
    format.parse(input)
}

/// Parse a positive, non-zero amount
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    let amount = Money::parse(input).map_err(|e| LedgerError::Format(e.to_string()))?;
    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "Amount must be a positive, non-zero value.".into(),
        ));
    }
    Ok(amount)
}

/// Resolve `I`/`E` (or the full names) to a category
pub fn parse_category(input: &str) -> LedgerResult<Category> {
    Category::parse(input).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid category '{}'. Use 'I' for income or 'E' for expense.",
            input.trim()
        ))
    })
}
