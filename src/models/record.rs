//! Record model
//!
//! A single income or expense transaction. Records are immutable once
//! appended to the ledger table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// One transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Positive, non-zero amount
    pub amount: Money,

    pub category: Category,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record without checking the amount
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Create a record, rejecting amounts that are zero or negative
    pub fn validated(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "Amount must be a positive, non-zero value.".into(),
            ));
        }
        Ok(Self::new(date, amount, category, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_validated_accepts_positive() {
        let record =
            Record::validated(june(1), Money::from_cents(120000), Category::Income, "bonus")
                .unwrap();
        assert_eq!(record.category, Category::Income);
        assert_eq!(record.description, "bonus");
    }

    #[test]
    fn test_validated_rejects_zero_and_negative() {
        let zero = Record::validated(june(1), Money::zero(), Category::Expense, "");
        assert!(zero.unwrap_err().is_validation());

        let negative = Record::validated(june(1), Money::from_cents(-1), Category::Expense, "");
        assert!(negative.unwrap_err().is_validation());
    }
}
