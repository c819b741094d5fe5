//! Daily resampling of records into aligned income/expense series

use chrono::NaiveDate;

use crate::models::{Category, Money, Record};

/// Per-day income and expense totals over a contiguous span of dates
///
/// Both columns share the same date index and have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    income: Vec<Money>,
    expense: Vec<Money>,
}

impl DailySeries {
    /// The shared date index, one entry per calendar day
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn series(&self, category: Category) -> &[Money] {
        match category {
            Category::Income => &self.income,
            Category::Expense => &self.expense,
        }
    }

    pub fn income(&self) -> &[Money] {
        &self.income
    }

    pub fn expense(&self) -> &[Money] {
        &self.expense
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last day of the index
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    /// Largest single daily value across both columns
    pub fn max_value(&self) -> Money {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .max()
            .unwrap_or_default()
    }
}

/// Sum records per day and category, zero-filling every day between the
/// earliest and latest record date
///
/// The span comes from the records themselves, not from any query bounds.
pub fn to_daily_series(records: &[Record]) -> DailySeries {
    let (Some(first), Some(last)) = (
        records.iter().map(|r| r.date).min(),
        records.iter().map(|r| r.date).max(),
    ) else {
        return DailySeries::default();
    };

    let days = (last - first).num_days() as usize + 1;
    let mut income = vec![Money::zero(); days];
    let mut expense = vec![Money::zero(); days];

    for record in records {
        let offset = (record.date - first).num_days() as usize;
        match record.category {
            Category::Income => income[offset] += record.amount,
            Category::Expense => expense[offset] += record.amount,
        }
    }

    DailySeries {
        dates: first.iter_days().take(days).collect(),
        income,
        expense,
    }
}
