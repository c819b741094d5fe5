//! Date range query
//!
//! Selects records between two inclusive dates and totals them by category.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Category, DateFormat, Money, Record};

/// Inclusive date bounds
///
/// A range whose start is after its end is valid and contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds, start first
    pub fn parse(start: &str, end: &str, format: &DateFormat) -> LedgerResult<Self> {
        Ok(Self::new(format.parse(start)?, format.parse(end)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

/// Income and expense sums over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut totals = Self::default();
        for record in records {
            match record.category {
                Category::Income => totals.income += record.amount,
                Category::Expense => totals.expense += record.amount,
            }
        }
        totals
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Records that fell inside a range, with their totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSummary {
    pub range: DateRange,
    /// Matching records in their original order
    pub records: Vec<Record>,
    pub total_income: Money,
    pub total_expense: Money,
    pub net: Money,
}

/// Result of a range query
///
/// "Nothing recorded yet" and "nothing in this range" are reported
/// differently, so they are separate variants rather than an empty summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeOutcome {
    /// The ledger holds no records at all
    EmptyLedger,
    /// Records exist but none fall inside the range
    NoMatches(DateRange),
    Matched(RangeSummary),
}

impl RangeOutcome {
    /// Matching records, empty unless the outcome is `Matched`
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Matched(summary) => &summary.records,
            _ => &[],
        }
    }

    pub fn summary(&self) -> Option<&RangeSummary> {
        match self {
            Self::Matched(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Filter `records` by textual bounds in `format`
///
/// Malformed bounds fail with a format error even when the ledger is empty.
pub fn filter(
    records: &[Record],
    start: &str,
    end: &str,
    format: &DateFormat,
) -> LedgerResult<RangeOutcome> {
    let range = DateRange::parse(start, end, format)?;
    Ok(filter_range(records, range))
}

/// Filter `records` by already parsed bounds
pub fn filter_range(records: &[Record], range: DateRange) -> RangeOutcome {
    if records.is_empty() {
        return RangeOutcome::EmptyLedger;
    }

    let selected: Vec<Record> = records
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect();

    if selected.is_empty() {
        return RangeOutcome::NoMatches(range);
    }

    let totals = Totals::from_records(&selected);
    RangeOutcome::Matched(RangeSummary {
        range,
        total_income: totals.income,
        total_expense: totals.expense,
        net: totals.net(),
        records: selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn record(day: u32, month: u32, units: i64, category: Category, description: &str) -> Record {
        Record::new(date(day, month), Money::from_units_cents(units, 0), category, description)
    }

    fn sample() -> Vec<Record> {
        vec![
            record(5, 6, 500, Category::Expense, "rent"),
            record(1, 6, 1200, Category::Income, "bonus"),
            record(28, 5, 800, Category::Expense, "utilities"),
            record(10, 6, 300, Category::Expense, "groceries"),
            record(5, 6, 40, Category::Income, "refund"),
        ]
    }

    #[test]
    fn test_end_to_end_example() {
        let records = vec![
            record(5, 6, 500, Category::Expense, "rent"),
            record(1, 6, 1200, Category::Income, "bonus"),
        ];

        let outcome = filter(&records, "01-06-2024", "05-06-2024", &DateFormat::default()).unwrap();
        let summary = outcome.summary().unwrap();

        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.total_income, Money::from_units_cents(1200, 0));
        assert_eq!(summary.total_expense, Money::from_units_cents(500, 0));
        assert_eq!(summary.net, Money::from_units_cents(700, 0));
    }

    #[test]
    fn test_bounds_are_inclusive_and_order_preserved() {
        let range = DateRange::new(date(1, 6), date(5, 6));
        let outcome = filter_range(&sample(), range);

        let descriptions: Vec<_> = outcome.records().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["rent", "bonus", "refund"]);
    }

    #[test]
    fn test_single_day_range() {
        let outcome = filter_range(&sample(), DateRange::new(date(5, 6), date(5, 6)));

        assert_eq!(outcome.records().len(), 2);
        assert!(outcome.records().iter().all(|r| r.date == date(5, 6)));
    }

    #[test]
    fn test_net_matches_income_minus_expense() {
        let outcome = filter_range(&sample(), DateRange::new(date(1, 1), date(31, 12)));
        let summary = outcome.summary().unwrap();

        assert_eq!(summary.total_income - summary.total_expense, summary.net);
        assert_eq!(summary.net, Money::from_units_cents(1240 - 1600, 0));
    }

    #[test]
    fn test_reversed_range_is_empty_not_error() {
        let outcome =
            filter(&sample(), "05-06-2024", "01-06-2024", &DateFormat::default()).unwrap();

        match outcome {
            RangeOutcome::NoMatches(range) => assert!(range.is_reversed()),
            other => panic!("expected NoMatches, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_ledger_is_distinct_from_no_matches() {
        let empty = filter_range(&[], DateRange::new(date(1, 6), date(5, 6)));
        assert_eq!(empty, RangeOutcome::EmptyLedger);

        let none = filter_range(&sample(), DateRange::new(date(1, 1), date(2, 1)));
        assert!(matches!(none, RangeOutcome::NoMatches(_)));
        assert!(none.records().is_empty());
    }

    #[test]
    fn test_malformed_bound_is_format_error() {
        let format = DateFormat::default();
        assert!(filter(&sample(), "2024/06/01", "05-06-2024", &format)
            .unwrap_err()
            .is_format());
        assert!(filter(&[], "01-06-2024", "tomorrow", &format)
            .unwrap_err()
            .is_format());
    }

    #[test]
    fn test_totals_of_nothing_are_zero() {
        let totals = Totals::from_records(&[]);
        assert!(totals.income.is_zero());
        assert!(totals.expense.is_zero());
        assert!(totals.net().is_zero());
    }
}
