//! Record display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{DateFormat, Record};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format records as a table, one row per record in the given order
pub fn format_record_table(records: &[Record], date_format: &DateFormat, currency: &str) -> String {
    if records.is_empty() {
        return "No transactions.\n".to_string();
    }

    let rows = records.iter().map(|record| RecordRow {
        date: date_format.format(record.date),
        amount: record.amount.format_with_symbol(currency),
        category: record.category.to_string(),
        description: record.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_table_contains_every_field() {
        let records = vec![Record::new(
            NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            Money::from_cents(50000),
            Category::Expense,
            "rent",
        )];

        let output = format_record_table(&records, &DateFormat::default(), "$");

        assert!(output.contains("Date"));
        assert!(output.contains("05-06-2024"));
        assert!(output.contains("$500.00"));
        assert!(output.contains("expense"));
        assert!(output.contains("rent"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_record_table(&[], &DateFormat::default(), "$");
        assert_eq!(output, "No transactions.\n");
    }
}
