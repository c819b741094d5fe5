//! Sample data for trying out reports and charts

use chrono::NaiveDate;

use crate::models::{Category, Money, Record};

/// (day, month, units, category, description); all in 2024
const SAMPLE: &[(u32, u32, i64, Category, &str)] = &[
    (24, 7, 567, Category::Income, "tip"),
    (7, 7, 2000, Category::Income, "wage"),
    (2, 7, 2000, Category::Expense, "tour"),
    (15, 6, 1500, Category::Income, "freelance"),
    (10, 6, 300, Category::Expense, "groceries"),
    (5, 6, 500, Category::Expense, "rent"),
    (1, 6, 1200, Category::Income, "bonus"),
    (28, 5, 800, Category::Expense, "utilities"),
    (20, 5, 3000, Category::Income, "salary"),
    (15, 5, 450, Category::Expense, "transport"),
    (10, 5, 200, Category::Expense, "dining"),
    (5, 5, 1000, Category::Income, "investment"),
    (1, 5, 750, Category::Expense, "shopping"),
    (25, 4, 2500, Category::Income, "freelance"),
    (20, 4, 120, Category::Expense, "gym membership"),
    (15, 4, 1500, Category::Expense, "vacation"),
    (10, 4, 3000, Category::Income, "salary"),
    (5, 4, 600, Category::Expense, "medical bills"),
    (1, 4, 100, Category::Expense, "entertainment"),
    (25, 3, 4000, Category::Income, "bonus"),
    (20, 3, 900, Category::Expense, "car repair"),
    (15, 3, 2000, Category::Income, "freelance"),
    (10, 3, 350, Category::Expense, "groceries"),
    (5, 3, 1500, Category::Expense, "rent"),
    (1, 3, 2500, Category::Income, "salary"),
];

/// The fixed sample records, newest first
pub fn sample_records() -> Vec<Record> {
    SAMPLE
        .iter()
        .filter_map(|&(day, month, units, category, description)| {
            NaiveDate::from_ymd_opt(2024, month, day).map(|date| {
                Record::new(date, Money::from_units_cents(units, 0), category, description)
            })
        })
        .collect()
}
