//! Add command
//!
//! Values given as flags are validated once and fail fast; anything left out
//! is asked for interactively until a valid answer comes back.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::Args;

use crate::error::LedgerResult;
use crate::input::{parse_amount, parse_category, parse_date, Prompter};
use crate::models::Record;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Arguments for `ledger add`
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Transaction date (dd-mm-yyyy, empty for today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Amount, e.g. "500" or "500.00"
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Category: I/income or E/expense
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Collect a record from flags and prompts, then append it
pub fn handle_add_command<R: BufRead, W: Write>(
    storage: &Storage,
    args: AddArgs,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> LedgerResult<Record> {
    let format = storage.records.date_format().clone();

    let date = match args.date {
        Some(date) => parse_date(&date, &format, today)?,
        None => prompter.date(&format, today)?,
    };
    let amount = match args.amount {
        Some(amount) => parse_amount(&amount)?,
        None => prompter.amount()?,
    };
    let category = match args.category {
        Some(category) => parse_category(&category)?,
        None => prompter.category()?,
    };
    let description = match args.description {
        Some(description) => description,
        None => prompter.description()?,
    };

    let record = Record::validated(date, amount, category, description)?;
    LedgerService::new(storage).add(&record)?;
    prompter.say("Entry added successfully.")?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Category, Money};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_add_from_flags_needs_no_input() {
        let (_temp_dir, storage) = create_test_storage();
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());

        let args = AddArgs {
            date: Some("05-06-2024".into()),
            amount: Some("500".into()),
            category: Some("E".into()),
            description: Some("rent".into()),
        };
        let record = handle_add_command(&storage, args, &mut prompter, today()).unwrap();

        assert_eq!(record.amount, Money::from_cents(50000));
        assert_eq!(record.category, Category::Expense);
        assert_eq!(storage.records.load_all().unwrap(), vec![record]);
    }

    #[test]
    fn test_add_prompts_for_missing_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let mut prompter = Prompter::new(Cursor::new(b"\nabc\n12.5\nincome\n".to_vec()), Vec::new());

        let args = AddArgs {
            description: Some(String::new()),
            ..AddArgs::default()
        };
        let record = handle_add_command(&storage, args, &mut prompter, today()).unwrap();

        assert_eq!(record.date, today());
        assert_eq!(record.amount, Money::from_cents(1250));
        assert_eq!(record.category, Category::Income);
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_bad_flag_fails_without_writing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());

        let args = AddArgs {
            date: Some("2024/06/01".into()),
            ..AddArgs::default()
        };
        let err = handle_add_command(&storage, args, &mut prompter, today()).unwrap_err();

        assert!(err.is_format());
        assert!(!storage.records.path().exists());
    }

    #[test]
    fn test_non_positive_amount_flag_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());

        let args = AddArgs {
            date: Some("05-06-2024".into()),
            amount: Some("-5".into()),
            ..AddArgs::default()
        };
        let err = handle_add_command(&storage, args, &mut prompter, today()).unwrap_err();
        assert!(err.is_validation());
    }
}
