//! Interactive menu
//!
//! Runs when `ledger` is started without a command. Failed actions are
//! reported and the menu is shown again; input that is closed or cannot be
//! read ends the loop early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::chart::ChartSink;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::input::Prompter;
use crate::reports::RangeReport;
use crate::services::{DateRange, LedgerService};
use crate::storage::Storage;

use super::entry::{handle_add_command, AddArgs};
use super::view::plot_outcome;

const MENU: &str = "\n1. Add a new transaction\n\
                    2. View transactions and summary within a date range\n\
                    3. Add sample data\n\
                    4. Exit";

/// Show the menu until the user exits
pub fn run_menu<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
    chart: &mut dyn ChartSink,
    today: NaiveDate,
) -> LedgerResult<()> {
    LedgerService::new(storage).initialize()?;

    loop {
        prompter.say(MENU)?;
        let choice = prompter.line("Enter your choice (1-4): ")?;

        let result = match choice.as_str() {
            "1" => handle_add_command(storage, AddArgs::default(), prompter, today).map(|_| ()),
            "2" => view_range(storage, settings, prompter, chart),
            "3" => seed(storage, prompter),
            "4" => {
                prompter.say("Exiting...")?;
                return Ok(());
            }
            _ => prompter.say("Invalid choice. Please enter 1, 2, 3 or 4."),
        };

        match result {
            Err(err @ LedgerError::Input(_)) => return Err(err),
            Err(err) => prompter.say(err)?,
            Ok(()) => {}
        }
    }
}

fn view_range<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
    chart: &mut dyn ChartSink,
) -> LedgerResult<()> {
    let format = storage.records.date_format();
    let start = prompter.required_date(&format!("Enter the start date ({}): ", format.hint()), format)?;
    let end = prompter.required_date(&format!("Enter the end date ({}): ", format.hint()), format)?;

    let outcome = LedgerService::new(storage).query_range(DateRange::new(start, end))?;
    prompter.say(
        RangeReport::new(&outcome, format, &settings.currency_symbol)
            .format_terminal()
            .trim_end(),
    )?;

    if !outcome.records().is_empty() && prompter.confirm("Do you want to see a plot? (y/n): ")? {
        plot_outcome(&outcome, chart)?;
    }
    Ok(())
}

fn seed<R: BufRead, W: Write>(storage: &Storage, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
    let count = LedgerService::new(storage).seed()?;
    prompter.say(format!("Sample data added ({} records).", count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::services::DailySeries;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CountingSink {
        renders: usize,
    }

    impl ChartSink for CountingSink {
        fn render(&mut self, _series: &DailySeries) -> LedgerResult<()> {
            self.renders += 1;
            Ok(())
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        (temp_dir, storage)
    }

    fn run(storage: &Storage, script: &str, sink: &mut CountingSink) -> (LedgerResult<()>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
            run_menu(
                storage,
                &Settings::default(),
                &mut prompter,
                sink,
                NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            )
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_view_and_plot() {
        let (_temp_dir, storage) = create_test_storage();
        let mut sink = CountingSink::default();
        let script = "1\n05-06-2024\n500\nE\nrent\n\
                      1\n01-06-2024\n1200\nI\nbonus\n\
                      2\n01-06-2024\n05-06-2024\ny\n\
                      4\n";

        let (result, transcript) = run(&storage, script, &mut sink);

        result.unwrap();
        assert_eq!(transcript.matches("Entry added successfully.").count(), 2);
        assert!(transcript.contains("Net savings: $700.00"));
        assert!(transcript.ends_with("Exiting...\n"));
        assert_eq!(sink.renders, 1);
    }

    #[test]
    fn test_empty_ledger_view_does_not_offer_plot() {
        let (_temp_dir, storage) = create_test_storage();
        let mut sink = CountingSink::default();

        let (result, transcript) = run(&storage, "2\n01-06-2024\n05-06-2024\n4\n", &mut sink);

        result.unwrap();
        assert!(transcript.contains("No transactions found in the ledger."));
        assert!(!transcript.contains("Do you want to see a plot?"));
    }

    #[test]
    fn test_invalid_choice_and_seed() {
        let (_temp_dir, storage) = create_test_storage();
        let mut sink = CountingSink::default();

        let (result, transcript) = run(&storage, "9\n3\n4\n", &mut sink);

        result.unwrap();
        assert!(transcript.contains("Invalid choice."));
        assert!(transcript.contains("Sample data added (25 records)."));
        assert_eq!(storage.records.load_all().unwrap().len(), 25);
    }

    #[test]
    fn test_closed_input_ends_the_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let mut sink = CountingSink::default();

        let (result, _) = run(&storage, "1\n", &mut sink);
        assert!(matches!(result, Err(LedgerError::Input(_))));
    }

    #[test]
    fn test_unreadable_input_ends_the_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let mut sink = CountingSink::default();
        let mut output = Vec::new();

        let mut prompter = Prompter::new(Cursor::new(vec![0xff, b'\n', b'4', b'\n']), &mut output);
        let result = run_menu(
            &storage,
            &Settings::default(),
            &mut prompter,
            &mut sink,
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        );

        assert!(matches!(result, Err(LedgerError::Input(_))));
    }
}
