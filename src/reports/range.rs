//! Range Report
//!
//! Terminal and CSV rendering of a date range query.

use std::io::Write;

use csv::WriterBuilder;

use crate::display::format_record_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::DateFormat;
use crate::services::RangeOutcome;
use crate::storage::{record_row, COLUMNS};

pub const EMPTY_LEDGER_MESSAGE: &str = "No transactions found in the ledger.";
pub const NO_MATCHES_MESSAGE: &str = "No transactions found in the given date range.";

/// A range query outcome plus the formatting it is shown with
pub struct RangeReport<'a> {
    pub outcome: &'a RangeOutcome,
    pub date_format: &'a DateFormat,
    pub currency_symbol: &'a str,
}

impl<'a> RangeReport<'a> {
    pub fn new(outcome: &'a RangeOutcome, date_format: &'a DateFormat, currency_symbol: &'a str) -> Self {
        Self {
            outcome,
            date_format,
            currency_symbol,
        }
    }

    /// Human-readable report: matched rows and totals, or why there are none
    pub fn format_terminal(&self) -> String {
        let summary = match self.outcome {
            RangeOutcome::EmptyLedger => return format!("{}\n", EMPTY_LEDGER_MESSAGE),
            RangeOutcome::NoMatches(_) => return format!("{}\n", NO_MATCHES_MESSAGE),
            RangeOutcome::Matched(summary) => summary,
        };

        let symbol = self.currency_symbol;
        let mut output = format!(
            "Transactions from {} to {}\n",
            self.date_format.format(summary.range.start),
            self.date_format.format(summary.range.end)
        );
        output.push_str(&format_record_table(&summary.records, self.date_format, symbol));
        output.push('\n');
        output.push_str(&format!(
            "Total income: {}\n",
            summary.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total expense: {}\n",
            summary.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net savings: {}\n",
            summary.net.format_with_symbol(symbol)
        ));
        output
    }

    /// Matched rows in the ledger table layout (header included)
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer
            .write_record(COLUMNS)
            .map_err(|e| LedgerError::Io(format!("Failed to write export: {}", e)))?;

        for record in self.outcome.records() {
            csv_writer
                .write_record(record_row(record, self.date_format))
                .map_err(|e| LedgerError::Io(format!("Failed to write export: {}", e)))?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush export: {}", e)))?;
        Ok(())
    }
}
