//! View command
//!
//! Range report on stdout, with an optional chart and CSV export of the
//! matched rows.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::chart::{ChartSink, TerminalChart};
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::RangeReport;
use crate::services::{to_daily_series, LedgerService, RangeOutcome};
use crate::storage::Storage;

/// Arguments for `ledger view`
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// First day of the range (dd-mm-yyyy), inclusive
    #[arg(short, long)]
    pub start: String,

    /// Last day of the range (dd-mm-yyyy), inclusive
    #[arg(short, long)]
    pub end: String,

    /// Draw income and expenses over time
    #[arg(long)]
    pub plot: bool,

    /// Also write the matched rows to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `ledger view`
pub fn handle_view_command(storage: &Storage, settings: &Settings, args: ViewArgs) -> LedgerResult<()> {
    let service = LedgerService::new(storage);
    service.initialize()?;

    let outcome = service.query(&args.start, &args.end)?;
    let date_format = storage.records.date_format();
    print!(
        "{}",
        RangeReport::new(&outcome, date_format, &settings.currency_symbol).format_terminal()
    );

    if let Some(output) = &args.output {
        export_outcome(storage, settings, &outcome, output)?;
        println!("Exported {} transactions to: {}", outcome.records().len(), output.display());
    }

    if args.plot || settings.plot_by_default {
        plot_outcome(&outcome, &mut TerminalChart::new(date_format.clone()))?;
    }

    Ok(())
}

/// Hand the matched records to `sink` as daily series
///
/// Returns `false` without rendering when nothing matched.
pub fn plot_outcome(outcome: &RangeOutcome, sink: &mut dyn ChartSink) -> LedgerResult<bool> {
    if outcome.records().is_empty() {
        return Ok(false);
    }
    sink.render(&to_daily_series(outcome.records()))?;
    Ok(true)
}

/// Write the matched rows of `outcome` to `output` in the table layout
pub fn export_outcome(
    storage: &Storage,
    settings: &Settings,
    outcome: &RangeOutcome,
    output: &Path,
) -> LedgerResult<()> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Io(format!("Failed to create file {}: {}", output.display(), e))
    })?;

    RangeReport::new(outcome, storage.records.date_format(), &settings.currency_symbol)
        .export_csv(BufWriter::new(file))
}
