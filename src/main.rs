use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger::chart::TerminalChart;
use ledger::cli::{handle_add_command, handle_view_command, run_menu, AddArgs, ViewArgs};
use ledger::config::{LedgerPaths, Settings};
use ledger::input::Prompter;
use ledger::services::LedgerService;
use ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "Ledger CLI records income and expenses in a CSV table, \
                  summarizes any date range and charts daily totals in the \
                  terminal. Run without a command for the interactive menu."
)]
struct Cli {
    /// Directory holding the ledger table, settings and audit log
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger table if it does not exist
    Init,

    /// Add a transaction (missing fields are prompted for)
    Add(AddArgs),

    /// Show transactions and totals within a date range
    View(ViewArgs),

    /// Append the sample transactions
    Seed,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Initialize paths and settings
    let paths = LedgerPaths::resolve(cli.data_dir.as_deref())?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init) => {
            let created = LedgerService::new(&storage).initialize()?;
            settings.save(&paths)?;
            if created {
                println!("Initialized ledger at: {}", storage.records.path().display());
            } else {
                println!("Ledger already initialized at: {}", storage.records.path().display());
            }
        }
        Some(Commands::Add(args)) => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
            handle_add_command(&storage, args, &mut prompter, today)?;
        }
        Some(Commands::View(args)) => {
            handle_view_command(&storage, &settings, args)?;
        }
        Some(Commands::Seed) => {
            let count = LedgerService::new(&storage).seed()?;
            println!("Sample data added ({} records).", count);
        }
        Some(Commands::Config) => {
            println!("Ledger CLI Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger table:   {}", paths.table_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Plot by default: {}", settings.plot_by_default);
            println!("  Date format:     {}", storage.records.date_format().hint());
        }
        None => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
            let mut chart = TerminalChart::new(storage.records.date_format().clone());
            run_menu(&storage, &settings, &mut prompter, &mut chart, today)?;
        }
    }

    Ok(())
}
