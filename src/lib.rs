//! Ledger CLI - personal finance ledger for the terminal
//!
//! This library records income and expense transactions in an append-only
//! CSV table, summarizes them over inclusive date ranges and resamples them
//! into daily series for charting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (records, money, categories, dates)
//! - `storage`: CSV record store and atomic file helpers
//! - `audit`: Audit logging of table mutations
//! - `services`: Range queries, daily resampling and the ledger service
//! - `input`: Console input validation and prompting
//! - `display` / `reports`: Terminal and CSV rendering
//! - `chart`: Chart sinks for daily series
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::config::LedgerPaths;
//! use ledger::services::LedgerService;
//! use ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::resolve(None)?)?;
//! let outcome = LedgerService::new(&storage).query("01-06-2024", "30-06-2024")?;
//! ```

pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
