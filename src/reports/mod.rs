//! Reports
//!
//! Rendering of query results for the terminal and for export.

pub mod range;

pub use range::{RangeReport, EMPTY_LEDGER_MESSAGE, NO_MATCHES_MESSAGE};
