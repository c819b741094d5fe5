//! Business logic layer
//!
//! Range queries and daily resampling are pure functions over loaded
//! records; `LedgerService` wires them to storage.

pub mod ledger;
pub mod query;
pub mod resample;

pub use ledger::LedgerService;
pub use query::{filter, filter_range, DateRange, RangeOutcome, RangeSummary, Totals};
pub use resample::{to_daily_series, DailySeries};
