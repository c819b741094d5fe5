//! Core data models for the ledger
//!
//! Records, their category and amount types, and the calendar date format
//! shared by the table and the input layer.

pub mod category;
pub mod date;
pub mod money;
pub mod record;

pub use category::Category;
pub use date::{DateFormat, DEFAULT_DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use record::Record;
