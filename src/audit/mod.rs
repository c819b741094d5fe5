//! Audit logging for the ledger
//!
//! Records every mutation of the ledger table (initialize, append, seed) in
//! an append-only JSON-lines file next to the table.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::append("finance_data.csv", &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
