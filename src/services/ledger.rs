//! Ledger service
//!
//! Ties the record store to the audit log and exposes the operations the
//! command line drives: initialize, add, seed and range queries.

use tracing::info;

use crate::audit::AuditEntry;
use crate::error::LedgerResult;
use crate::models::Record;
use crate::storage::{sample_records, Storage};

use super::query::{self, DateRange, RangeOutcome};

/// Service for ledger operations
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Ensure the table exists; returns `true` if it was (re)created
    pub fn initialize(&self) -> LedgerResult<bool> {
        let created = self.storage.records.initialize()?;
        if created {
            self.storage
                .log(AuditEntry::initialize(self.storage.table_name()))?;
        }
        Ok(created)
    }

    /// Append a record (initializing the table first if needed)
    pub fn add(&self, record: &Record) -> LedgerResult<()> {
        self.initialize()?;
        self.storage.records.append(record)?;
        self.storage
            .log(AuditEntry::append(self.storage.table_name(), record))?;

        info!(
            date = %record.date,
            amount = %record.amount,
            category = %record.category,
            "entry added"
        );
        Ok(())
    }

    /// Append the sample fixture; returns how many records were written
    pub fn seed(&self) -> LedgerResult<usize> {
        self.initialize()?;
        let records = sample_records();
        self.storage.records.append_all(&records)?;
        self.storage
            .log(AuditEntry::seed(self.storage.table_name(), records.len()))?;

        info!(count = records.len(), "sample data added");
        Ok(records.len())
    }

    /// Load everything and filter by textual bounds in the table's date format
    pub fn query(&self, start: &str, end: &str) -> LedgerResult<RangeOutcome> {
        let records = self.storage.records.load_all()?;
        query::filter(&records, start, end, self.storage.records.date_format())
    }

    /// Same as [`LedgerService::query`] for bounds that are already parsed
    pub fn query_range(&self, range: DateRange) -> LedgerResult<RangeOutcome> {
        let records = self.storage.records.load_all()?;
        Ok(query::filter_range(&records, range))
    }
}
