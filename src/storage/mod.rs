//! Storage layer for the ledger
//!
//! Provides the CSV record store, atomic file helpers and the audit trail
//! for table mutations.

pub mod file_io;
pub mod records;
pub mod sample;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use records::{record_row, RecordStore, StoreConfig, COLUMNS};
pub use sample::sample_records;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Storage coordinator: the record table plus its audit log
pub struct Storage {
    pub records: RecordStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance rooted at `paths`
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordStore::new(StoreConfig::new(paths.table_file())),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Name of the table as recorded in audit entries
    pub fn table_name(&self) -> String {
        self.records
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Write an entry to the audit log
    pub fn log(&self, entry: AuditEntry) -> Result<(), LedgerError> {
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("ledger");
        let storage = Storage::new(LedgerPaths::with_base_dir(base.clone())).unwrap();

        assert!(base.exists());
        assert_eq!(storage.records.path(), base.join("finance_data.csv"));
        assert_eq!(storage.table_name(), "finance_data.csv");
    }
}
