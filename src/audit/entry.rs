//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// Mutations of the ledger table that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Table created or recreated with its header
    Initialize,
    /// A single record appended
    Append,
    /// The sample fixture appended
    Seed,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Initialize => write!(f, "INITIALIZE"),
            Operation::Append => write!(f, "APPEND"),
            Operation::Seed => write!(f, "SEED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Table the operation touched
    pub table: String,

    /// The appended record, for single appends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,

    /// Number of records written
    pub count: usize,
}

impl AuditEntry {
    pub fn initialize(table: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Initialize,
            table: table.into(),
            record: None,
            count: 0,
        }
    }

    pub fn append(table: impl Into<String>, record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            table: table.into(),
            record: Some(record.clone()),
            count: 1,
        }
    }

    pub fn seed(table: impl Into<String>, count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Seed,
            table: table.into(),
            record: None,
            count,
        }
    }
}
