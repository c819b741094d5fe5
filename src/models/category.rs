//! Transaction category
//!
//! A closed set: every record is either income or expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Expense,
}

/// Accepted spellings, checked in order; the first match wins
const LOOKUP: &[(&str, Category)] = &[
    ("i", Category::Income),
    ("e", Category::Expense),
    ("income", Category::Income),
    ("expense", Category::Expense),
];

impl Category {
    /// Resolve a single-letter code or full name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        LOOKUP
            .iter()
            .find(|(code, _)| *code == needle)
            .map(|(_, category)| *category)
    }

    /// Lowercase name as stored in the ledger table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the stored lowercase names (case-insensitive, no codes)
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}
