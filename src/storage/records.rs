//! Record store backed by a CSV table
//!
//! The table has a fixed header `date,amount,category,description` and only
//! ever grows by appending rows. Row order is insertion order.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, DateFormat, Money, Record};

use super::file_io::write_atomic;

/// Column order of the ledger table
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Where the table lives and how its dates are written
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub date_format: DateFormat,
}

impl StoreConfig {
    /// Table at `path` using the default day-month-year format
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_format: DateFormat::default(),
        }
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}

/// Append-only store of records
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.config.date_format
    }

    /// Make sure the table exists with its header row
    ///
    /// Creates the file if it is missing. It is rewritten as a bare header
    /// when it holds nothing but whitespace, or a single line that is not
    /// the expected header. A file with data rows is left alone.
    /// Returns `true` when the file was (re)created.
    pub fn initialize(&self) -> LedgerResult<bool> {
        let path = self.path();

        match File::open(path) {
            Ok(file) => {
                if !needs_header(file).map_err(|e| storage_error("read", path, e))? {
                    debug!(path = %path.display(), "ledger table already initialized");
                    return Ok(false);
                }
                info!(path = %path.display(), "ledger table has no header, recreating it");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "creating ledger table");
            }
            Err(e) => return Err(storage_error("open", path, e)),
        }

        write_atomic(path, header_line().as_bytes())?;
        Ok(true)
    }

    /// Append one record to the end of the table
    pub fn append(&self, record: &Record) -> LedgerResult<()> {
        self.append_all(std::slice::from_ref(record))
    }

    /// Append records in order with a single flush
    ///
    /// The table must already exist; see [`RecordStore::initialize`].
    pub fn append_all(&self, records: &[Record]) -> LedgerResult<()> {
        let path = self.path();

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| storage_error("open", path, e))?;

        // A hand-edited table may lack the trailing newline
        if !ends_with_newline(&mut file).map_err(|e| storage_error("read", path, e))? {
            file.write_all(b"\n")
                .map_err(|e| storage_error("write", path, e))?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        for record in records {
            writer.write_record(record_row(record, &self.config.date_format))?;
        }
        writer
            .flush()
            .map_err(|e| storage_error("flush", path, e))?;

        let file = writer
            .into_inner()
            .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;
        file.sync_all()
            .map_err(|e| storage_error("sync", path, e))?;

        debug!(path = %path.display(), count = records.len(), "appended records");
        Ok(())
    }

    /// Read every record back in insertion order
    ///
    /// Any malformed row fails the whole load; nothing is skipped.
    pub fn load_all(&self) -> LedgerResult<Vec<Record>> {
        let path = self.path();
        let file = File::open(path).map_err(|e| storage_error("open", path, e))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        check_headers(&headers)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            records.push(self.parse_row(&row)?);
        }

        debug!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn parse_row(&self, row: &StringRecord) -> LedgerResult<Record> {
        // The header is record 0, so this is the 1-based data row
        let index = row.position().map(|p| p.record()).unwrap_or_default();
        let row_error = |msg: String| LedgerError::Format(format!("row {}: {}", index, msg));

        if row.len() < 3 || row.len() > COLUMNS.len() {
            return Err(row_error(format!(
                "expected {} columns, found {}",
                COLUMNS.len(),
                row.len()
            )));
        }

        let date = self
            .config
            .date_format
            .parse(&row[0])
            .map_err(|e| row_error(e.to_string()))?;
        let amount = Money::parse(&row[1]).map_err(|e| row_error(e.to_string()))?;
        let category: Category = row[2].parse().map_err(row_error)?;
        let description = row.get(3).unwrap_or_default().to_string();

        Ok(Record::new(date, amount, category, description))
    }
}

/// A record as table cells, in [`COLUMNS`] order
pub fn record_row(record: &Record, date_format: &DateFormat) -> [String; 4] {
    [
        date_format.format(record.date),
        record.amount.to_decimal_string(),
        record.category.as_str().to_string(),
        record.description.clone(),
    ]
}

fn header_line() -> String {
    format!("{}\n", COLUMNS.join(","))
}

fn check_headers(headers: &StringRecord) -> LedgerResult<()> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    if found != COLUMNS {
        return Err(LedgerError::Format(format!(
            "unexpected table header '{}', expected '{}'",
            found.join(","),
            COLUMNS.join(",")
        )));
    }
    Ok(())
}

/// True for a blank file, or one whose only line is not the header
fn needs_header(file: File) -> std::io::Result<bool> {
    let mut lines = BufReader::new(file).lines().filter(|line| match line {
        Ok(line) => !line.trim().is_empty(),
        Err(_) => true,
    });

    let Some(first) = lines.next().transpose()? else {
        return Ok(true);
    };
    if is_header(&first) {
        return Ok(false);
    }
    Ok(lines.next().transpose()?.is_none())
}

fn is_header(line: &str) -> bool {
    line.split(',').map(str::trim).eq(COLUMNS)
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> LedgerError {
    LedgerError::Storage(format!(
        "Failed to {} {}: {}",
        action,
        path.display(),
        err
    ))
}
