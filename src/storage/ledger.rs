//! Ledger store backed by one CSV file per owner
//!
//! Files carry a `Date,Description,Amount,Category` header and one row per
//! expense. Every mutation rewrites the whole file atomically.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Ledger, Money, Owner};

use super::file_io::write_atomic;

/// Column names, in the order they are written
pub const COLUMNS: [&str; 4] = ["Date", "Description", "Amount", "Category"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Persistence contract for owner-scoped ledgers
///
/// Implementations assume at most one writer per owner at a time.
pub trait LedgerStore {
    /// Read all records for `owner`; an owner with no data has an empty ledger
    fn load(&self, owner: &Owner) -> ExpenseResult<Ledger>;

    /// Persist `record` as the new final element of the owner's ledger
    fn append(&self, owner: &Owner, record: ExpenseRecord) -> ExpenseResult<()>;

    /// Remove the record at `position` in the currently persisted order
    fn delete_at(&self, owner: &Owner, position: usize) -> ExpenseResult<ExpenseRecord>;
}

/// Raw row as read from the file, converted field by field afterwards
#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
}

/// CSV-file ledger store rooted at a data directory
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    data_dir: PathBuf,
}

impl CsvLedgerStore {
    /// Create a store keeping its files in `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the file holding `owner`'s ledger
    pub fn path_for(&self, owner: &Owner) -> PathBuf {
        self.data_dir.join(owner.storage_file_name())
    }

    fn save(&self, owner: &Owner, ledger: &Ledger) -> ExpenseResult<()> {
        let path = self.path_for(owner);

        write_atomic(&path, |writer| {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);

            csv_writer
                .write_record(COLUMNS)
                .map_err(|e| write_error(&path, e))?;

            for record in ledger {
                let date = record.date.format(DATE_FORMAT).to_string();
                let amount = record.amount.to_string();
                csv_writer
                    .write_record([
                        date.as_str(),
                        record.description.as_str(),
                        amount.as_str(),
                        record.category.as_str(),
                    ])
                    .map_err(|e| write_error(&path, e))?;
            }

            csv_writer.flush().map_err(|e| {
                ExpenseError::Storage(format!("Failed to flush {}: {}", path.display(), e))
            })
        })
    }
}

impl LedgerStore for CsvLedgerStore {
    fn load(&self, owner: &Owner) -> ExpenseResult<Ledger> {
        let path = self.path_for(owner);

        if !path.exists() {
            return Ok(Ledger::new());
        }

        let file = File::open(&path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| ExpenseError::Storage(format!("Failed to read {}: {}", path.display(), e)))?
            .clone();

        // A zero-byte file has no header row and no data
        if headers.iter().all(|h| h.is_empty()) {
            return Ok(Ledger::new());
        }

        for column in COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ExpenseError::Storage(format!(
                    "{} is missing the '{}' column",
                    path.display(),
                    column
                )));
            }
        }

        let mut ledger = Ledger::new();
        for (index, row) in reader.deserialize::<LedgerRow>().enumerate() {
            // Line numbers count the header as line 1
            let line = index + 2;
            let row = row.map_err(|e| {
                ExpenseError::Storage(format!("{} line {}: {}", path.display(), line, e))
            })?;
            let record = parse_row(row).map_err(|reason| {
                ExpenseError::Storage(format!("{} line {}: {}", path.display(), line, reason))
            })?;
            ledger.push(record);
        }

        Ok(ledger)
    }

    fn append(&self, owner: &Owner, record: ExpenseRecord) -> ExpenseResult<()> {
        if record.amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Expense amount must not be negative (got {})",
                record.amount
            )));
        }
        if record.amount > Money::MAX_PARSED {
            return Err(ExpenseError::Validation(format!(
                "Expense amount {} is above the limit of {}",
                record.amount,
                Money::MAX_PARSED
            )));
        }

        let mut ledger = self.load(owner)?;
        ledger.push(record);
        self.save(owner, &ledger)
    }

    fn delete_at(&self, owner: &Owner, position: usize) -> ExpenseResult<ExpenseRecord> {
        let mut ledger = self.load(owner)?;
        let len = ledger.len();

        let removed = ledger.remove(position).ok_or_else(|| {
            ExpenseError::index(i64::try_from(position).unwrap_or(i64::MAX), len)
        })?;

        self.save(owner, &ledger)?;
        Ok(removed)
    }
}

fn write_error(path: &std::path::Path, e: csv::Error) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to write {}: {}", path.display(), e))
}

fn parse_row(row: LedgerRow) -> Result<ExpenseRecord, String> {
    let date = parse_date(&row.date)?;

    let amount = Money::parse(&row.amount).map_err(|e| e.to_string())?;
    if amount.is_negative() {
        return Err(format!("negative amount {}", amount));
    }

    let category = row
        .category
        .parse::<Category>()
        .map_err(|e| e.to_string())?;

    Ok(ExpenseRecord::new(date, row.description, amount, category))
}

/// Parse a stored date, accepting plain dates and midnight timestamps
fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| format!("invalid date '{}'", raw))
}
