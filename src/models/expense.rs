//! Expense record and ledger models
//!
//! A record carries no identifier of its own: it is addressed by its
//! position in the owner's ledger as loaded. Positions are only meaningful
//! for the snapshot they were read from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single dated, categorized expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Free text, may be empty for the single-user ledger
    #[serde(default)]
    pub description: String,

    /// Amount spent, never negative once stored
    pub amount: Money,

    /// Category the expense is filed under
    pub category: Category,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category,
        }
    }
}

/// The ordered expenses of one owner, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `position`, if any
    pub fn get(&self, position: usize) -> Option<&ExpenseRecord> {
        self.records.get(position)
    }

    /// All records as a slice, in stored order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    /// Append a record as the new final element
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Remove and return the record at `position`, keeping the rest in order
    pub fn remove(&mut self, position: usize) -> Option<ExpenseRecord> {
        (position < self.records.len()).then(|| self.records.remove(position))
    }
}

impl From<Vec<ExpenseRecord>> for Ledger {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            format!("item {}", day),
            Money::from_cents(cents),
            Category::Food,
        )
    }

    #[test]
    fn test_push_and_get() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.push(record(1, 100));
        ledger.push(record(2, 200));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().amount.cents(), 200);
        assert!(ledger.get(2).is_none());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut ledger = Ledger::from(vec![record(1, 100), record(2, 200), record(3, 300)]);

        let removed = ledger.remove(1).unwrap();
        assert_eq!(removed, record(2, 200));
        assert_eq!(ledger.records(), &[record(1, 100), record(3, 300)]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut ledger = Ledger::from(vec![record(1, 100)]);
        assert!(ledger.remove(1).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(record(5, 5000)).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["amount"], "50.00");
        assert_eq!(json["category"], "Food");
    }
}
