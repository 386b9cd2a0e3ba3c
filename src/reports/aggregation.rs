//! Aggregations over a ledger snapshot
//!
//! Pure functions: nothing here touches storage, and an empty input always
//! yields an empty result or a zero total.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, ExpenseRecord, Money, YearMonth};

/// One point of the running-total series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub cumulative: Money,
}

/// Total spent in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Money,
}

/// Records dated within `month`, in their original relative order
pub fn filter_by_month(records: &[ExpenseRecord], month: YearMonth) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| month.contains(r.date))
        .cloned()
        .collect()
}

/// Sum of all amounts, saturating rather than wrapping on overflow
pub fn total_amount(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Amount per category; categories without records are left out
pub fn category_breakdown(records: &[ExpenseRecord]) -> BTreeMap<Category, Money> {
    let mut breakdown = BTreeMap::new();
    for record in records {
        *breakdown.entry(record.category).or_insert_with(Money::zero) += record.amount;
    }
    breakdown
}

/// Running total after each record, ordered by date
///
/// Records sharing a date keep their original relative order.
pub fn cumulative_trend(records: &[ExpenseRecord]) -> Vec<TrendPoint> {
    let mut sorted: Vec<&ExpenseRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut running = Money::zero();
    sorted
        .into_iter()
        .map(|r| {
            running += r.amount;
            TrendPoint {
                date: r.date,
                cumulative: running,
            }
        })
        .collect()
}

/// Totals for every month that has at least one record, oldest first
pub fn monthly_summary(records: &[ExpenseRecord]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for record in records {
        *by_month
            .entry(YearMonth::of(record.date))
            .or_insert_with(Money::zero) += record.amount;
    }

    by_month
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Percentage of `total` that `amount` represents, 0 when `total` is zero
pub fn category_share(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        (amount.cents() as f64 / total.cents() as f64) * 100.0
    }
}
