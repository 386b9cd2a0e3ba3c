//! CSV export of aggregated views

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::aggregation::MonthlyTotal;

/// Export month-by-month totals with a `Date,Total` header
pub fn export_monthly_csv<W: Write>(totals: &[MonthlyTotal], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Total"])
        .map_err(|e| ExpenseError::Csv(e.to_string()))?;

    for total in totals {
        csv_writer
            .write_record([total.month.to_string(), total.total.to_string()])
            .map_err(|e| ExpenseError::Csv(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Csv(e.to_string()))
}
