//! Monthly dashboard
//!
//! Collects everything shown for one month: total spend and budget status,
//! the per-category breakdown, the cumulative spending trend, and the
//! all-time month-by-month totals.

use std::collections::BTreeMap;

use crate::models::{Category, Ledger, Money, YearMonth};

use super::aggregation::{
    category_breakdown, category_share, cumulative_trend, filter_by_month, monthly_summary,
    total_amount, MonthlyTotal, TrendPoint,
};
use super::budget_status::{evaluate, BudgetStatus};

/// Dashboard for one month of a ledger
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Month the dashboard covers
    pub month: YearMonth,
    /// Budget the month was evaluated against
    pub budget: Money,
    /// Spending within the month
    pub total_spend: Money,
    /// Number of expenses within the month
    pub expense_count: usize,
    /// Budget classification of `total_spend`
    pub status: BudgetStatus,
    /// Spending per category within the month
    pub breakdown: BTreeMap<Category, Money>,
    /// Running total within the month
    pub trend: Vec<TrendPoint>,
    /// Totals for every month in the ledger
    pub monthly_totals: Vec<MonthlyTotal>,
}

impl DashboardReport {
    /// Build the dashboard for `month` from a ledger snapshot
    pub fn generate(ledger: &Ledger, month: YearMonth, budget: Money) -> Self {
        let in_month = filter_by_month(ledger.records(), month);
        let total_spend = total_amount(&in_month);

        Self {
            month,
            budget,
            total_spend,
            expense_count: in_month.len(),
            status: evaluate(total_spend, budget),
            breakdown: category_breakdown(&in_month),
            trend: cumulative_trend(&in_month),
            monthly_totals: monthly_summary(ledger.records()),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Dashboard: {}\n",
            self.month.format_friendly()
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spend this Month: {}\n",
            self.total_spend.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Monthly Budget:         {}\n",
            self.budget.format_with_symbol(currency)
        ));

        match self.status {
            BudgetStatus::Exceeded { overage } => output.push_str(&format!(
                "Budget Exceeded by {}\n",
                overage.format_with_symbol(currency)
            )),
            BudgetStatus::Warning => {
                output.push_str("Warning: You have used 80% of your budget.\n")
            }
            BudgetStatus::Ok => {}
        }

        if self.expense_count == 0 {
            output.push_str("\nNo expenses recorded this month.\n");
        } else {
            output.push_str(&format!("\nExpense Breakdown ({} expenses)\n", self.expense_count));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for (category, amount) in &self.breakdown {
                output.push_str(&format!(
                    "  {:<20} {:>16} {:>7.1}%\n",
                    category.as_str(),
                    amount.format_with_symbol(currency),
                    category_share(*amount, self.total_spend)
                ));
            }

            output.push_str("\nSpending Trend\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for point in &self.trend {
                output.push_str(&format!(
                    "  {}  {:>16}\n",
                    point.date.format("%Y-%m-%d"),
                    point.cumulative.format_with_symbol(currency)
                ));
            }
        }

        output.push_str("\nMonthly Spend Over Time\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.monthly_totals.is_empty() {
            output.push_str("  (no expenses)\n");
        }
        for total in &self.monthly_totals {
            output.push_str(&format!(
                "  {}  {:>16}\n",
                total.month,
                total.total.format_with_symbol(currency)
            ));
        }

        output
    }
}
