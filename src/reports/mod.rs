//! Reports module for the expense tracker
//!
//! Aggregations over a ledger snapshot, budget evaluation, the monthly
//! dashboard built from both, and CSV export.

pub mod aggregation;
pub mod budget_status;
pub mod dashboard;
pub mod export;

pub use aggregation::{
    category_breakdown, category_share, cumulative_trend, filter_by_month, monthly_summary,
    total_amount, MonthlyTotal, TrendPoint,
};
pub use budget_status::{evaluate, BudgetStatus};
pub use dashboard::DashboardReport;
pub use export::export_monthly_csv;
