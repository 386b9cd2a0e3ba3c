//! Classification of a period's spending against its budget

use std::fmt;

use crate::models::Money;

/// How spending compares to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At or below 80% of the budget
    Ok,
    /// Above 80% of the budget but not over it
    Warning,
    /// Over budget by `overage`
    Exceeded { overage: Money },
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded { overage } => write!(f, "Exceeded by {}", overage),
        }
    }
}

/// Classify `total_spend` against a non-negative `budget`
///
/// The 80% threshold is exclusive: spending exactly 80% is still `Ok`.
pub fn evaluate(total_spend: Money, budget: Money) -> BudgetStatus {
    if total_spend > budget {
        return BudgetStatus::Exceeded {
            overage: total_spend - budget,
        };
    }

    // total > 0.8 * budget, in integer cents
    if i128::from(total_spend.cents()) * 5 > i128::from(budget.cents()) * 4 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    }
}
