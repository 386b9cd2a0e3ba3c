//! Expense category model
//!
//! Categories form a fixed set; free-form categories are not supported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Rent,
    Others,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Rent,
        Category::Others,
    ];

    /// Canonical name as stored in ledger files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(trimmed.to_string()))
    }
}

/// Error returned for a name outside the fixed category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" RENT ".parse::<Category>().unwrap(), Category::Rent);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Groceries"));
        assert!(err.to_string().contains("Utilities"));
    }
}
