//! Transaction categories.
//!
//! Labels arrive from an open, case-insensitive vocabulary. Parsing folds
//! them onto a closed set so grouping by category is exhaustive; anything
//! unrecognised lands in [`Category::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag for transactions and budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    /// General income.
    Income,
    /// Salary credit.
    Salary,
    /// Freelance or contract work.
    Freelance,
    /// Investment returns.
    Investment,
    /// Gifts received.
    Gift,
    /// Food and groceries.
    Food,
    /// Shopping.
    Shopping,
    /// Rent and housing.
    Housing,
    /// Fuel, fares and other transport.
    Transport,
    /// Entertainment.
    Entertainment,
    /// Utility bills.
    Utilities,
    /// Medical and health costs.
    Healthcare,
    /// Personal spending.
    Personal,
    /// Fallback bucket for anything else.
    Other,
}

impl Category {
    /// Every category, in grouping order.
    pub const ALL: [Self; 14] = [
        Self::Income,
        Self::Salary,
        Self::Freelance,
        Self::Investment,
        Self::Gift,
        Self::Food,
        Self::Shopping,
        Self::Housing,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Healthcare,
        Self::Personal,
        Self::Other,
    ];

    /// Resolves a free-form label, falling back to [`Category::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::parse_known(label).unwrap_or(Self::Other)
    }

    /// Resolves a free-form label, returning `None` for unknown labels.
    #[must_use]
    pub fn parse_known(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        let category = match normalized.as_str() {
            "income" => Self::Income,
            "salary" => Self::Salary,
            "freelance" => Self::Freelance,
            "investment" | "investments" => Self::Investment,
            "gift" | "gifts" => Self::Gift,
            "food" | "groceries" | "food & groceries" => Self::Food,
            "shopping" => Self::Shopping,
            "housing" | "rent" => Self::Housing,
            "transport" | "transportation" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "utilities" => Self::Utilities,
            "healthcare" | "health" => Self::Healthcare,
            "personal" => Self::Personal,
            "other" => Self::Other,
            _ => return None,
        };
        Some(category)
    }

    /// Canonical lowercase name, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Investment => "investment",
            Self::Gift => "gift",
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Housing => "housing",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Personal => "personal",
            Self::Other => "other",
        }
    }

    /// Human-facing name (`"Food"`).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Gift => "Gift",
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Housing => "Housing",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
