//! Aggregate report rows

use serde::{Deserialize, Serialize};

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Total")]
    pub total: f64,
}

/// Total spending for one calendar month, all years folded together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Two-digit month, `"01"` through `"12"`
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Total")]
    pub total: f64,
}

/// Spending against the user's limit for one month of one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub year: i32,
    pub month: u32,
    pub limit: f64,
    pub spent: f64,
}

impl BudgetStatus {
    /// Limit minus spending; negative once the budget is exceeded
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    /// A zero limit means no budget was set, which is never exceeded
    pub fn is_over_budget(&self) -> bool {
        self.limit > 0.0 && self.spent > self.limit
    }

    /// Share of the limit spent, as a percentage
    pub fn percent_used(&self) -> Option<f64> {
        (self.limit > 0.0).then(|| self.spent / self.limit * 100.0)
    }
}
