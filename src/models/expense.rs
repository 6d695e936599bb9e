//! Expense model
//!
//! Dates are calendar dates with no time or zone. They are persisted as
//! `YYYY-MM-DD` text, which keeps text ordering and date ordering identical.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, UserId};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Owning user (not enforced by the store)
    pub user_id: UserId,

    pub date: NaiveDate,

    /// Free-text category
    pub category: String,

    pub amount: f64,

    #[serde(default)]
    pub description: String,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: UserId,
    /// Defaults to today when omitted
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewExpense {
    /// Create an undated expense; the store fills in today's date
    pub fn new(user_id: UserId, category: impl Into<String>, amount: f64) -> Self {
        Self {
            user_id,
            date: None,
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update of an expense
///
/// Only fields that are `Some` are written. A present zero amount or empty
/// string is a real value and is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}
