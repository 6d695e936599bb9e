//! Expense service
//!
//! Expense entry, editing, listing, and the aggregate reports. Everything is
//! a single call into the expense repository; an absent date is left for the
//! repository to fill in.

use crate::error::ExpenseResult;
use crate::models::{
    CategoryTotal, Expense, ExpenseId, ExpenseUpdate, MonthlyTotal, NewExpense, UserId,
};
use crate::storage::Storage;

/// Service for expenses and spending reports
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense; an absent date is filled in by the store
    pub fn add_expense(&self, input: NewExpense) -> ExpenseResult<Expense> {
        self.storage.expenses().insert_expense(&input)
    }

    /// All of a user's expenses, newest first
    pub fn get_expenses(&self, user_id: UserId) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses().fetch_all_expenses(user_id)
    }

    pub fn filter_expenses_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> ExpenseResult<Vec<Expense>> {
        self.storage
            .expenses()
            .filter_by_category(user_id, category)
    }

    /// Total for a month number such as `"3"`, across all years
    pub fn get_total_by_month(&self, user_id: UserId, month: &str) -> ExpenseResult<f64> {
        self.storage.expenses().fetch_by_month(user_id, month)
    }

    pub fn get_total_by_year(&self, user_id: UserId, year: i32) -> ExpenseResult<f64> {
        self.storage.expenses().fetch_by_year(user_id, year)
    }

    pub fn get_category_summary(&self, user_id: UserId) -> ExpenseResult<Vec<CategoryTotal>> {
        self.storage.expenses().fetch_category_summary(user_id)
    }

    pub fn get_monthly_summary(&self, user_id: UserId) -> ExpenseResult<Vec<MonthlyTotal>> {
        self.storage.expenses().fetch_monthly_summary(user_id)
    }

    /// Delete any expense by id; `false` if it didn't exist
    pub fn delete_expense(&self, expense_id: ExpenseId) -> ExpenseResult<bool> {
        self.storage.expenses().delete_expense_by_id(expense_id)
    }

    /// Apply the fields present in `update`
    pub fn update_expense(
        &self,
        expense_id: ExpenseId,
        update: ExpenseUpdate,
    ) -> ExpenseResult<bool> {
        self.storage
            .expenses()
            .update_expense_by_id(expense_id, &update)
    }
}
