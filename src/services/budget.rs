//! Budget service
//!
//! Reads and writes the per-user spending limit and compares it against a
//! month's expenses.

use tracing::debug;

use crate::error::ExpenseResult;
use crate::models::{BudgetStatus, UserId};
use crate::storage::Storage;

/// Service for budget limits
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the limit; returns `false` if the user doesn't exist
    pub fn set_user_budget(&self, user_id: UserId, limit: f64) -> ExpenseResult<bool> {
        self.storage.users().set_budget_limit(user_id, limit)
    }

    /// The limit, or 0 for an unknown user
    pub fn get_user_budget(&self, user_id: UserId) -> ExpenseResult<f64> {
        self.storage.users().get_budget_limit(user_id)
    }

    /// Limit versus spending for one month of one year
    pub fn budget_status(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
    ) -> ExpenseResult<BudgetStatus> {
        let limit = self.get_user_budget(user_id)?;
        let spent = self
            .storage
            .expenses()
            .fetch_by_year_month(user_id, year, month)?;

        let status = BudgetStatus {
            year,
            month,
            limit,
            spent,
        };
        debug!(user_id = %user_id, year, month, limit, spent, "Computed budget status");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewExpense, NewUser};
    use chrono::NaiveDate;

    fn setup() -> (Storage, UserId) {
        let storage = Storage::open_in_memory().unwrap();
        let user = storage
            .users()
            .add_user(&NewUser::new("Ada", "ada@example.com", "pw"))
            .unwrap();
        (storage, user.id)
    }

    #[test]
    fn test_set_and_get_budget() {
        let (storage, user_id) = setup();
        let service = BudgetService::new(&storage);

        assert_eq!(service.get_user_budget(user_id).unwrap(), 0.0);
        assert!(service.set_user_budget(user_id, 250.0).unwrap());
        assert_eq!(service.get_user_budget(user_id).unwrap(), 250.0);
        assert_eq!(service.get_user_budget(UserId::new(404)).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_limit_is_stored() {
        let (storage, user_id) = setup();
        let service = BudgetService::new(&storage);

        assert!(service.set_user_budget(user_id, -1.0).unwrap());
        assert_eq!(service.get_user_budget(user_id).unwrap(), -1.0);
    }

    #[test]
    fn test_budget_status() {
        let (storage, user_id) = setup();
        let service = BudgetService::new(&storage);
        service.set_user_budget(user_id, 100.0).unwrap();

        let expenses = storage.expenses();
        for (day, amount) in [(1, 60.0), (15, 50.0)] {
            expenses
                .insert_expense(
                    &NewExpense::new(user_id, "Food", amount)
                        .on(NaiveDate::from_ymd_opt(2025, 3, day).unwrap()),
                )
                .unwrap();
        }
        expenses
            .insert_expense(
                &NewExpense::new(user_id, "Food", 500.0)
                    .on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            )
            .unwrap();

        let status = service.budget_status(user_id, 2025, 3).unwrap();
        assert_eq!(status.spent, 110.0);
        assert!(status.is_over_budget());
        assert_eq!(status.remaining(), -10.0);

        let quiet = service.budget_status(user_id, 2025, 4).unwrap();
        assert_eq!(quiet.spent, 0.0);
        assert!(!quiet.is_over_budget());

        assert!(service.budget_status(user_id, 2025, 13).unwrap_err().is_validation());
    }
}
