//! Expense display formatting

use crate::models::{Expense, User};

use super::report::{format_amount, truncate};

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:>8} {} {:16} {:>12}  {}",
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 16),
        format_amount(expense.amount, symbol),
        truncate(&expense.description, 30)
    )
}

/// Format a list of expenses as a register with a total line
pub fn format_expense_register(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = format!(
        "{:>8} {:10} {:16} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(70));
    output.push_str(&format!(
        "\n{:>37} {:>12}\n",
        "Total",
        format_amount(total, symbol)
    ));

    output
}

/// Account summary shown after login or lookup
pub fn format_user_details(user: &User, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("User:         {}\n", user.id));
    output.push_str(&format!("Name:         {}\n", user.name));
    output.push_str(&format!("Email:        {}\n", user.email));
    if let Some(gender) = &user.gender {
        output.push_str(&format!("Gender:       {}\n", gender));
    }
    output.push_str(&format!(
        "Budget limit: {}\n",
        format_amount(user.budget_limit, symbol)
    ));
    output.push_str(&format!(
        "Recovery:     {}\n",
        if user.has_recovery_secret() { "secret set" } else { "none" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, UserId};
    use chrono::NaiveDate;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            user_id: UserId::new(1),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            category: "Groceries".into(),
            amount,
            description: "weekly shop".into(),
        }
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&expense(4, 23.1), "$");
        assert!(row.contains("exp-4"));
        assert!(row.contains("2025-03-10"));
        assert!(row.contains("Groceries"));
        assert!(row.contains("$23.10"));
    }

    #[test]
    fn test_register_total() {
        let text = format_expense_register(&[expense(1, 10.0), expense(2, 2.5)], "$");
        assert!(text.contains("$12.50"));
        assert_eq!(format_expense_register(&[], "$"), "No expenses found.\n");
    }
}
