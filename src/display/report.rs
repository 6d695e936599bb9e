//! Report formatting utilities for terminal output

use crate::models::{BudgetStatus, CategoryTotal, MonthlyTotal};

const BAR_WIDTH: usize = 20;

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Category totals with a proportional bar
pub fn format_category_summary(rows: &[CategoryTotal], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let max = rows.iter().map(|r| r.total).fold(0.0_f64, f64::max);
    let mut out = format!("{:<20} {:>12}\n{}\n", "Category", "Total", separator(54));
    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>12} {}\n",
            truncate(&row.category, 20),
            format_amount(row.total, symbol),
            format_bar(row.total, max, BAR_WIDTH)
        ));
    }
    out
}

/// Month totals with a proportional bar
pub fn format_monthly_summary(rows: &[MonthlyTotal], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let max = rows.iter().map(|r| r.total).fold(0.0_f64, f64::max);
    let mut out = format!("{:<6} {:>12}\n{}\n", "Month", "Total", separator(40));
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:>12} {}\n",
            row.month,
            format_amount(row.total, symbol),
            format_bar(row.total, max, BAR_WIDTH)
        ));
    }
    out
}

pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let period = format!("{:04}-{:02}", status.year, status.month);

    let Some(pct) = status.percent_used() else {
        return format!(
            "{}: spent {} (no budget limit set)",
            period,
            format_amount(status.spent, symbol)
        );
    };

    let mut out = format!(
        "{}: spent {} of {} ({:.0}%)\n{}",
        period,
        format_amount(status.spent, symbol),
        format_amount(status.limit, symbol),
        pct,
        format_bar(status.spent.min(status.limit), status.limit, BAR_WIDTH)
    );
    if status.is_over_budget() {
        out.push_str(&format!(
            "\nOver budget by {}",
            format_amount(-status.remaining(), symbol)
        ));
    } else {
        out.push_str(&format!(
            "\n{} remaining",
            format_amount(status.remaining(), symbol)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(-3.0, "€"), "-€3.00");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_category_summary_lists_rows() {
        let rows = vec![
            CategoryTotal { category: "Food".into(), total: 20.0 },
            CategoryTotal { category: "Rent".into(), total: 40.0 },
        ];
        let text = format_category_summary(&rows, "$");
        assert!(text.contains("Food"));
        assert!(text.contains("$40.00"));
        assert_eq!(format_category_summary(&[], "$"), "No expenses recorded.");
    }

    #[test]
    fn test_budget_status_text() {
        let over = BudgetStatus { year: 2025, month: 3, limit: 100.0, spent: 110.0 };
        let text = format_budget_status(&over, "$");
        assert!(text.starts_with("2025-03: spent $110.00 of $100.00"));
        assert!(text.ends_with("Over budget by $10.00"));

        let unset = BudgetStatus { year: 2025, month: 3, limit: 0.0, spent: 5.0 };
        assert!(format_budget_status(&unset, "$").contains("no budget limit set"));
    }
}
