//! CSV export
//!
//! Writes expense lists and report summaries with a header row.

use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::models::{CategoryTotal, Expense, MonthlyTotal};

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

/// Export expenses as `ID,Date,Category,Amount,Description`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv = headed_writer(writer, &["ID", "Date", "Category", "Amount", "Description"])?;
    for expense in expenses {
        csv.serialize(ExpenseRecord {
            id: expense.id.value(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: &expense.category,
            amount: format!("{:.2}", expense.amount),
            description: &expense.description,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Export a category summary as `Category,Total`
pub fn export_category_summary_csv<W: Write>(
    rows: &[CategoryTotal],
    writer: W,
) -> ExpenseResult<()> {
    write_rows(rows, writer, &["Category", "Total"])
}

/// Export a monthly summary as `Month,Total`
pub fn export_monthly_summary_csv<W: Write>(
    rows: &[MonthlyTotal],
    writer: W,
) -> ExpenseResult<()> {
    write_rows(rows, writer, &["Month", "Total"])
}

fn write_rows<T: Serialize, W: Write>(
    rows: &[T],
    writer: W,
    header: &[&str],
) -> ExpenseResult<()> {
    let mut csv = headed_writer(writer, header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// CSV writer whose header row is written before any record
fn headed_writer<W: Write>(writer: W, header: &[&str]) -> ExpenseResult<csv::Writer<W>> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(header)?;
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses() {
        let expenses = vec![Expense {
            id: ExpenseId::new(3),
            user_id: UserId::new(1),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            category: "Food".into(),
            amount: 12.5,
            description: "lunch, with tip".into(),
        }];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "ID,Date,Category,Amount,Description\n3,2025-03-10,Food,12.50,\"lunch, with tip\"\n"
        );
    }

    #[test]
    fn test_export_summaries() {
        let categories = vec![CategoryTotal {
            category: "Food".into(),
            total: 20.5,
        }];
        let mut out = Vec::new();
        export_category_summary_csv(&categories, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Category,Total\nFood,20.5\n");

        let months = vec![MonthlyTotal {
            month: "03".into(),
            total: 42.0,
        }];
        let mut out = Vec::new();
        export_monthly_summary_csv(&months, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Month,Total\n03,42.0\n");
    }

    #[test]
    fn test_empty_exports_keep_header() {
        let mut out = Vec::new();
        export_expenses_csv(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID,Date,Category,Amount,Description\n"
        );

        let mut out = Vec::new();
        export_category_summary_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Category,Total\n");

        let mut out = Vec::new();
        export_monthly_summary_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Month,Total\n");
    }
}
