//! Report display formatting

use crate::services::CategoryTotal;

/// Format per-category totals as a table
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No operations recorded for any category.".to_string();
    }

    let name_width = totals
        .iter()
        .map(|t| t.category.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "Category",
        "Total",
        name_width = name_width,
    ));

    for total in totals {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}\n",
            total.category.name,
            total.total.to_string(),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryKind, Money};

    #[test]
    fn test_empty_totals() {
        let output = format_category_totals(&[]);
        assert!(output.contains("No operations"));
    }

    #[test]
    fn test_totals_table() {
        let totals = vec![CategoryTotal {
            category: Category::new("Groceries", CategoryKind::Expense, "").unwrap(),
            total: Money::from_cents(12345),
        }];

        let output = format_category_totals(&totals);
        assert!(output.contains("Groceries"));
        assert!(output.contains("123.45"));
    }
}
