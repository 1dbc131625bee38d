//! Category display formatting

use crate::models::Category;

/// Format a list of categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<7}  Description\n",
        "Id",
        "Name",
        "Kind",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<7}  {:-<11}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<7}  {}\n",
            category.id.to_string(),
            category.name,
            category.kind.to_string(),
            category.description,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }

    #[test]
    fn test_list_shows_kind_and_description() {
        let categories = vec![
            Category::new("Salary", CategoryKind::Income, "monthly pay").unwrap(),
            Category::new("Rent", CategoryKind::Expense, "").unwrap(),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("Salary"));
        assert!(output.contains("Income"));
        assert!(output.contains("monthly pay"));
        assert!(output.contains("Expense"));
    }
}
