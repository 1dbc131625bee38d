//! Operation display formatting

use std::collections::HashMap;

use crate::models::{Account, Category, Operation};

/// Format a list of operations, resolving account and category names
pub fn format_operation_list(
    operations: &[Operation],
    accounts: &[Account],
    categories: &[Category],
) -> String {
    if operations.is_empty() {
        return "No operations found.".to_string();
    }

    let account_names: HashMap<_, _> = accounts.iter().map(|a| (a.id, a.name.as_str())).collect();
    let category_names: HashMap<_, _> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:>12}  {:<16}  {:<16}  Description\n",
        "Id", "Date", "Amount", "Account", "Category",
    ));

    for operation in operations {
        let account = account_names
            .get(&operation.account_id)
            .copied()
            .unwrap_or("(deleted)");
        let category = category_names
            .get(&operation.category_id)
            .copied()
            .unwrap_or("(deleted)");

        output.push_str(&format!(
            "{:<12}  {:<10}  {:>12}  {:<16}  {:<16}  {}\n",
            operation.id.to_string(),
            operation.date.format("%Y-%m-%d").to_string(),
            operation.amount.to_string(),
            account,
            category,
            operation.description,
        ));
    }

    output
}
