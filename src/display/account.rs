//! Account display formatting

use crate::models::{Account, Money};

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<8}  {:>14}\n",
        "Id",
        "Name",
        "Currency",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<8}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<8}  {:>14}\n",
            account.id.to_string(),
            account.name,
            account.currency,
            account.balance().to_string(),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance()).sum();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<8}  {:>14}\n",
        "",
        "Total",
        "",
        total.to_string(),
        name_width = name_width,
    ));

    output
}

/// Format one account as a detail view
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Id:        {}\n", account.id.as_uuid()));
    output.push_str(&format!("Name:      {}\n", account.name));
    output.push_str(&format!("Currency:  {}\n", account.currency));
    output.push_str(&format!("Balance:   {}\n", account.balance()));
    output.push_str(&format!(
        "Created:   {}\n",
        account.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    if let Some(updated_at) = account.updated_at {
        output.push_str(&format!(
            "Modified:  {}\n",
            updated_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    output
}
