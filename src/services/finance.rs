//! Finance service
//!
//! Business logic over the repositories: entity creation with validation,
//! the balance-consistency rule for operations, and aggregate analytics.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Account, AccountId, Category, CategoryId, CategoryKind, Money, Operation, OperationId,
};
use crate::storage::{Repository, Storage};

/// A category resolved together with its aggregated operation total
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Service orchestrating the three repositories
pub struct FinanceService {
    storage: Storage,
}

impl FinanceService {
    /// Create a new finance service over the given storage
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Direct access to the underlying storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // ----- accounts -----

    /// Create and persist a new account
    pub fn create_account(
        &self,
        name: &str,
        currency: &str,
        initial_balance: Money,
    ) -> FinanceResult<Account> {
        let account = Account::new(name, currency, initial_balance)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.storage.accounts.add(&account)?;
        info!(account = %account.id, name = %account.name, "account created");
        Ok(account)
    }

    /// Get an account by id
    pub fn account(&self, id: AccountId) -> FinanceResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// All accounts
    pub fn accounts(&self) -> FinanceResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Replace a stored account
    pub fn update_account(&self, account: &Account) -> FinanceResult<()> {
        self.storage.accounts.update(account)
    }

    /// Delete an account by id
    ///
    /// Does not reverse the balance effect of the account's operations; the
    /// operations themselves go away through the storage-level cascade.
    pub fn delete_account(&self, id: AccountId) -> FinanceResult<()> {
        self.storage.accounts.delete(id)?;
        info!(account = %id, "account deleted");
        Ok(())
    }

    // ----- categories -----

    /// Create and persist a new category
    pub fn create_category(
        &self,
        name: &str,
        kind: CategoryKind,
        description: &str,
    ) -> FinanceResult<Category> {
        let category = Category::new(name, kind, description)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.storage.categories.add(&category)?;
        info!(category = %category.id, name = %category.name, kind = %kind, "category created");
        Ok(category)
    }

    /// Get a category by id
    pub fn category(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// All categories
    pub fn categories(&self) -> FinanceResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// All categories of the given kind
    pub fn categories_by_kind(&self, kind: CategoryKind) -> FinanceResult<Vec<Category>> {
        self.storage.categories.get_by_kind(kind)
    }

    /// Replace a stored category
    pub fn update_category(&self, category: &Category) -> FinanceResult<()> {
        self.storage.categories.update(category)
    }

    /// Delete a category by id
    pub fn delete_category(&self, id: CategoryId) -> FinanceResult<()> {
        self.storage.categories.delete(id)?;
        info!(category = %id, "category deleted");
        Ok(())
    }

    // ----- operations -----

    /// Create an operation and apply its amount to the account balance
    ///
    /// The category must exist; its kind decides the stored sign of the
    /// amount (expense negative, income positive) regardless of the sign the
    /// caller passes. The operation insert and the balance update are two
    /// separate writes, not one transaction.
    pub fn create_operation(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        description: &str,
        date: Option<DateTime<Utc>>,
    ) -> FinanceResult<Operation> {
        let category = self
            .storage
            .categories
            .get(category_id)?
            .ok_or_else(|| FinanceError::category_not_found(category_id.to_string()))?;

        let amount = category.kind.signed(amount);
        let operation = match date {
            Some(date) => Operation::dated(account_id, category_id, amount, description, date),
            None => Operation::new(account_id, category_id, amount, description),
        };

        self.storage.operations.add(&operation)?;
        self.storage.accounts.update_balance(account_id, amount)?;
        info!(
            operation = %operation.id,
            account = %account_id,
            amount = %amount,
            "operation created"
        );
        Ok(operation)
    }

    /// Get an operation by id
    pub fn operation(&self, id: OperationId) -> FinanceResult<Option<Operation>> {
        self.storage.operations.get(id)
    }

    /// All operations
    pub fn operations(&self) -> FinanceResult<Vec<Operation>> {
        self.storage.operations.get_all()
    }

    /// All operations against an account
    pub fn operations_by_account(&self, account_id: AccountId) -> FinanceResult<Vec<Operation>> {
        self.storage.operations.get_by_account(account_id)
    }

    /// All operations attributed to a category
    pub fn operations_by_category(
        &self,
        category_id: CategoryId,
    ) -> FinanceResult<Vec<Operation>> {
        self.storage.operations.get_by_category(category_id)
    }

    /// Operations whose date falls in the inclusive range
    pub fn operations_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FinanceResult<Vec<Operation>> {
        self.storage.operations.get_by_date_range(start, end)
    }

    /// Replace a stored operation
    pub fn update_operation(&self, operation: &Operation) -> FinanceResult<()> {
        self.storage.operations.update(operation)
    }

    /// Delete an operation by id
    ///
    /// Does not reverse the operation's effect on the account balance.
    pub fn delete_operation(&self, id: OperationId) -> FinanceResult<()> {
        self.storage.operations.delete(id)?;
        info!(operation = %id, "operation deleted");
        Ok(())
    }

    // ----- analytics -----

    /// Sum of all account balances
    pub fn total_balance(&self) -> FinanceResult<Money> {
        self.storage.accounts.total_balance()
    }

    /// Sum of operation amounts for the given account
    ///
    /// Computed from the operations, not the stored balance; the two agree
    /// for accounts created with a zero initial balance.
    pub fn balance_by_account(&self, account_id: AccountId) -> FinanceResult<Money> {
        self.storage.operations.total_by_account(account_id)
    }

    /// Sum of operation amounts over the inclusive date range
    pub fn total_by_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FinanceResult<Money> {
        let operations = self.storage.operations.get_by_date_range(start, end)?;
        Ok(operations.iter().map(|o| o.amount).sum())
    }

    /// Per-category expense totals as absolute values
    ///
    /// Categories with no operations are excluded.
    // TODO: narrow the per-category totals to the requested range; today they
    // are all-time and the bounds only name the reporting period.
    pub fn expenses_by_category(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> FinanceResult<Vec<CategoryTotal>> {
        self.totals_by_kind(CategoryKind::Expense)
    }

    /// Per-category income totals as absolute values
    ///
    /// Categories with no operations are excluded.
    pub fn income_by_category(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> FinanceResult<Vec<CategoryTotal>> {
        self.totals_by_kind(CategoryKind::Income)
    }

    fn totals_by_kind(&self, kind: CategoryKind) -> FinanceResult<Vec<CategoryTotal>> {
        let categories = self.storage.categories.get_by_kind(kind)?;
        let mut totals = Vec::new();

        for category in categories {
            let total = self.storage.operations.total_by_category(category.id)?;
            if !total.is_zero() {
                totals.push(CategoryTotal {
                    total: total.abs(),
                    category,
                });
            }
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn service() -> FinanceService {
        FinanceService::new(Storage::open_in_memory().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_create_account() {
        let service = service();
        let account = service
            .create_account("Checking", "USD", Money::from_cents(10000))
            .unwrap();

        assert_eq!(account.name, "Checking");
        assert_eq!(account.currency, "USD");
        assert_eq!(account.balance().cents(), 10000);

        let stored = service.account(account.id).unwrap().unwrap();
        assert_eq!(stored.id, account.id);
    }

    #[test]
    fn test_create_account_rejects_empty_fields() {
        let service = service();
        assert!(matches!(
            service.create_account("", "USD", Money::zero()),
            Err(FinanceError::Validation(_))
        ));
        assert!(matches!(
            service.create_account("Checking", "", Money::zero()),
            Err(FinanceError::Validation(_))
        ));
    }

    #[test]
    fn test_create_category() {
        let service = service();
        let category = service
            .create_category("Groceries", CategoryKind::Expense, "food")
            .unwrap();

        let stored = service.category(category.id).unwrap().unwrap();
        assert_eq!(stored.kind, CategoryKind::Expense);
        assert_eq!(stored.description, "food");
    }

    #[test]
    fn test_operation_normalizes_expense_sign() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let category = service
            .create_category("Rent", CategoryKind::Expense, "")
            .unwrap();

        // Positive input is stored negative
        let op = service
            .create_operation(account.id, category.id, Money::from_cents(5000), "", None)
            .unwrap();
        assert_eq!(op.amount.cents(), -5000);

        // Negative input stays negative
        let op = service
            .create_operation(account.id, category.id, Money::from_cents(-700), "", None)
            .unwrap();
        assert_eq!(op.amount.cents(), -700);
    }

    #[test]
    fn test_operation_normalizes_income_sign() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let category = service
            .create_category("Salary", CategoryKind::Income, "")
            .unwrap();

        let op = service
            .create_operation(account.id, category.id, Money::from_cents(-90000), "", None)
            .unwrap();
        assert_eq!(op.amount.cents(), 90000);
    }

    #[test]
    fn test_operation_moves_account_balance() {
        let service = service();
        let account = service
            .create_account("A", "USD", Money::from_cents(10000))
            .unwrap();
        let category = service
            .create_category("Groceries", CategoryKind::Expense, "")
            .unwrap();

        service
            .create_operation(account.id, category.id, Money::from_cents(3000), "", None)
            .unwrap();

        let stored = service.account(account.id).unwrap().unwrap();
        assert_eq!(stored.balance().cents(), 7000);
    }

    #[test]
    fn test_round_trip_scenario() {
        // account(100 USD) + expense category + operation(30)
        //   => amount -30.00, balance 70.00
        let service = service();
        let account = service
            .create_account("A", "USD", Money::from_cents(10000))
            .unwrap();
        let category = service
            .create_category("C", CategoryKind::Expense, "")
            .unwrap();

        let op = service
            .create_operation(account.id, category.id, Money::from_cents(3000), "", None)
            .unwrap();

        assert_eq!(op.amount.cents(), -3000);
        let stored = service.account(account.id).unwrap().unwrap();
        assert_eq!(stored.balance().cents(), 7000);
    }

    #[test]
    fn test_operation_with_missing_category_fails_cleanly() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();

        let result = service.create_operation(
            account.id,
            CategoryId::new(),
            Money::from_cents(100),
            "",
            None,
        );
        assert!(matches!(result, Err(ref e) if e.is_not_found()));

        // Nothing persisted, balance untouched
        assert!(service.operations().unwrap().is_empty());
        let stored = service.account(account.id).unwrap().unwrap();
        assert!(stored.balance().is_zero());
    }

    #[test]
    fn test_deletes_are_idempotent_and_leave_data_alone() {
        let service = service();
        service
            .create_account("A", "USD", Money::from_cents(500))
            .unwrap();

        service.delete_account(AccountId::new()).unwrap();
        service.delete_category(CategoryId::new()).unwrap();
        service.delete_operation(OperationId::new()).unwrap();

        assert_eq!(service.accounts().unwrap().len(), 1);
        assert_eq!(service.total_balance().unwrap().cents(), 500);
    }

    #[test]
    fn test_delete_operation_keeps_balance() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let category = service
            .create_category("C", CategoryKind::Expense, "")
            .unwrap();
        let op = service
            .create_operation(account.id, category.id, Money::from_cents(1000), "", None)
            .unwrap();

        service.delete_operation(op.id).unwrap();

        // No reversal: the balance keeps the operation's effect
        let stored = service.account(account.id).unwrap().unwrap();
        assert_eq!(stored.balance().cents(), -1000);
    }

    #[test]
    fn test_total_balance_tracks_creates_and_deletes() {
        let service = service();
        let a = service
            .create_account("A", "USD", Money::from_cents(10000))
            .unwrap();
        service
            .create_account("B", "USD", Money::from_cents(2500))
            .unwrap();
        assert_eq!(service.total_balance().unwrap().cents(), 12500);

        service.delete_account(a.id).unwrap();
        assert_eq!(service.total_balance().unwrap().cents(), 2500);
    }

    #[test]
    fn test_balance_by_account_reconciles_with_stored_balance() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let expense = service
            .create_category("E", CategoryKind::Expense, "")
            .unwrap();
        let income = service
            .create_category("I", CategoryKind::Income, "")
            .unwrap();

        service
            .create_operation(account.id, income.id, Money::from_cents(50000), "", None)
            .unwrap();
        service
            .create_operation(account.id, expense.id, Money::from_cents(12000), "", None)
            .unwrap();

        let from_operations = service.balance_by_account(account.id).unwrap();
        let stored = service.account(account.id).unwrap().unwrap();
        assert_eq!(from_operations.cents(), 38000);
        assert_eq!(from_operations, stored.balance());
    }

    #[test]
    fn test_total_by_period_inclusive() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let category = service
            .create_category("C", CategoryKind::Expense, "")
            .unwrap();

        for (day, cents) in [(10, 100), (15, 200), (20, 400)] {
            service
                .create_operation(
                    account.id,
                    category.id,
                    Money::from_cents(cents),
                    "",
                    Some(date(2026, 1, day)),
                )
                .unwrap();
        }

        let total = service
            .total_by_period(date(2026, 1, 10), date(2026, 1, 15))
            .unwrap();
        assert_eq!(total.cents(), -300);
    }

    #[test]
    fn test_expenses_by_category_ignores_date_range() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let groceries = service
            .create_category("Groceries", CategoryKind::Expense, "")
            .unwrap();
        // A second expense category with no operations
        service
            .create_category("Travel", CategoryKind::Expense, "")
            .unwrap();

        service
            .create_operation(
                account.id,
                groceries.id,
                Money::from_cents(3000),
                "",
                Some(date(2026, 1, 5)),
            )
            .unwrap();

        // Range far away from the operation's date; the totals are all-time
        let totals = service
            .expenses_by_category(date(2030, 1, 1), date(2030, 12, 31))
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category.id, groceries.id);
        assert_eq!(totals[0].total.cents(), 3000); // absolute value
    }

    #[test]
    fn test_income_by_category_excludes_zero_totals() {
        let service = service();
        let account = service.create_account("A", "USD", Money::zero()).unwrap();
        let salary = service
            .create_category("Salary", CategoryKind::Income, "")
            .unwrap();
        service
            .create_category("Gifts", CategoryKind::Income, "")
            .unwrap();

        service
            .create_operation(account.id, salary.id, Money::from_cents(90000), "", None)
            .unwrap();

        let totals = service
            .income_by_category(date(2026, 1, 1), date(2026, 12, 31))
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category.name, "Salary");
        assert_eq!(totals[0].total.cents(), 90000);
    }
}
