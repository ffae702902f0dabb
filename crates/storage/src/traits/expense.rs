use async_trait::async_trait;
use voyage_core::{Expense, ExpenseInput, ExpenseUpdate};

use crate::error::StorageError;

/// Expense row operations. None of these touch `budgets.spent`.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn create_expense(&self, input: ExpenseInput) -> Result<Expense, StorageError>;

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, StorageError>;

    async fn update_expense(
        &self,
        id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense, StorageError>;

    /// Delete and return the removed row.
    async fn delete_expense(&self, id: &str) -> Result<Expense, StorageError>;

    /// All expenses of a budget, newest first.
    async fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>, StorageError>;
}
