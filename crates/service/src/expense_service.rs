use std::sync::Arc;

use voyage_core::{Decimal, Expense, ExpenseInput, ExpenseUpdate, checked_sum};
use voyage_storage::StorageBackend;
use voyage_storage::traits::{BudgetStore, ExpenseStore};

use crate::budget_service::BudgetService;
use crate::error::{ServiceError, require_id, spent_overflow};

/// Expense writes. Every create, update and delete is followed by a
/// recomputation of the owning budget's `spent`.
pub struct ExpenseService {
    storage: Arc<StorageBackend>,
    budget_service: Arc<BudgetService>,
}

impl ExpenseService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>, budget_service: Arc<BudgetService>) -> Self {
        Self { storage, budget_service }
    }

    pub async fn create(&self, input: ExpenseInput) -> Result<Expense, ServiceError> {
        input.validate()?;
        if self.storage.get_budget(&input.budget_id).await?.is_none() {
            return Err(ServiceError::not_found("budget", &input.budget_id));
        }
        self.ensure_sum_fits(&input.budget_id, None, input.amount).await?;
        let expense = self.storage.create_expense(input).await?;
        self.budget_service.recompute_spent(&expense.budget_id).await?;
        Ok(expense)
    }

    /// The expense stays on its budget; only that budget is recomputed.
    pub async fn update(&self, id: &str, update: ExpenseUpdate) -> Result<Expense, ServiceError> {
        require_id(id)?;
        update.validate()?;
        if let Some(current) = self.storage.get_expense(id).await? {
            self.ensure_sum_fits(&current.budget_id, Some(id), update.amount).await?;
        }
        let expense = self.storage.update_expense(id, update).await?;
        self.budget_service.recompute_spent(&expense.budget_id).await?;
        Ok(expense)
    }

    pub async fn delete(&self, id: &str) -> Result<Expense, ServiceError> {
        require_id(id)?;
        let expense = self.storage.delete_expense(id).await?;
        self.budget_service.recompute_spent(&expense.budget_id).await?;
        Ok(expense)
    }

    /// Newest first.
    pub async fn get_by_budget_id(&self, budget_id: &str) -> Result<Vec<Expense>, ServiceError> {
        require_id(budget_id)?;
        Ok(self.storage.get_expenses_by_budget(budget_id).await?)
    }

    /// Reject a write whose amount would push the budget's sum out of range,
    /// before anything is stored. `replacing` names the expense being updated.
    async fn ensure_sum_fits(
        &self,
        budget_id: &str,
        replacing: Option<&str>,
        amount: Decimal,
    ) -> Result<(), ServiceError> {
        let siblings = self.storage.get_expenses_by_budget(budget_id).await?;
        let amounts = siblings
            .iter()
            .filter(|e| Some(e.id.as_str()) != replacing)
            .map(|e| e.amount)
            .chain(std::iter::once(amount));
        checked_sum(amounts).map(|_| ()).ok_or_else(|| spent_overflow(budget_id))
    }
}
