use std::sync::Arc;

use voyage_core::{Budget, BudgetInput, BudgetWithExpenses, total_spent};
use voyage_storage::StorageBackend;
use voyage_storage::traits::{BudgetStore, ExpenseStore};

use crate::error::{ServiceError, require_id, spent_overflow};

/// Budget reads and writes, and the `spent` reconciliation.
pub struct BudgetService {
    storage: Arc<StorageBackend>,
}

impl BudgetService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn get_by_trip_id(
        &self,
        trip_id: &str,
    ) -> Result<Option<BudgetWithExpenses>, ServiceError> {
        require_id(trip_id)?;
        let Some(budget) = self.storage.get_budget_by_trip(trip_id).await? else {
            return Ok(None);
        };
        let expenses = self.storage.get_expenses_by_budget(&budget.id).await?;
        Ok(Some(BudgetWithExpenses { budget, expenses }))
    }

    /// Overwrites all four amounts, `spent` included. A later [`Self::refresh`]
    /// or expense mutation recomputes `spent` from the expense set.
    pub async fn update(&self, trip_id: &str, input: BudgetInput) -> Result<Budget, ServiceError> {
        require_id(trip_id)?;
        input.validate()?;
        Ok(self.storage.update_budget_by_trip(trip_id, input).await?)
    }

    /// Recompute the trip's `spent` from its expenses.
    pub async fn refresh(&self, trip_id: &str) -> Result<Budget, ServiceError> {
        require_id(trip_id)?;
        let budget = self
            .storage
            .get_budget_by_trip(trip_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("budget for trip", trip_id))?;
        self.recompute_spent(&budget.id).await
    }

    /// Sum every expense of the budget and store the result as `spent`.
    ///
    /// The read and the write are separate store calls. Each call resums the
    /// whole set, so a stale value is corrected by the next one.
    pub async fn recompute_spent(&self, budget_id: &str) -> Result<Budget, ServiceError> {
        let expenses = self.storage.get_expenses_by_budget(budget_id).await?;
        let spent = total_spent(&expenses).ok_or_else(|| spent_overflow(budget_id))?;
        tracing::debug!(budget_id, expense_count = expenses.len(), %spent, "budget reconciled");
        self.storage
            .set_budget_spent(budget_id, spent)
            .await?
            .ok_or_else(|| ServiceError::not_found("budget", budget_id))
    }
}
