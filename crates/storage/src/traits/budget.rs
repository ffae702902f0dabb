use async_trait::async_trait;
use rust_decimal::Decimal;
use voyage_core::{Budget, BudgetInput};

use crate::error::StorageError;

/// Budget reads and writes.
#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// Get budget by ID.
    async fn get_budget(&self, id: &str) -> Result<Option<Budget>, StorageError>;

    /// Get the budget belonging to a trip.
    async fn get_budget_by_trip(&self, trip_id: &str) -> Result<Option<Budget>, StorageError>;

    /// Budgets for several trips at once. Trips without a budget are skipped.
    async fn get_budgets_for_trips(
        &self,
        trip_ids: &[String],
    ) -> Result<Vec<Budget>, StorageError>;

    /// Overwrite all four amounts of a trip's budget.
    async fn update_budget_by_trip(
        &self,
        trip_id: &str,
        input: BudgetInput,
    ) -> Result<Budget, StorageError>;

    /// Write the cached spent figure. Returns `None` if the budget does not exist.
    async fn set_budget_spent(
        &self,
        budget_id: &str,
        spent: Decimal,
    ) -> Result<Option<Budget>, StorageError>;
}
