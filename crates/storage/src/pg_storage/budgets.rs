//! BudgetStore implementation for PgStorage.

use super::*;

use crate::traits::BudgetStore;
use async_trait::async_trait;
use rust_decimal::Decimal;
use voyage_core::BudgetInput;

#[async_trait]
impl BudgetStore for PgStorage {
    async fn get_budget(&self, id: &str) -> Result<Option<Budget>, StorageError> {
        let row = sqlx::query(&format!("SELECT {BUDGET_COLUMNS} FROM budgets WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_budget(&r)).transpose()
    }

    async fn get_budget_by_trip(&self, trip_id: &str) -> Result<Option<Budget>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {BUDGET_COLUMNS} FROM budgets WHERE trip_id = $1"))
                .bind(trip_id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_budget(&r)).transpose()
    }

    async fn get_budgets_for_trips(
        &self,
        trip_ids: &[String],
    ) -> Result<Vec<Budget>, StorageError> {
        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows =
            sqlx::query(&format!("SELECT {BUDGET_COLUMNS} FROM budgets WHERE trip_id = ANY($1)"))
                .bind(trip_ids)
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(row_to_budget).collect()
    }

    async fn update_budget_by_trip(
        &self,
        trip_id: &str,
        input: BudgetInput,
    ) -> Result<Budget, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE budgets SET daily = $1, pre_trip = $2, spent = $3, total = $4, updated_at = NOW()
             WHERE trip_id = $5 RETURNING {BUDGET_COLUMNS}"
        ))
        .bind(input.daily)
        .bind(input.pre_trip)
        .bind(input.spent)
        .bind(input.total)
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("budget for trip", trip_id))?;
        row_to_budget(&row)
    }

    async fn set_budget_spent(
        &self,
        budget_id: &str,
        spent: Decimal,
    ) -> Result<Option<Budget>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE budgets SET spent = $1, updated_at = NOW() WHERE id = $2 RETURNING {BUDGET_COLUMNS}"
        ))
        .bind(spent)
        .bind(budget_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_budget(&r)).transpose()
    }
}
