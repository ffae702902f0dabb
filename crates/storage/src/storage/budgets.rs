use rusqlite::{OptionalExtension as _, params, params_from_iter};
use rust_decimal::Decimal;
use voyage_core::{Budget, BudgetInput};

use super::{Storage, format_instant, get_conn, get_decimal, get_instant, placeholders};
use crate::error::StorageError;

const BUDGET_COLUMNS: &str = "id, trip_id, daily, pre_trip, spent, total, created_at, updated_at";

impl Storage {
    /// Get budget by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_budget(&self, id: &str) -> Result<Option<Budget>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let budget = conn
            .query_row(
                &format!("SELECT {BUDGET_COLUMNS} FROM budgets WHERE id = ?1"),
                params![id],
                map_budget,
            )
            .optional()?;
        Ok(budget)
    }

    /// Get the budget of a trip.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_budget_by_trip(&self, trip_id: &str) -> Result<Option<Budget>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let budget = conn
            .query_row(
                &format!("SELECT {BUDGET_COLUMNS} FROM budgets WHERE trip_id = ?1"),
                params![trip_id],
                map_budget,
            )
            .optional()?;
        Ok(budget)
    }

    /// Budgets for a set of trips.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_budgets_for_trips(&self, trip_ids: &[String]) -> Result<Vec<Budget>, StorageError> {
        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {BUDGET_COLUMNS} FROM budgets WHERE trip_id IN ({})",
            placeholders(trip_ids.len())
        ))?;
        let budgets =
            stmt.query_map(params_from_iter(trip_ids.iter()), map_budget)?.collect::<Result<_, _>>()?;
        Ok(budgets)
    }

    /// Overwrite the four amounts of a trip's budget.
    ///
    /// # Errors
    /// Returns `NotFound` if the trip has no budget.
    pub fn update_budget_by_trip(
        &self,
        trip_id: &str,
        input: BudgetInput,
    ) -> Result<Budget, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!(
                "UPDATE budgets SET daily = ?1, pre_trip = ?2, spent = ?3, total = ?4, updated_at = ?5
                 WHERE trip_id = ?6 RETURNING {BUDGET_COLUMNS}"
            ),
            params![
                input.daily.to_string(),
                input.pre_trip.to_string(),
                input.spent.to_string(),
                input.total.to_string(),
                format_instant(&crate::now()),
                trip_id,
            ],
            map_budget,
        )
        .optional()?
        .ok_or_else(|| StorageError::not_found("budget for trip", trip_id))
    }

    /// Write the cached spent figure.
    ///
    /// # Errors
    /// Returns error if database update fails.
    pub fn set_budget_spent(
        &self,
        budget_id: &str,
        spent: Decimal,
    ) -> Result<Option<Budget>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let budget = conn
            .query_row(
                &format!(
                    "UPDATE budgets SET spent = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {BUDGET_COLUMNS}"
                ),
                params![spent.to_string(), format_instant(&crate::now()), budget_id],
                map_budget,
            )
            .optional()?;
        Ok(budget)
    }
}

fn map_budget(row: &rusqlite::Row<'_>) -> rusqlite::Result<Budget> {
    Ok(Budget {
        id: row.get(0)?,
        trip_id: row.get(1)?,
        daily: get_decimal(row, 2)?,
        pre_trip: get_decimal(row, 3)?,
        spent: get_decimal(row, 4)?,
        total: get_decimal(row, 5)?,
        created_at: get_instant(row, 6)?,
        updated_at: get_instant(row, 7)?,
    })
}
