//! TripStore implementation for PgStorage.

use super::*;

use crate::traits::TripStore;
use async_trait::async_trait;
use voyage_core::TripInput;

#[async_trait]
impl TripStore for PgStorage {
    async fn create_trip(&self, input: TripInput) -> Result<Trip, StorageError> {
        let now = crate::now();
        let trip = Trip::new(new_id(), input, now);
        let budget = Budget::zeroed(new_id(), trip.id.clone(), now);

        let mut tx = self.pool.begin().await?;
        sqlx::query(&format!(
            "INSERT INTO trips ({TRIP_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)"
        ))
        .bind(&trip.id)
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(&trip.flight)
        .bind(&trip.lodging)
        .bind(&trip.transportation)
        .bind(trip.status.as_str())
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .execute(&mut *tx)
        .await?;
        sqlx::query(&format!(
            "INSERT INTO budgets ({BUDGET_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7,$8)"
        ))
        .bind(&budget.id)
        .bind(&budget.trip_id)
        .bind(budget.daily)
        .bind(budget.pre_trip)
        .bind(budget.spent)
        .bind(budget.total)
        .bind(budget.created_at)
        .bind(budget.updated_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(trip)
    }

    async fn list_trips(&self, status: Option<TripStatus>) -> Result<Vec<Trip>, StorageError> {
        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    "SELECT {TRIP_COLUMNS} FROM trips WHERE status = $1 ORDER BY start_date ASC, id ASC"
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            },
            None => {
                sqlx::query(&format!(
                    "SELECT {TRIP_COLUMNS} FROM trips ORDER BY start_date ASC, id ASC"
                ))
                .fetch_all(&self.pool)
                .await?
            },
        };
        rows.iter().map(row_to_trip).collect()
    }

    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        let row = sqlx::query(&format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_trip(&r)).transpose()
    }

    async fn update_trip(&self, id: &str, input: TripInput) -> Result<Trip, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = $1 FOR UPDATE"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| StorageError::not_found("trip", id))?;
        let mut trip = row_to_trip(&row)?;
        trip.apply(input, crate::now());
        sqlx::query(
            "UPDATE trips SET destination = $1, start_date = $2, end_date = $3, flight = $4,
               lodging = $5, transportation = $6, status = $7, updated_at = $8
             WHERE id = $9",
        )
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(&trip.flight)
        .bind(&trip.lodging)
        .bind(&trip.transportation)
        .bind(trip.status.as_str())
        .bind(trip.updated_at)
        .bind(&trip.id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(trip)
    }

    async fn delete_trip(&self, id: &str) -> Result<Trip, StorageError> {
        let row =
            sqlx::query(&format!("DELETE FROM trips WHERE id = $1 RETURNING {TRIP_COLUMNS}"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| StorageError::not_found("trip", id))?;
        row_to_trip(&row)
    }

    async fn clear_trips(&self) -> Result<usize, StorageError> {
        let result = sqlx::query("DELETE FROM trips").execute(&self.pool).await?;
        Ok(usize::try_from(result.rows_affected()).unwrap_or(usize::MAX))
    }
}
