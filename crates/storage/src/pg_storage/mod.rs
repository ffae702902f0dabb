//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by aggregate.

mod budgets;
mod expenses;
mod itinerary;
mod trips;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use voyage_core::{
    Activity, Budget, DailyPlan, Expense, ExpenseType, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, Trip, TripStatus,
};

use super::pg_migrations::run_pg_migrations;
use crate::error::StorageError;

pub(crate) const TRIP_COLUMNS: &str = "id, destination, start_date, end_date, flight, lodging, transportation, status, created_at, updated_at";
pub(crate) const BUDGET_COLUMNS: &str =
    "id, trip_id, daily, pre_trip, spent, total, created_at, updated_at";
pub(crate) const EXPENSE_COLUMNS: &str =
    "id, budget_id, amount, description, expense_type, created_at, updated_at";
pub(crate) const PLAN_COLUMNS: &str = "id, trip_id, date, day_number, created_at, updated_at";
pub(crate) const ACTIVITY_COLUMNS: &str =
    "id, daily_plan_id, title, description, time, budget, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn row_to_trip(row: &PgRow) -> Result<Trip, StorageError> {
    let status_str: String = row.try_get("status")?;
    let status = status_str.parse::<TripStatus>().unwrap_or_else(|_| {
        tracing::warn!(invalid_status = %status_str, "corrupt trip status in DB, defaulting to Idea");
        TripStatus::Idea
    });
    Ok(Trip {
        id: row.try_get("id")?,
        destination: row.try_get("destination")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        flight: row.try_get("flight")?,
        lodging: row.try_get("lodging")?,
        transportation: row.try_get("transportation")?,
        status,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_budget(row: &PgRow) -> Result<Budget, StorageError> {
    Ok(Budget {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        daily: row.try_get("daily")?,
        pre_trip: row.try_get("pre_trip")?,
        spent: row.try_get("spent")?,
        total: row.try_get("total")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_expense(row: &PgRow) -> Result<Expense, StorageError> {
    let type_str: String = row.try_get("expense_type")?;
    let expense_type = type_str.parse::<ExpenseType>().unwrap_or_else(|_| {
        tracing::warn!(invalid_type = %type_str, "corrupt expense_type in DB, defaulting to Daily");
        ExpenseType::Daily
    });
    Ok(Expense {
        id: row.try_get("id")?,
        budget_id: row.try_get("budget_id")?,
        amount: row.try_get("amount")?,
        description: row.try_get("description")?,
        expense_type,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_daily_plan(row: &PgRow) -> Result<DailyPlan, StorageError> {
    let date: Option<DateTime<Utc>> = row.try_get("date")?;
    Ok(DailyPlan {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        date,
        day_number: row.try_get("day_number")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_activity(row: &PgRow) -> Result<Activity, StorageError> {
    Ok(Activity {
        id: row.try_get("id")?,
        daily_plan_id: row.try_get("daily_plan_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        time: row.try_get("time")?,
        budget: row.try_get("budget")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
