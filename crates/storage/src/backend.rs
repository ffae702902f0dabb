//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use rust_decimal::Decimal;
use voyage_core::{
    Activity, ActivityInput, ActivityUpdate, Budget, BudgetInput, DailyPlan, DailyPlanInput,
    DailyPlanUpdate, Expense, ExpenseInput, ExpenseUpdate, Trip, TripInput, TripStatus,
};

use crate::error::StorageError;
use crate::traits::{ActivityStore, BudgetStore, DailyPlanStore, ExpenseStore, TripStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs and the version endpoint.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── TripStore ────────────────────────────────────────────────────

#[async_trait]
impl TripStore for StorageBackend {
    async fn create_trip(&self, input: TripInput) -> Result<Trip, StorageError> {
        dispatch!(self, TripStore, create_trip(input))
    }

    async fn list_trips(&self, status: Option<TripStatus>) -> Result<Vec<Trip>, StorageError> {
        dispatch!(self, TripStore, list_trips(status))
    }

    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        dispatch!(self, TripStore, get_trip(id))
    }

    async fn update_trip(&self, id: &str, input: TripInput) -> Result<Trip, StorageError> {
        dispatch!(self, TripStore, update_trip(id, input))
    }

    async fn delete_trip(&self, id: &str) -> Result<Trip, StorageError> {
        dispatch!(self, TripStore, delete_trip(id))
    }

    async fn clear_trips(&self) -> Result<usize, StorageError> {
        dispatch!(self, TripStore, clear_trips())
    }
}

// ── BudgetStore ──────────────────────────────────────────────────

#[async_trait]
impl BudgetStore for StorageBackend {
    async fn get_budget(&self, id: &str) -> Result<Option<Budget>, StorageError> {
        dispatch!(self, BudgetStore, get_budget(id))
    }

    async fn get_budget_by_trip(&self, trip_id: &str) -> Result<Option<Budget>, StorageError> {
        dispatch!(self, BudgetStore, get_budget_by_trip(trip_id))
    }

    async fn get_budgets_for_trips(
        &self,
        trip_ids: &[String],
    ) -> Result<Vec<Budget>, StorageError> {
        dispatch!(self, BudgetStore, get_budgets_for_trips(trip_ids))
    }

    async fn update_budget_by_trip(
        &self,
        trip_id: &str,
        input: BudgetInput,
    ) -> Result<Budget, StorageError> {
        dispatch!(self, BudgetStore, update_budget_by_trip(trip_id, input))
    }

    async fn set_budget_spent(
        &self,
        budget_id: &str,
        spent: Decimal,
    ) -> Result<Option<Budget>, StorageError> {
        dispatch!(self, BudgetStore, set_budget_spent(budget_id, spent))
    }
}

// ── ExpenseStore ─────────────────────────────────────────────────

#[async_trait]
impl ExpenseStore for StorageBackend {
    async fn create_expense(&self, input: ExpenseInput) -> Result<Expense, StorageError> {
        dispatch!(self, ExpenseStore, create_expense(input))
    }

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, StorageError> {
        dispatch!(self, ExpenseStore, get_expense(id))
    }

    async fn update_expense(
        &self,
        id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense, StorageError> {
        dispatch!(self, ExpenseStore, update_expense(id, update))
    }

    async fn delete_expense(&self, id: &str) -> Result<Expense, StorageError> {
        dispatch!(self, ExpenseStore, delete_expense(id))
    }

    async fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>, StorageError> {
        dispatch!(self, ExpenseStore, get_expenses_by_budget(budget_id))
    }
}

// ── DailyPlanStore ───────────────────────────────────────────────

#[async_trait]
impl DailyPlanStore for StorageBackend {
    async fn create_daily_plan(&self, input: DailyPlanInput) -> Result<DailyPlan, StorageError> {
        dispatch!(self, DailyPlanStore, create_daily_plan(input))
    }

    async fn get_daily_plan(&self, id: &str) -> Result<Option<DailyPlan>, StorageError> {
        dispatch!(self, DailyPlanStore, get_daily_plan(id))
    }

    async fn get_daily_plans_by_trip(
        &self,
        trip_id: &str,
    ) -> Result<Vec<DailyPlan>, StorageError> {
        dispatch!(self, DailyPlanStore, get_daily_plans_by_trip(trip_id))
    }

    async fn update_daily_plan(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlan, StorageError> {
        dispatch!(self, DailyPlanStore, update_daily_plan(id, update))
    }

    async fn delete_daily_plan(&self, id: &str) -> Result<DailyPlan, StorageError> {
        dispatch!(self, DailyPlanStore, delete_daily_plan(id))
    }
}

// ── ActivityStore ────────────────────────────────────────────────

#[async_trait]
impl ActivityStore for StorageBackend {
    async fn create_activity(&self, input: ActivityInput) -> Result<Activity, StorageError> {
        dispatch!(self, ActivityStore, create_activity(input))
    }

    async fn update_activity(
        &self,
        id: &str,
        update: ActivityUpdate,
    ) -> Result<Activity, StorageError> {
        dispatch!(self, ActivityStore, update_activity(id, update))
    }

    async fn delete_activity(&self, id: &str) -> Result<Activity, StorageError> {
        dispatch!(self, ActivityStore, delete_activity(id))
    }

    async fn get_activities_by_daily_plan(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, StorageError> {
        dispatch!(self, ActivityStore, get_activities_by_daily_plan(daily_plan_id))
    }
}
