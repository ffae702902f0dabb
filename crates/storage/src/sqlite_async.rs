//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use voyage_core::{
    Activity, ActivityInput, ActivityUpdate, Budget, BudgetInput, DailyPlan, DailyPlanInput,
    DailyPlanUpdate, Expense, ExpenseInput, ExpenseUpdate, Trip, TripInput, TripStatus,
};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{ActivityStore, BudgetStore, DailyPlanStore, ExpenseStore, TripStore};

/// Run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@str arg`   `.to_owned()` a `&str`, pass as `&arg`
/// - `@slice arg` `.to_vec()` a `&[T]`, pass as `&arg`
/// - `@val arg`   move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass str $arg:ident) => { &$arg };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── TripStore ────────────────────────────────────────────────────

#[async_trait]
impl TripStore for Storage {
    async fn create_trip(&self, input: TripInput) -> Result<Trip, StorageError> {
        delegate!(self, create_trip, @val input)
    }
    async fn list_trips(&self, status: Option<TripStatus>) -> Result<Vec<Trip>, StorageError> {
        delegate!(self, list_trips, @val status)
    }
    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        delegate!(self, get_trip, @str id)
    }
    async fn update_trip(&self, id: &str, input: TripInput) -> Result<Trip, StorageError> {
        delegate!(self, update_trip, @str id, @val input)
    }
    async fn delete_trip(&self, id: &str) -> Result<Trip, StorageError> {
        delegate!(self, delete_trip, @str id)
    }
    async fn clear_trips(&self) -> Result<usize, StorageError> {
        delegate!(self, clear_trips)
    }
}

// ── BudgetStore ──────────────────────────────────────────────────

#[async_trait]
impl BudgetStore for Storage {
    async fn get_budget(&self, id: &str) -> Result<Option<Budget>, StorageError> {
        delegate!(self, get_budget, @str id)
    }
    async fn get_budget_by_trip(&self, trip_id: &str) -> Result<Option<Budget>, StorageError> {
        delegate!(self, get_budget_by_trip, @str trip_id)
    }
    async fn get_budgets_for_trips(
        &self,
        trip_ids: &[String],
    ) -> Result<Vec<Budget>, StorageError> {
        delegate!(self, get_budgets_for_trips, @slice trip_ids)
    }
    async fn update_budget_by_trip(
        &self,
        trip_id: &str,
        input: BudgetInput,
    ) -> Result<Budget, StorageError> {
        delegate!(self, update_budget_by_trip, @str trip_id, @val input)
    }
    async fn set_budget_spent(
        &self,
        budget_id: &str,
        spent: Decimal,
    ) -> Result<Option<Budget>, StorageError> {
        delegate!(self, set_budget_spent, @str budget_id, @val spent)
    }
}

// ── ExpenseStore ─────────────────────────────────────────────────

#[async_trait]
impl ExpenseStore for Storage {
    async fn create_expense(&self, input: ExpenseInput) -> Result<Expense, StorageError> {
        delegate!(self, create_expense, @val input)
    }
    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, StorageError> {
        delegate!(self, get_expense, @str id)
    }
    async fn update_expense(
        &self,
        id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense, StorageError> {
        delegate!(self, update_expense, @str id, @val update)
    }
    async fn delete_expense(&self, id: &str) -> Result<Expense, StorageError> {
        delegate!(self, delete_expense, @str id)
    }
    async fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>, StorageError> {
        delegate!(self, get_expenses_by_budget, @str budget_id)
    }
}

// ── DailyPlanStore ───────────────────────────────────────────────

#[async_trait]
impl DailyPlanStore for Storage {
    async fn create_daily_plan(&self, input: DailyPlanInput) -> Result<DailyPlan, StorageError> {
        delegate!(self, create_daily_plan, @val input)
    }
    async fn get_daily_plan(&self, id: &str) -> Result<Option<DailyPlan>, StorageError> {
        delegate!(self, get_daily_plan, @str id)
    }
    async fn get_daily_plans_by_trip(
        &self,
        trip_id: &str,
    ) -> Result<Vec<DailyPlan>, StorageError> {
        delegate!(self, get_daily_plans_by_trip, @str trip_id)
    }
    async fn update_daily_plan(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlan, StorageError> {
        delegate!(self, update_daily_plan, @str id, @val update)
    }
    async fn delete_daily_plan(&self, id: &str) -> Result<DailyPlan, StorageError> {
        delegate!(self, delete_daily_plan, @str id)
    }
}

// ── ActivityStore ────────────────────────────────────────────────

#[async_trait]
impl ActivityStore for Storage {
    async fn create_activity(&self, input: ActivityInput) -> Result<Activity, StorageError> {
        delegate!(self, create_activity, @val input)
    }
    async fn update_activity(
        &self,
        id: &str,
        update: ActivityUpdate,
    ) -> Result<Activity, StorageError> {
        delegate!(self, update_activity, @str id, @val update)
    }
    async fn delete_activity(&self, id: &str) -> Result<Activity, StorageError> {
        delegate!(self, delete_activity, @str id)
    }
    async fn get_activities_by_daily_plan(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, StorageError> {
        delegate!(self, get_activities_by_daily_plan, @str daily_plan_id)
    }
}
