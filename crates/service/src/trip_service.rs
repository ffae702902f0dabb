use std::collections::HashMap;
use std::sync::Arc;

use voyage_core::{BudgetWithExpenses, Trip, TripDetail, TripInput, TripStatus, TripWithBudget};
use voyage_storage::StorageBackend;
use voyage_storage::traits::{BudgetStore, DailyPlanStore, ExpenseStore, TripStore};

use crate::daily_plan_service::with_activities;
use crate::error::{ServiceError, require_id};

pub struct TripService {
    storage: Arc<StorageBackend>,
}

impl TripService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Creates the trip together with an all-zero budget.
    pub async fn create(&self, input: TripInput) -> Result<Trip, ServiceError> {
        input.validate()?;
        let trip = self.storage.create_trip(input).await?;
        tracing::info!(trip_id = %trip.id, destination = %trip.destination, "trip created");
        Ok(trip)
    }

    /// All trips by start date, each with its budget.
    pub async fn get_all(&self) -> Result<Vec<TripWithBudget>, ServiceError> {
        self.list(None).await
    }

    pub async fn get_all_by_status(
        &self,
        status: TripStatus,
    ) -> Result<Vec<TripWithBudget>, ServiceError> {
        self.list(Some(status)).await
    }

    async fn list(&self, status: Option<TripStatus>) -> Result<Vec<TripWithBudget>, ServiceError> {
        let trips = self.storage.list_trips(status).await?;
        let ids: Vec<String> = trips.iter().map(|t| t.id.clone()).collect();
        let mut budgets: HashMap<String, _> = self
            .storage
            .get_budgets_for_trips(&ids)
            .await?
            .into_iter()
            .map(|b| (b.trip_id.clone(), b))
            .collect();
        Ok(trips
            .into_iter()
            .map(|trip| {
                let budget = budgets.remove(&trip.id);
                TripWithBudget { trip, budget }
            })
            .collect())
    }

    /// The trip with its budget, expenses, daily plans and activities.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<TripDetail>, ServiceError> {
        require_id(id)?;
        let Some(trip) = self.storage.get_trip(id).await? else {
            return Ok(None);
        };

        let budget = match self.storage.get_budget_by_trip(id).await? {
            Some(budget) => {
                let expenses = self.storage.get_expenses_by_budget(&budget.id).await?;
                Some(BudgetWithExpenses { budget, expenses })
            },
            None => None,
        };

        let plans = self.storage.get_daily_plans_by_trip(id).await?;
        let mut daily_plans = Vec::with_capacity(plans.len());
        for plan in plans {
            daily_plans.push(with_activities(&self.storage, plan).await?);
        }

        Ok(Some(TripDetail { trip, budget, daily_plans }))
    }

    pub async fn update(&self, id: &str, input: TripInput) -> Result<Trip, ServiceError> {
        require_id(id)?;
        input.validate()?;
        Ok(self.storage.update_trip(id, input).await?)
    }

    /// Removes the trip and everything it owns.
    pub async fn delete(&self, id: &str) -> Result<Trip, ServiceError> {
        require_id(id)?;
        let trip = self.storage.delete_trip(id).await?;
        tracing::info!(trip_id = %trip.id, "trip deleted");
        Ok(trip)
    }

    /// Delete every trip. Used by the seed command.
    pub async fn clear(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.clear_trips().await?)
    }
}
