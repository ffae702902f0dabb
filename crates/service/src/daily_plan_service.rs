use std::sync::Arc;

use voyage_core::{DailyPlan, DailyPlanInput, DailyPlanUpdate, DailyPlanWithActivities};
use voyage_storage::StorageBackend;
use voyage_storage::traits::{ActivityStore, DailyPlanStore, TripStore};

use crate::error::{ServiceError, require_id};

pub struct DailyPlanService {
    storage: Arc<StorageBackend>,
}

/// Attach the plan's activities, ordered by time of day.
pub(crate) async fn with_activities(
    storage: &StorageBackend,
    plan: DailyPlan,
) -> Result<DailyPlanWithActivities, ServiceError> {
    let activities = storage.get_activities_by_daily_plan(&plan.id).await?;
    Ok(DailyPlanWithActivities { plan, activities })
}

impl DailyPlanService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        input: DailyPlanInput,
    ) -> Result<DailyPlanWithActivities, ServiceError> {
        input.validate()?;
        if self.storage.get_trip(&input.trip_id).await?.is_none() {
            return Err(ServiceError::not_found("trip", &input.trip_id));
        }
        let plan = self.storage.create_daily_plan(input).await?;
        Ok(DailyPlanWithActivities { plan, activities: Vec::new() })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<DailyPlanWithActivities>, ServiceError> {
        require_id(id)?;
        match self.storage.get_daily_plan(id).await? {
            Some(plan) => Ok(Some(with_activities(&self.storage, plan).await?)),
            None => Ok(None),
        }
    }

    /// Plans by day number, unnumbered last.
    pub async fn get_by_trip_id(
        &self,
        trip_id: &str,
    ) -> Result<Vec<DailyPlanWithActivities>, ServiceError> {
        require_id(trip_id)?;
        let plans = self.storage.get_daily_plans_by_trip(trip_id).await?;
        let mut result = Vec::with_capacity(plans.len());
        for plan in plans {
            result.push(with_activities(&self.storage, plan).await?);
        }
        Ok(result)
    }

    pub async fn update(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlanWithActivities, ServiceError> {
        require_id(id)?;
        update.validate()?;
        let plan = self.storage.update_daily_plan(id, update).await?;
        with_activities(&self.storage, plan).await
    }

    /// Removes the plan and its activities.
    pub async fn delete(&self, id: &str) -> Result<DailyPlan, ServiceError> {
        require_id(id)?;
        Ok(self.storage.delete_daily_plan(id).await?)
    }
}
