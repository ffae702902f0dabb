use std::sync::Arc;

use voyage_core::{Activity, ActivityInput, ActivityUpdate, ReorderResult};
use voyage_storage::StorageBackend;
use voyage_storage::traits::{ActivityStore, DailyPlanStore};

use crate::error::{ServiceError, require_id};

pub struct ActivityService {
    storage: Arc<StorageBackend>,
}

impl ActivityService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, input: ActivityInput) -> Result<Activity, ServiceError> {
        input.validate()?;
        if self.storage.get_daily_plan(&input.daily_plan_id).await?.is_none() {
            return Err(ServiceError::not_found("daily plan", &input.daily_plan_id));
        }
        Ok(self.storage.create_activity(input).await?)
    }

    pub async fn update(&self, id: &str, update: ActivityUpdate) -> Result<Activity, ServiceError> {
        require_id(id)?;
        update.validate()?;
        Ok(self.storage.update_activity(id, update).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<Activity, ServiceError> {
        require_id(id)?;
        Ok(self.storage.delete_activity(id).await?)
    }

    pub async fn get_by_daily_plan_id(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, ServiceError> {
        require_id(daily_plan_id)?;
        Ok(self.storage.get_activities_by_daily_plan(daily_plan_id).await?)
    }

    /// Accepts an ordering and echoes it back. Nothing is persisted: activities
    /// are always listed by time of day.
    #[must_use]
    pub fn reorder(&self, ordered_ids: Vec<String>) -> ReorderResult {
        ReorderResult::echo(ordered_ids)
    }
}
