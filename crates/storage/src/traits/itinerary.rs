use async_trait::async_trait;
use voyage_core::{
    Activity, ActivityInput, ActivityUpdate, DailyPlan, DailyPlanInput, DailyPlanUpdate,
};

use crate::error::StorageError;

/// Daily plan operations.
#[async_trait]
pub trait DailyPlanStore: Send + Sync {
    async fn create_daily_plan(&self, input: DailyPlanInput) -> Result<DailyPlan, StorageError>;

    async fn get_daily_plan(&self, id: &str) -> Result<Option<DailyPlan>, StorageError>;

    /// Plans of a trip ordered by day number, unnumbered plans last.
    async fn get_daily_plans_by_trip(&self, trip_id: &str)
    -> Result<Vec<DailyPlan>, StorageError>;

    async fn update_daily_plan(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlan, StorageError>;

    /// Delete a plan and its activities.
    async fn delete_daily_plan(&self, id: &str) -> Result<DailyPlan, StorageError>;
}

/// Activity operations.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn create_activity(&self, input: ActivityInput) -> Result<Activity, StorageError>;

    async fn update_activity(
        &self,
        id: &str,
        update: ActivityUpdate,
    ) -> Result<Activity, StorageError>;

    async fn delete_activity(&self, id: &str) -> Result<Activity, StorageError>;

    /// Activities of a plan ordered by time, untimed activities last.
    async fn get_activities_by_daily_plan(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, StorageError>;
}
