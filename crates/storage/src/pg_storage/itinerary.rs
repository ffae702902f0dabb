//! DailyPlanStore and ActivityStore implementations for PgStorage.

use super::*;

use crate::traits::{ActivityStore, DailyPlanStore};
use async_trait::async_trait;
use voyage_core::{ActivityInput, ActivityUpdate, DailyPlanInput, DailyPlanUpdate};

#[async_trait]
impl DailyPlanStore for PgStorage {
    async fn create_daily_plan(&self, input: DailyPlanInput) -> Result<DailyPlan, StorageError> {
        let plan = DailyPlan::new(new_id(), input, crate::now());
        sqlx::query(&format!("INSERT INTO daily_plans ({PLAN_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6)"))
            .bind(&plan.id)
            .bind(&plan.trip_id)
            .bind(plan.date)
            .bind(plan.day_number)
            .bind(plan.created_at)
            .bind(plan.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(plan)
    }

    async fn get_daily_plan(&self, id: &str) -> Result<Option<DailyPlan>, StorageError> {
        let row = sqlx::query(&format!("SELECT {PLAN_COLUMNS} FROM daily_plans WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_daily_plan(&r)).transpose()
    }

    async fn get_daily_plans_by_trip(
        &self,
        trip_id: &str,
    ) -> Result<Vec<DailyPlan>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PLAN_COLUMNS} FROM daily_plans WHERE trip_id = $1
             ORDER BY day_number ASC NULLS LAST, created_at ASC"
        ))
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_daily_plan).collect()
    }

    async fn update_daily_plan(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlan, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "SELECT {PLAN_COLUMNS} FROM daily_plans WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::not_found("daily plan", id))?;
        let mut plan = row_to_daily_plan(&row)?;
        plan.apply(update, crate::now());
        sqlx::query("UPDATE daily_plans SET date = $1, day_number = $2, updated_at = $3 WHERE id = $4")
            .bind(plan.date)
            .bind(plan.day_number)
            .bind(plan.updated_at)
            .bind(&plan.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(plan)
    }

    async fn delete_daily_plan(&self, id: &str) -> Result<DailyPlan, StorageError> {
        let row = sqlx::query(&format!(
            "DELETE FROM daily_plans WHERE id = $1 RETURNING {PLAN_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("daily plan", id))?;
        row_to_daily_plan(&row)
    }
}

#[async_trait]
impl ActivityStore for PgStorage {
    async fn create_activity(&self, input: ActivityInput) -> Result<Activity, StorageError> {
        let activity = Activity::new(new_id(), input, crate::now());
        sqlx::query(&format!(
            "INSERT INTO activities ({ACTIVITY_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7,$8)"
        ))
        .bind(&activity.id)
        .bind(&activity.daily_plan_id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(&activity.time)
        .bind(activity.budget)
        .bind(activity.created_at)
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(activity)
    }

    async fn update_activity(
        &self,
        id: &str,
        update: ActivityUpdate,
    ) -> Result<Activity, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::not_found("activity", id))?;
        let mut activity = row_to_activity(&row)?;
        activity.apply(update, crate::now());
        sqlx::query(
            "UPDATE activities SET title = $1, description = $2, time = $3, budget = $4,
               updated_at = $5
             WHERE id = $6",
        )
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(&activity.time)
        .bind(activity.budget)
        .bind(activity.updated_at)
        .bind(&activity.id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(activity)
    }

    async fn delete_activity(&self, id: &str) -> Result<Activity, StorageError> {
        let row = sqlx::query(&format!(
            "DELETE FROM activities WHERE id = $1 RETURNING {ACTIVITY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("activity", id))?;
        row_to_activity(&row)
    }

    async fn get_activities_by_daily_plan(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE daily_plan_id = $1
             ORDER BY time ASC NULLS LAST, created_at ASC"
        ))
        .bind(daily_plan_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_activity).collect()
    }
}
