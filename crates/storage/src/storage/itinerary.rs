use rusqlite::{OptionalExtension as _, params};
use voyage_core::{
    Activity, ActivityInput, ActivityUpdate, DailyPlan, DailyPlanInput, DailyPlanUpdate,
};

use super::{
    Storage, format_instant, get_conn, get_decimal, get_instant, get_opt_instant, new_id,
};
use crate::error::StorageError;

const PLAN_COLUMNS: &str = "id, trip_id, date, day_number, created_at, updated_at";
const ACTIVITY_COLUMNS: &str =
    "id, daily_plan_id, title, description, time, budget, created_at, updated_at";

impl Storage {
    /// Insert a daily plan.
    ///
    /// # Errors
    /// Returns `Constraint` if the trip does not exist.
    pub fn create_daily_plan(&self, input: DailyPlanInput) -> Result<DailyPlan, StorageError> {
        let plan = DailyPlan::new(new_id(), input, crate::now());
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!("INSERT INTO daily_plans ({PLAN_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            params![
                plan.id,
                plan.trip_id,
                plan.date.as_ref().map(format_instant),
                plan.day_number,
                format_instant(&plan.created_at),
                format_instant(&plan.updated_at),
            ],
        )?;
        Ok(plan)
    }

    /// Get daily plan by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_daily_plan(&self, id: &str) -> Result<Option<DailyPlan>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let plan = conn
            .query_row(
                &format!("SELECT {PLAN_COLUMNS} FROM daily_plans WHERE id = ?1"),
                params![id],
                map_daily_plan,
            )
            .optional()?;
        Ok(plan)
    }

    /// Daily plans of a trip by day number; unnumbered plans last.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_daily_plans_by_trip(&self, trip_id: &str) -> Result<Vec<DailyPlan>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PLAN_COLUMNS} FROM daily_plans WHERE trip_id = ?1
             ORDER BY day_number IS NULL, day_number ASC, created_at ASC"
        ))?;
        let plans = stmt.query_map(params![trip_id], map_daily_plan)?.collect::<Result<_, _>>()?;
        Ok(plans)
    }

    /// # Errors
    /// Returns `NotFound` if the plan does not exist.
    pub fn update_daily_plan(
        &self,
        id: &str,
        update: DailyPlanUpdate,
    ) -> Result<DailyPlan, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut plan = tx
            .query_row(
                &format!("SELECT {PLAN_COLUMNS} FROM daily_plans WHERE id = ?1"),
                params![id],
                map_daily_plan,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("daily plan", id))?;
        plan.apply(update, crate::now());
        tx.execute(
            "UPDATE daily_plans SET date = ?1, day_number = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                plan.date.as_ref().map(format_instant),
                plan.day_number,
                format_instant(&plan.updated_at),
                plan.id,
            ],
        )?;
        tx.commit()?;
        Ok(plan)
    }

    /// Delete a daily plan; its activities cascade.
    ///
    /// # Errors
    /// Returns `NotFound` if the plan does not exist.
    pub fn delete_daily_plan(&self, id: &str) -> Result<DailyPlan, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("DELETE FROM daily_plans WHERE id = ?1 RETURNING {PLAN_COLUMNS}"),
            params![id],
            map_daily_plan,
        )
        .optional()?
        .ok_or_else(|| StorageError::not_found("daily plan", id))
    }

    /// Insert an activity.
    ///
    /// # Errors
    /// Returns `Constraint` if the daily plan does not exist.
    pub fn create_activity(&self, input: ActivityInput) -> Result<Activity, StorageError> {
        let activity = Activity::new(new_id(), input, crate::now());
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!(
                "INSERT INTO activities ({ACTIVITY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ),
            params![
                activity.id,
                activity.daily_plan_id,
                activity.title,
                activity.description,
                activity.time,
                activity.budget.to_string(),
                format_instant(&activity.created_at),
                format_instant(&activity.updated_at),
            ],
        )?;
        Ok(activity)
    }

    /// # Errors
    /// Returns `NotFound` if the activity does not exist.
    pub fn update_activity(
        &self,
        id: &str,
        update: ActivityUpdate,
    ) -> Result<Activity, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut activity = tx
            .query_row(
                &format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = ?1"),
                params![id],
                map_activity,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("activity", id))?;
        activity.apply(update, crate::now());
        tx.execute(
            "UPDATE activities SET title = ?1, description = ?2, time = ?3, budget = ?4,
               updated_at = ?5
             WHERE id = ?6",
            params![
                activity.title,
                activity.description,
                activity.time,
                activity.budget.to_string(),
                format_instant(&activity.updated_at),
                activity.id,
            ],
        )?;
        tx.commit()?;
        Ok(activity)
    }

    /// # Errors
    /// Returns `NotFound` if the activity does not exist.
    pub fn delete_activity(&self, id: &str) -> Result<Activity, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("DELETE FROM activities WHERE id = ?1 RETURNING {ACTIVITY_COLUMNS}"),
            params![id],
            map_activity,
        )
        .optional()?
        .ok_or_else(|| StorageError::not_found("activity", id))
    }

    /// Activities of a plan by time of day; untimed activities last.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_activities_by_daily_plan(
        &self,
        daily_plan_id: &str,
    ) -> Result<Vec<Activity>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE daily_plan_id = ?1
             ORDER BY time IS NULL, time ASC, created_at ASC"
        ))?;
        let activities =
            stmt.query_map(params![daily_plan_id], map_activity)?.collect::<Result<_, _>>()?;
        Ok(activities)
    }
}

fn map_daily_plan(row: &rusqlite::Row<'_>) -> rusqlite::Result<DailyPlan> {
    Ok(DailyPlan {
        id: row.get(0)?,
        trip_id: row.get(1)?,
        date: get_opt_instant(row, 2)?,
        day_number: row.get(3)?,
        created_at: get_instant(row, 4)?,
        updated_at: get_instant(row, 5)?,
    })
}

fn map_activity(row: &rusqlite::Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        daily_plan_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        time: row.get(4)?,
        budget: get_decimal(row, 5)?,
        created_at: get_instant(row, 6)?,
        updated_at: get_instant(row, 7)?,
    })
}
