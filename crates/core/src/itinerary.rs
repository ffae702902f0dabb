//! Daily plans and the activities scheduled inside them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::REORDER_MESSAGE;
use crate::error::CoreError;
use crate::instant::to_stored_precision;
use crate::validation::{require_non_empty, require_non_negative};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub id: String,
    pub trip_id: String,
    pub date: Option<DateTime<Utc>>,
    pub day_number: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyPlan {
    #[must_use]
    pub fn new(id: String, input: DailyPlanInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            trip_id: input.trip_id,
            date: input.date.map(to_stored_precision),
            day_number: input.day_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// Absent fields leave the stored values untouched.
    pub fn apply(&mut self, update: DailyPlanUpdate, now: DateTime<Utc>) {
        if let Some(date) = update.date {
            self.date = Some(to_stored_precision(date));
        }
        if update.day_number.is_some() {
            self.day_number = update.day_number;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlanInput {
    pub trip_id: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub day_number: Option<i32>,
}

impl DailyPlanInput {
    pub fn validate(&self) -> crate::Result<()> {
        require_non_empty(&self.trip_id, "Trip id is required")?;
        validate_day_number(self.day_number)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlanUpdate {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub day_number: Option<i32>,
}

impl DailyPlanUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        validate_day_number(self.day_number)
    }
}

fn validate_day_number(day_number: Option<i32>) -> crate::Result<()> {
    match day_number {
        Some(n) if n <= 0 => Err(CoreError::InvalidInput("Day number must be positive".to_owned())),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlanWithActivities {
    #[serde(flatten)]
    pub plan: DailyPlan,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub daily_plan_id: String,
    pub title: String,
    pub description: Option<String>,
    pub time: Option<String>,
    /// Planned spend for this activity; independent of the trip budget's `spent`.
    pub budget: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    #[must_use]
    pub fn new(id: String, input: ActivityInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            daily_plan_id: input.daily_plan_id,
            title: input.title,
            description: input.description,
            time: input.time,
            budget: input.budget,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: ActivityUpdate, now: DateTime<Utc>) {
        self.title = update.title;
        self.budget = update.budget;
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.time.is_some() {
            self.time = update.time;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub daily_plan_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    pub budget: Decimal,
}

impl ActivityInput {
    pub fn validate(&self) -> crate::Result<()> {
        require_non_empty(&self.daily_plan_id, "Daily plan id is required")?;
        validate_activity(&self.title, self.budget)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUpdate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    pub budget: Decimal,
}

impl ActivityUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        validate_activity(&self.title, self.budget)
    }
}

fn validate_activity(title: &str, budget: Decimal) -> crate::Result<()> {
    require_non_negative(budget, "Budget must be a positive number")?;
    require_non_empty(title, "Title is required")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub ordered_ids: Vec<String>,
}

/// Echo returned by `activity.reorder`. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResult {
    pub message: String,
    pub ordered_ids: Vec<String>,
    pub success: bool,
}

impl ReorderResult {
    #[must_use]
    pub fn echo(ordered_ids: Vec<String>) -> Self {
        Self { message: REORDER_MESSAGE.to_owned(), ordered_ids, success: true }
    }
}
