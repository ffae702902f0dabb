use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use voyage_core::{Budget, Decimal, TripStatus, TripWithBudget};

use crate::open_state;

/// One line of `voyage trips` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TripSummary {
    id: String,
    destination: String,
    status: TripStatus,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration_days: i64,
    budget: Option<BudgetSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetSummary {
    total: Decimal,
    spent: Decimal,
    remaining: Decimal,
    /// Rounded to two places; absent when the ratio is out of range.
    spent_percentage: Option<Decimal>,
    overspent: bool,
}

impl From<&Budget> for BudgetSummary {
    fn from(budget: &Budget) -> Self {
        Self {
            total: budget.total,
            spent: budget.spent,
            remaining: budget.remaining(),
            spent_percentage: budget.spent_percentage().map(|p| p.round_dp(2)),
            overspent: budget.is_overspent(),
        }
    }
}

impl From<TripWithBudget> for TripSummary {
    fn from(row: TripWithBudget) -> Self {
        let duration_days = row.trip.duration_days();
        Self {
            duration_days,
            budget: row.budget.as_ref().map(BudgetSummary::from),
            id: row.trip.id,
            destination: row.trip.destination,
            status: row.trip.status,
            start_date: row.trip.start_date,
            end_date: row.trip.end_date,
        }
    }
}

pub(crate) async fn run_list(status: Option<String>) -> Result<()> {
    let status = status.as_deref().map(str::parse::<TripStatus>).transpose()?;
    let state = open_state().await?;
    let trips = match status {
        Some(status) => state.trip_service.get_all_by_status(status).await?,
        None => state.trip_service.get_all().await?,
    };
    let summaries: Vec<TripSummary> = trips.into_iter().map(TripSummary::from).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

pub(crate) async fn run_refresh(trip_id: &str) -> Result<()> {
    let state = open_state().await?;
    let budget = state.budget_service.refresh(trip_id).await?;
    println!("{}", serde_json::to_string_pretty(&budget)?);
    Ok(())
}
