use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use voyage_core::{Budget, BudgetInput, BudgetWithExpenses};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Option<BudgetWithExpenses>>, ApiError> {
    Ok(Json(state.budget_service.get_by_trip_id(&trip_id).await?))
}

pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
    Json(input): Json<BudgetInput>,
) -> Result<Json<Budget>, ApiError> {
    Ok(Json(state.budget_service.update(&trip_id, input).await?))
}

pub async fn refresh_budget(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Budget>, ApiError> {
    Ok(Json(state.budget_service.refresh(&trip_id).await?))
}
