use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use voyage_core::{DailyPlan, DailyPlanInput, DailyPlanUpdate, DailyPlanWithActivities};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_daily_plan(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DailyPlanInput>,
) -> Result<Json<DailyPlanWithActivities>, ApiError> {
    Ok(Json(state.daily_plan_service.create(input).await?))
}

pub async fn get_daily_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<DailyPlanWithActivities>>, ApiError> {
    Ok(Json(state.daily_plan_service.get_by_id(&id).await?))
}

pub async fn list_trip_daily_plans(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<DailyPlanWithActivities>>, ApiError> {
    Ok(Json(state.daily_plan_service.get_by_trip_id(&trip_id).await?))
}

pub async fn update_daily_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<DailyPlanUpdate>,
) -> Result<Json<DailyPlanWithActivities>, ApiError> {
    Ok(Json(state.daily_plan_service.update(&id, update).await?))
}

pub async fn delete_daily_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DailyPlan>, ApiError> {
    Ok(Json(state.daily_plan_service.delete(&id).await?))
}
