use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use voyage_core::{Activity, ActivityInput, ActivityUpdate, ReorderRequest, ReorderResult};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ActivityInput>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.activity_service.create(input).await?))
}

pub async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ActivityUpdate>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.activity_service.update(&id, update).await?))
}

pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.activity_service.delete(&id).await?))
}

pub async fn list_plan_activities(
    State(state): State<Arc<AppState>>,
    Path(daily_plan_id): Path<String>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    Ok(Json(state.activity_service.get_by_daily_plan_id(&daily_plan_id).await?))
}

pub async fn reorder_activities(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReorderRequest>,
) -> Json<ReorderResult> {
    Json(state.activity_service.reorder(req.ordered_ids))
}
