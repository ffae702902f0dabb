use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use voyage_core::{Trip, TripDetail, TripInput, TripStatus, TripWithBudget};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::TripListQuery;

pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TripInput>,
) -> Result<Json<Trip>, ApiError> {
    Ok(Json(state.trip_service.create(input).await?))
}

pub async fn list_trips(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TripListQuery>,
) -> Result<Json<Vec<TripWithBudget>>, ApiError> {
    let trips = match query.status.as_deref() {
        Some(raw) => {
            let status = raw
                .parse::<TripStatus>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            state.trip_service.get_all_by_status(status).await?
        },
        None => state.trip_service.get_all().await?,
    };
    Ok(Json(trips))
}

/// Responds `null` for an unknown id.
pub async fn get_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<TripDetail>>, ApiError> {
    Ok(Json(state.trip_service.get_by_id(&id).await?))
}

pub async fn update_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<TripInput>,
) -> Result<Json<Trip>, ApiError> {
    Ok(Json(state.trip_service.update(&id, input).await?))
}

pub async fn delete_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, ApiError> {
    Ok(Json(state.trip_service.delete(&id).await?))
}
