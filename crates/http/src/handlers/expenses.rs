use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use voyage_core::{Expense, ExpenseInput, ExpenseUpdate};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ExpenseInput>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(state.expense_service.create(input).await?))
}

pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ExpenseUpdate>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(state.expense_service.update(&id, update).await?))
}

pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(state.expense_service.delete(&id).await?))
}

pub async fn list_budget_expenses(
    State(state): State<Arc<AppState>>,
    Path(budget_id): Path<String>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(state.expense_service.get_by_budget_id(&budget_id).await?))
}
