//! HTTP API server for voyage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::Method,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use voyage_service::{
    ActivityService, BudgetService, DailyPlanService, ExpenseService, TripService,
};
use voyage_storage::StorageBackend;

pub use api_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    pub trip_service: Arc<TripService>,
    pub budget_service: Arc<BudgetService>,
    pub expense_service: Arc<ExpenseService>,
    pub daily_plan_service: Arc<DailyPlanService>,
    pub activity_service: Arc<ActivityService>,
    /// Storage backend name reported by `/api/version`
    pub backend: &'static str,
}

impl AppState {
    /// Wire every service onto one storage backend.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        let backend = storage.kind();
        let budget_service = Arc::new(BudgetService::new(Arc::clone(&storage)));
        Self {
            trip_service: Arc::new(TripService::new(Arc::clone(&storage))),
            expense_service: Arc::new(ExpenseService::new(
                Arc::clone(&storage),
                Arc::clone(&budget_service),
            )),
            daily_plan_service: Arc::new(DailyPlanService::new(Arc::clone(&storage))),
            activity_service: Arc::new(ActivityService::new(storage)),
            budget_service,
            backend,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/trips",
            post(handlers::trips::create_trip).get(handlers::trips::list_trips),
        )
        .route(
            "/api/trips/{id}",
            get(handlers::trips::get_trip)
                .put(handlers::trips::update_trip)
                .delete(handlers::trips::delete_trip),
        )
        .route(
            "/api/trips/{id}/budget",
            get(handlers::budgets::get_budget).put(handlers::budgets::update_budget),
        )
        .route("/api/trips/{id}/budget/refresh", post(handlers::budgets::refresh_budget))
        .route("/api/trips/{id}/daily-plans", get(handlers::daily_plans::list_trip_daily_plans))
        .route("/api/expenses", post(handlers::expenses::create_expense))
        .route(
            "/api/expenses/{id}",
            put(handlers::expenses::update_expense).delete(handlers::expenses::delete_expense),
        )
        .route("/api/budgets/{id}/expenses", get(handlers::expenses::list_budget_expenses))
        .route("/api/daily-plans", post(handlers::daily_plans::create_daily_plan))
        .route(
            "/api/daily-plans/{id}",
            get(handlers::daily_plans::get_daily_plan)
                .put(handlers::daily_plans::update_daily_plan)
                .delete(handlers::daily_plans::delete_daily_plan),
        )
        .route(
            "/api/daily-plans/{id}/activities",
            get(handlers::activities::list_plan_activities),
        )
        .route("/api/activities", post(handlers::activities::create_activity))
        .route("/api/activities/reorder", post(handlers::activities::reorder_activities))
        .route(
            "/api/activities/{id}",
            put(handlers::activities::update_activity)
                .delete(handlers::activities::delete_activity),
        )
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION"), backend: state.backend })
}
