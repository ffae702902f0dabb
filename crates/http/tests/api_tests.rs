//! Router tests over a temporary `SQLite` backend.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;
use voyage_http::{AppState, create_router};
use voyage_storage::StorageBackend;

fn app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let storage = StorageBackend::new_sqlite(&dir.path().join("api.db")).unwrap();
    let state = Arc::new(AppState::new(Arc::new(storage)));
    (create_router(state), dir)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

async fn create_paris(app: &Router) -> String {
    let (status, trip) = call(
        app,
        Method::POST,
        "/api/trips",
        Some(json!({
            "destination": "Paris",
            "startDate": "2025-06-01T00:00:00Z",
            "endDate": "2025-06-05T00:00:00Z",
            "status": "Planning"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    trip["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn health_and_version() {
    let (app, _dir) = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));

    let (status, body) = call(&app, Method::GET, "/api/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "sqlite");
}

#[tokio::test]
async fn expense_lifecycle_reconciles_spent() {
    let (app, _dir) = app();
    let trip_id = create_paris(&app).await;

    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    assert_eq!(budget["spent"], "0");
    let budget_id = budget["id"].as_str().unwrap().to_owned();

    let (status, flight) = call(
        &app,
        Method::POST,
        "/api/expenses",
        Some(json!({
            "budgetId": budget_id,
            "amount": "120.50",
            "description": "Flight",
            "expenseType": "PreTrip"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight["amount"], "120.50");

    call(
        &app,
        Method::POST,
        "/api/expenses",
        Some(json!({
            "budgetId": budget_id,
            "amount": 45,
            "description": "Dinner",
            "expenseType": "Daily"
        })),
    )
    .await;

    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    assert_eq!(budget["spent"], "165.50");
    assert_eq!(budget["expenses"].as_array().unwrap().len(), 2);

    let flight_id = flight["id"].as_str().unwrap();
    let (status, _) = call(&app, Method::DELETE, &format!("/api/expenses/{flight_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    assert_eq!(budget["spent"], "45");
}

#[tokio::test]
async fn refresh_restores_overwritten_spent() {
    let (app, _dir) = app();
    let trip_id = create_paris(&app).await;
    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    let budget_id = budget["id"].as_str().unwrap().to_owned();
    call(
        &app,
        Method::POST,
        "/api/expenses",
        Some(json!({
            "budgetId": budget_id,
            "amount": "12.34",
            "description": "Metro",
            "expenseType": "Daily"
        })),
    )
    .await;

    let (status, updated) = call(
        &app,
        Method::PUT,
        &format!("/api/trips/{trip_id}/budget"),
        Some(json!({"daily": 100, "preTrip": 0, "spent": 999, "total": 1500})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["spent"], "999");

    let (status, refreshed) =
        call(&app, Method::POST, &format!("/api/trips/{trip_id}/budget/refresh"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(refreshed["spent"], "12.34");
    assert_eq!(refreshed["total"], "1500");
}

#[tokio::test]
async fn unknown_trip_reads_null_and_refresh_is_404() {
    let (app, _dir) = app();
    let (status, body) = call(&app, Method::GET, "/api/trips/nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = call(&app, Method::POST, "/api/trips/nope/budget/refresh", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn validation_errors_are_400_with_message() {
    let (app, _dir) = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/trips",
        Some(json!({
            "destination": " ",
            "startDate": "2025-06-01T00:00:00Z",
            "endDate": "2025-06-05T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Destination is required");

    let (status, _) = call(&app, Method::GET, "/api/trips?status=Someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn trip_list_filters_by_status_and_embeds_budget() {
    let (app, _dir) = app();
    create_paris(&app).await;

    let (_, all) = call(&app, Method::GET, "/api/trips", None).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["destination"], "Paris");
    assert_eq!(all[0]["budget"]["total"], "0");

    let (_, none) = call(&app, Method::GET, "/api/trips?status=Booked", None).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn itinerary_routes_and_reorder_stub() {
    let (app, _dir) = app();
    let trip_id = create_paris(&app).await;

    let (status, plan) = call(
        &app,
        Method::POST,
        "/api/daily-plans",
        Some(json!({"tripId": trip_id, "dayNumber": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["activities"], json!([]));
    let plan_id = plan["id"].as_str().unwrap().to_owned();

    for (title, time) in [("Louvre", "14:00"), ("Breakfast", "08:00")] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/activities",
            Some(json!({"dailyPlanId": plan_id, "title": title, "time": time, "budget": "15"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, activities) =
        call(&app, Method::GET, &format!("/api/daily-plans/{plan_id}/activities"), None).await;
    assert_eq!(activities[0]["title"], "Breakfast");
    assert_eq!(activities[1]["title"], "Louvre");

    let (_, plans) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/daily-plans"), None).await;
    assert_eq!(plans[0]["activities"].as_array().unwrap().len(), 2);

    let (status, reorder) = call(
        &app,
        Method::POST,
        "/api/activities/reorder",
        Some(json!({"orderedIds": ["b", "", "a"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reorder["message"], "Activities reordered");
    assert_eq!(reorder["orderedIds"], json!(["b", "", "a"]));
    assert_eq!(reorder["success"], true);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/activities",
        Some(json!({"dailyPlanId": "missing", "title": "Ghost", "budget": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trip_delete_cascades_over_http() {
    let (app, _dir) = app();
    let trip_id = create_paris(&app).await;
    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    let budget_id = budget["id"].as_str().unwrap().to_owned();

    let (status, _) = call(&app, Method::DELETE, &format!("/api/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, budget) = call(&app, Method::GET, &format!("/api/trips/{trip_id}/budget"), None).await;
    assert_eq!(budget, Value::Null);
    let (_, expenses) =
        call(&app, Method::GET, &format!("/api/budgets/{budget_id}/expenses"), None).await;
    assert_eq!(expenses, json!([]));

    let (status, _) = call(&app, Method::DELETE, &format!("/api/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
