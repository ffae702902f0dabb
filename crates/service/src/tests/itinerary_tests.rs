#![expect(clippy::unwrap_used, reason = "test code")]

use super::*;
use crate::ServiceError;
use voyage_core::{ActivityInput, ActivityUpdate, DailyPlanInput, DailyPlanUpdate};

fn plan(trip_id: &str, day_number: Option<i32>) -> DailyPlanInput {
    DailyPlanInput { trip_id: trip_id.to_owned(), date: None, day_number }
}

fn activity(plan_id: &str, title: &str, time: Option<&str>) -> ActivityInput {
    ActivityInput {
        daily_plan_id: plan_id.to_owned(),
        title: title.to_owned(),
        description: Some("notes".to_owned()),
        time: time.map(str::to_owned),
        budget: dec("10"),
    }
}

#[tokio::test]
async fn plan_for_unknown_trip_is_not_found() {
    let h = harness();
    let err = h.daily_plans.create(plan("missing", Some(1))).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "trip", .. }));
}

#[tokio::test]
async fn zero_day_number_is_rejected() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let err = h.daily_plans.create(plan(&trip.id, Some(0))).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn plans_come_back_with_ordered_activities() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let day2 = h.daily_plans.create(plan(&trip.id, Some(2))).await.unwrap();
    let day1 = h.daily_plans.create(plan(&trip.id, Some(1))).await.unwrap();
    assert!(day1.activities.is_empty());

    h.activities.create(activity(&day1.plan.id, "Lunch", Some("12:30"))).await.unwrap();
    h.activities.create(activity(&day1.plan.id, "Stroll", None)).await.unwrap();
    h.activities.create(activity(&day1.plan.id, "Croissant", Some("08:00"))).await.unwrap();

    let plans = h.daily_plans.get_by_trip_id(&trip.id).await.unwrap();
    let ids: Vec<_> = plans.iter().map(|p| p.plan.id.as_str()).collect();
    assert_eq!(ids, [day1.plan.id.as_str(), day2.plan.id.as_str()]);

    let titles: Vec<_> = plans[0].activities.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Croissant", "Lunch", "Stroll"]);
}

#[tokio::test]
async fn plan_update_keeps_absent_fields_and_returns_activities() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let created = h.daily_plans.create(plan(&trip.id, Some(4))).await.unwrap();
    h.activities.create(activity(&created.plan.id, "Market", Some("09:00"))).await.unwrap();

    let updated = h.daily_plans.update(&created.plan.id, DailyPlanUpdate::default()).await.unwrap();
    assert_eq!(updated.plan.day_number, Some(4));
    assert_eq!(updated.activities.len(), 1);
}

#[tokio::test]
async fn activity_update_keeps_description_when_absent() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let day = h.daily_plans.create(plan(&trip.id, Some(1))).await.unwrap();
    let created = h.activities.create(activity(&day.plan.id, "Louvre", Some("14:00"))).await.unwrap();

    let update = ActivityUpdate {
        title: "Louvre (late entry)".to_owned(),
        description: None,
        time: Some("18:00".to_owned()),
        budget: dec("22"),
    };
    let updated = h.activities.update(&created.id, update).await.unwrap();
    assert_eq!(updated.description.as_deref(), Some("notes"));
    assert_eq!(updated.time.as_deref(), Some("18:00"));
    assert_eq!(updated.budget, dec("22"));
}

#[tokio::test]
async fn activity_validation_messages() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let day = h.daily_plans.create(plan(&trip.id, Some(1))).await.unwrap();

    let mut negative = activity(&day.plan.id, "Opera", None);
    negative.budget = dec("-3");
    let err = h.activities.create(negative).await.unwrap_err();
    assert_eq!(err.to_string(), "Budget must be a positive number");

    let err = h.activities.create(activity(&day.plan.id, "", None)).await.unwrap_err();
    assert_eq!(err.to_string(), "Title is required");
}

#[tokio::test]
async fn activity_for_unknown_plan_is_not_found() {
    let h = harness();
    let err = h.activities.create(activity("missing", "Louvre", None)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "daily plan", .. }));
}

#[tokio::test]
async fn deleting_plan_removes_its_activities() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let day = h.daily_plans.create(plan(&trip.id, Some(1))).await.unwrap();
    h.activities.create(activity(&day.plan.id, "Louvre", None)).await.unwrap();

    let deleted = h.daily_plans.delete(&day.plan.id).await.unwrap();
    assert_eq!(deleted.id, day.plan.id);
    assert!(h.activities.get_by_daily_plan_id(&day.plan.id).await.unwrap().is_empty());
}

#[test]
fn reorder_echoes_ids() {
    let h = harness();
    let ids = vec!["b".to_owned(), "a".to_owned()];
    let result = h.activities.reorder(ids.clone());
    assert!(result.success);
    assert_eq!(result.message, "Activities reordered");
    assert_eq!(result.ordered_ids, ids);
}

#[test]
fn reorder_echoes_blank_and_empty_input_unchanged() {
    let h = harness();
    let ids = vec!["a1".to_owned(), String::new()];
    let result = h.activities.reorder(ids.clone());
    assert!(result.success);
    assert_eq!(result.ordered_ids, ids);

    assert!(h.activities.reorder(Vec::new()).ordered_ids.is_empty());
}
