#![expect(clippy::unwrap_used, reason = "test code")]

use super::*;
use crate::ServiceError;
use voyage_core::{ActivityInput, DailyPlanInput};

#[tokio::test]
async fn new_trip_has_one_zero_budget() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();

    let all = h.trips.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    let budget = all[0].budget.as_ref().unwrap();
    assert_eq!(budget.trip_id, trip.id);
    for amount in [budget.daily, budget.pre_trip, budget.spent, budget.total] {
        assert!(amount.is_zero());
    }
}

#[tokio::test]
async fn blank_destination_is_rejected() {
    let h = harness();
    let mut input = paris();
    input.destination = "  ".to_owned();
    let err = h.trips.create(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Destination is required");
    assert!(h.trips.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_all_by_status_filters() {
    let h = harness();
    h.trips.create(paris()).await.unwrap();
    let mut rome = paris();
    rome.destination = "Rome".to_owned();
    rome.status = TripStatus::Completed;
    h.trips.create(rome).await.unwrap();

    let completed = h.trips.get_all_by_status(TripStatus::Completed).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].trip.destination, "Rome");
    assert!(completed[0].budget.is_some());
}

#[tokio::test]
async fn get_by_id_assembles_the_whole_trip() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let budget_id = h.budgets.get_by_trip_id(&trip.id).await.unwrap().unwrap().budget.id;
    h.expenses.create(expense(&budget_id, "12.00", ExpenseType::Daily)).await.unwrap();
    let plan = h
        .daily_plans
        .create(DailyPlanInput { trip_id: trip.id.clone(), date: None, day_number: Some(1) })
        .await
        .unwrap();
    h.activities
        .create(ActivityInput {
            daily_plan_id: plan.plan.id.clone(),
            title: "Eiffel Tower".to_owned(),
            description: None,
            time: Some("10:00".to_owned()),
            budget: dec("29.40"),
        })
        .await
        .unwrap();

    let detail = h.trips.get_by_id(&trip.id).await.unwrap().unwrap();
    assert_eq!(detail.trip.id, trip.id);
    let budget = detail.budget.unwrap();
    assert_eq!(budget.budget.spent, dec("12.00"));
    assert_eq!(budget.expenses.len(), 1);
    assert_eq!(detail.daily_plans.len(), 1);
    assert_eq!(detail.daily_plans[0].activities[0].title, "Eiffel Tower");
}

#[tokio::test]
async fn get_by_id_for_unknown_trip_is_none() {
    let h = harness();
    assert!(h.trips.get_by_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn update_missing_trip_is_not_found() {
    let h = harness();
    let err = h.trips.update("missing", paris()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_cascades_through_the_service() {
    let h = harness();
    let trip = h.trips.create(paris()).await.unwrap();
    let budget_id = h.budgets.get_by_trip_id(&trip.id).await.unwrap().unwrap().budget.id;
    h.expenses.create(expense(&budget_id, "5", ExpenseType::Daily)).await.unwrap();
    let plan = h
        .daily_plans
        .create(DailyPlanInput { trip_id: trip.id.clone(), date: None, day_number: Some(1) })
        .await
        .unwrap();

    let deleted = h.trips.delete(&trip.id).await.unwrap();
    assert_eq!(deleted.id, trip.id);
    assert!(h.budgets.get_by_trip_id(&trip.id).await.unwrap().is_none());
    assert!(h.expenses.get_by_budget_id(&budget_id).await.unwrap().is_empty());
    assert!(h.daily_plans.get_by_id(&plan.plan.id).await.unwrap().is_none());
    assert!(matches!(h.trips.delete(&trip.id).await, Err(ref e) if e.is_not_found()));
}

#[tokio::test]
async fn blank_ids_are_invalid_input() {
    let h = harness();
    assert!(matches!(h.trips.get_by_id("").await, Err(ServiceError::InvalidInput(_))));
    assert!(matches!(h.budgets.refresh(" ").await, Err(ServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn sub_microsecond_dates_match_what_is_read_back() {
    let h = harness();
    let mut input = paris();
    input.start_date += chrono::Duration::nanoseconds(123_456_789);
    input.end_date += chrono::Duration::nanoseconds(987_654_321);
    let created = h.trips.create(input).await.unwrap();

    let plan = h
        .daily_plans
        .create(DailyPlanInput {
            trip_id: created.id.clone(),
            date: Some(created.start_date + chrono::Duration::nanoseconds(999)),
            day_number: Some(1),
        })
        .await
        .unwrap();

    let detail = h.trips.get_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(detail.trip.start_date, created.start_date);
    assert_eq!(detail.trip.end_date, created.end_date);
    assert_eq!(detail.daily_plans[0].plan.date, plan.plan.date);
    assert_eq!(created.start_date.timestamp_subsec_nanos(), 123_456_000);
}
