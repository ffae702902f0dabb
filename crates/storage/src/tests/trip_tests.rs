#![expect(clippy::unwrap_used, reason = "test code")]

use super::*;
use crate::StorageError;
use crate::traits::{BudgetStore, TripStore};
use voyage_core::BudgetInput;

#[test]
fn create_trip_adds_zero_budget() {
    let (storage, _dir) = create_test_storage();
    let trip = storage.create_trip(trip_input("Paris", 1)).unwrap();

    let budget = storage.get_budget_by_trip(&trip.id).unwrap().unwrap();
    assert_eq!(budget.trip_id, trip.id);
    assert!(budget.daily.is_zero());
    assert!(budget.pre_trip.is_zero());
    assert!(budget.spent.is_zero());
    assert!(budget.total.is_zero());
}

#[test]
fn list_trips_orders_by_start_date_and_filters_status() {
    let (storage, _dir) = create_test_storage();
    storage.create_trip(trip_input("Rome", 20)).unwrap();
    let mut booked = trip_input("Lisbon", 3);
    booked.status = TripStatus::Booked;
    storage.create_trip(booked).unwrap();
    storage.create_trip(trip_input("Oslo", 10)).unwrap();

    let all = storage.list_trips(None).unwrap();
    let names: Vec<_> = all.iter().map(|t| t.destination.as_str()).collect();
    assert_eq!(names, ["Lisbon", "Oslo", "Rome"]);

    let only_booked = storage.list_trips(Some(TripStatus::Booked)).unwrap();
    assert_eq!(only_booked.len(), 1);
    assert_eq!(only_booked[0].destination, "Lisbon");
}

#[test]
fn update_trip_keeps_absent_descriptors() {
    let (storage, _dir) = create_test_storage();
    let mut input = trip_input("Paris", 1);
    input.flight = Some("AF123".to_owned());
    let trip = storage.create_trip(input).unwrap();

    let mut change = trip_input("Paris, France", 2);
    change.status = TripStatus::Planning;
    let updated = storage.update_trip(&trip.id, change).unwrap();

    assert_eq!(updated.destination, "Paris, France");
    assert_eq!(updated.flight.as_deref(), Some("AF123"));
    assert_eq!(updated.status, TripStatus::Planning);
    let stored = storage.get_trip(&trip.id).unwrap().unwrap();
    assert_eq!(stored.destination, updated.destination);
    assert_eq!(stored.flight, updated.flight);
}

#[test]
fn update_missing_trip_is_not_found() {
    let (storage, _dir) = create_test_storage();
    let err = storage.update_trip("missing", trip_input("Nowhere", 1)).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "trip", .. }));
}

#[test]
fn delete_trip_returns_row_and_removes_budget() {
    let (storage, _dir) = create_test_storage();
    let trip = storage.create_trip(trip_input("Paris", 1)).unwrap();
    let budget = storage.get_budget_by_trip(&trip.id).unwrap().unwrap();

    let deleted = storage.delete_trip(&trip.id).unwrap();
    assert_eq!(deleted.id, trip.id);
    assert!(storage.get_trip(&trip.id).unwrap().is_none());
    assert!(storage.get_budget(&budget.id).unwrap().is_none());

    let again = storage.delete_trip(&trip.id).unwrap_err();
    assert!(matches!(again, StorageError::NotFound { .. }));
}

#[test]
fn budgets_for_trips_handles_empty_and_partial_lists() {
    let (storage, _dir) = create_test_storage();
    let a = storage.create_trip(trip_input("Paris", 1)).unwrap();
    storage.create_trip(trip_input("Rome", 2)).unwrap();

    assert!(storage.get_budgets_for_trips(&[]).unwrap().is_empty());
    let found = storage.get_budgets_for_trips(&[a.id.clone(), "missing".to_owned()]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].trip_id, a.id);
}

#[test]
fn update_budget_overwrites_amounts_exactly() {
    let (storage, _dir) = create_test_storage();
    let trip = storage.create_trip(trip_input("Paris", 1)).unwrap();
    let input = BudgetInput {
        daily: dec("150.00"),
        pre_trip: dec("1000.10"),
        spent: dec("0.20"),
        total: dec("2500.30"),
    };

    let budget = storage.update_budget_by_trip(&trip.id, input).unwrap();
    assert_eq!(budget.daily, dec("150.00"));
    assert_eq!(budget.pre_trip, dec("1000.10"));
    assert_eq!(budget.spent, dec("0.20"));
    assert_eq!(budget.total, dec("2500.30"));

    let err = storage.update_budget_by_trip("missing", input).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn set_spent_on_missing_budget_returns_none() {
    let (storage, _dir) = create_test_storage();
    assert!(storage.set_budget_spent("missing", dec("1")).unwrap().is_none());
}

#[test]
fn clear_trips_removes_everything() {
    let (storage, _dir) = create_test_storage();
    storage.create_trip(trip_input("Paris", 1)).unwrap();
    storage.create_trip(trip_input("Rome", 2)).unwrap();
    assert_eq!(storage.clear_trips().unwrap(), 2);
    assert!(storage.list_trips(None).unwrap().is_empty());
}

#[tokio::test]
async fn async_traits_reach_the_same_rows() {
    let (storage, _dir) = create_test_storage();
    let trip = TripStore::create_trip(&storage, trip_input("Kyoto", 5)).await.unwrap();
    let budget = BudgetStore::get_budget_by_trip(&storage, &trip.id).await.unwrap().unwrap();
    let listed = TripStore::list_trips(&storage, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(budget.trip_id, trip.id);
}

#[test]
fn corrupt_status_reads_back_as_idea() {
    let (storage, _dir) = create_test_storage();
    let mut input = trip_input("Oslo", 3);
    input.status = TripStatus::Booked;
    let trip = storage.create_trip(input).unwrap();

    let conn = storage.pool.get().unwrap();
    conn.execute("UPDATE trips SET status = 'Someday' WHERE id = ?1", [&trip.id]).unwrap();
    drop(conn);

    let fetched = storage.get_trip(&trip.id).unwrap().unwrap();
    assert_eq!(fetched.status, TripStatus::Idea);
    assert_eq!(fetched.destination, "Oslo");
}
