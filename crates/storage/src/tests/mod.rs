//! Test utilities and module declarations for storage tests.

use std::str::FromStr as _;

use crate::Storage;
use chrono::{TimeZone as _, Utc};
use rust_decimal::Decimal;
use tempfile::TempDir;
use voyage_core::{ExpenseInput, ExpenseType, TripInput, TripStatus};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn trip_input(destination: &str, start_day: u32) -> TripInput {
    TripInput {
        destination: destination.to_owned(),
        start_date: Utc.with_ymd_and_hms(2025, 6, start_day, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 6, start_day + 4, 0, 0, 0).unwrap(),
        flight: None,
        lodging: None,
        transportation: None,
        status: TripStatus::Idea,
    }
}

pub fn expense_input(budget_id: &str, amount: &str, description: &str) -> ExpenseInput {
    ExpenseInput {
        budget_id: budget_id.to_owned(),
        amount: dec(amount),
        description: description.to_owned(),
        expense_type: ExpenseType::Daily,
    }
}

mod trip_tests;
