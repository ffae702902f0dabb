//! Service tests over a temporary `SQLite` backend.

use std::str::FromStr as _;
use std::sync::Arc;

use chrono::{TimeZone as _, Utc};
use tempfile::TempDir;
use voyage_core::{Decimal, ExpenseInput, ExpenseType, TripInput, TripStatus};
use voyage_storage::StorageBackend;

use crate::{ActivityService, BudgetService, DailyPlanService, ExpenseService, TripService};

pub struct Harness {
    pub trips: TripService,
    pub budgets: Arc<BudgetService>,
    pub expenses: ExpenseService,
    pub daily_plans: DailyPlanService,
    pub activities: ActivityService,
    _dir: TempDir,
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(StorageBackend::new_sqlite(&dir.path().join("test.db")).unwrap());
    let budgets = Arc::new(BudgetService::new(Arc::clone(&storage)));
    Harness {
        trips: TripService::new(Arc::clone(&storage)),
        expenses: ExpenseService::new(Arc::clone(&storage), Arc::clone(&budgets)),
        daily_plans: DailyPlanService::new(Arc::clone(&storage)),
        activities: ActivityService::new(storage),
        budgets,
        _dir: dir,
    }
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn paris() -> TripInput {
    TripInput {
        destination: "Paris".to_owned(),
        start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap(),
        flight: None,
        lodging: None,
        transportation: None,
        status: TripStatus::Planning,
    }
}

pub fn expense(budget_id: &str, amount: &str, kind: ExpenseType) -> ExpenseInput {
    ExpenseInput {
        budget_id: budget_id.to_owned(),
        amount: dec(amount),
        description: format!("{kind:?} expense of {amount}"),
        expense_type: kind,
    }
}

mod itinerary_tests;
mod trip_tests;
