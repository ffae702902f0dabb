//! Service layer for voyage
//!
//! Domain procedures between the HTTP/CLI front ends and storage. Each
//! procedure validates its input, then calls the store; expense writes also
//! reconcile the owning budget.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod activity_service;
mod budget_service;
mod daily_plan_service;
pub mod error;
mod expense_service;
#[cfg(test)]
mod tests;
mod trip_service;

pub use activity_service::ActivityService;
pub use budget_service::BudgetService;
pub use daily_plan_service::DailyPlanService;
pub use error::ServiceError;
pub use expense_service::ExpenseService;
pub use trip_service::TripService;
