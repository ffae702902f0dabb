//! Storage backend trait abstraction
//!
//! One async trait per aggregate so services depend only on what they touch.

pub mod budget;
pub mod expense;
pub mod itinerary;
pub mod trip;

pub use budget::BudgetStore;
pub use expense::ExpenseStore;
pub use itinerary::{ActivityStore, DailyPlanStore};
pub use trip::TripStore;
