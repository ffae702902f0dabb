#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod activities;
pub mod budgets;
pub mod daily_plans;
pub mod expenses;
pub mod trips;
