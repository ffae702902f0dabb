//! Core types for voyage
//!
//! Domain entities, request inputs and the reconciliation fold shared by
//! the storage, service and HTTP crates.

mod budget;
mod constants;
mod env_config;
mod error;
mod expense;
mod instant;
mod itinerary;
mod trip;
mod validation;

pub use budget::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use expense::*;
pub use instant::to_stored_precision;
pub use itinerary::*;
pub use trip::*;
pub use validation::{require_non_empty, require_non_negative};

pub use rust_decimal::Decimal;
