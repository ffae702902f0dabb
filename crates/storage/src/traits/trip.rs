use async_trait::async_trait;
use voyage_core::{Trip, TripInput, TripStatus};

use crate::error::StorageError;

/// Trip lifecycle operations.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Insert a trip together with its zero-valued budget in one transaction.
    async fn create_trip(&self, input: TripInput) -> Result<Trip, StorageError>;

    /// List trips ordered by start date, optionally filtered by status.
    async fn list_trips(&self, status: Option<TripStatus>) -> Result<Vec<Trip>, StorageError>;

    /// Get trip by ID.
    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, StorageError>;

    /// Update a trip. Fails with `NotFound` when the trip does not exist.
    async fn update_trip(&self, id: &str, input: TripInput) -> Result<Trip, StorageError>;

    /// Delete a trip and, through cascades, everything it owns.
    async fn delete_trip(&self, id: &str) -> Result<Trip, StorageError>;

    /// Delete every trip. Returns the number of trips removed.
    async fn clear_trips(&self) -> Result<usize, StorageError>;
}
