use rusqlite::{OptionalExtension as _, params};
use voyage_core::{Budget, Trip, TripInput, TripStatus};

use super::{Storage, format_instant, get_conn, get_instant, new_id};
use crate::error::StorageError;

pub(crate) const TRIP_COLUMNS: &str = "id, destination, start_date, end_date, flight, lodging, transportation, status, created_at, updated_at";

impl Storage {
    /// Insert a trip and its all-zero budget atomically.
    ///
    /// # Errors
    /// Returns error if either insert fails; neither row is kept in that case.
    pub fn create_trip(&self, input: TripInput) -> Result<Trip, StorageError> {
        let now = crate::now();
        let trip = Trip::new(new_id(), input, now);
        let budget = Budget::zeroed(new_id(), trip.id.clone(), now);

        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute(
            &format!("INSERT INTO trips ({TRIP_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
            params![
                trip.id,
                trip.destination,
                format_instant(&trip.start_date),
                format_instant(&trip.end_date),
                trip.flight,
                trip.lodging,
                trip.transportation,
                trip.status.as_str(),
                format_instant(&trip.created_at),
                format_instant(&trip.updated_at),
            ],
        )?;
        tx.execute(
            "INSERT INTO budgets (id, trip_id, daily, pre_trip, spent, total, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                budget.id,
                budget.trip_id,
                budget.daily.to_string(),
                budget.pre_trip.to_string(),
                budget.spent.to_string(),
                budget.total.to_string(),
                format_instant(&budget.created_at),
                format_instant(&budget.updated_at),
            ],
        )?;
        tx.commit()?;
        Ok(trip)
    }

    /// List trips ordered by start date.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_trips(&self, status: Option<TripStatus>) -> Result<Vec<Trip>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let trips = match status {
            Some(status) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TRIP_COLUMNS} FROM trips WHERE status = ?1 ORDER BY start_date ASC, id ASC"
                ))?;
                stmt.query_map(params![status.as_str()], map_trip)?
                    .collect::<Result<Vec<_>, _>>()?
            },
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TRIP_COLUMNS} FROM trips ORDER BY start_date ASC, id ASC"
                ))?;
                stmt.query_map([], map_trip)?.collect::<Result<Vec<_>, _>>()?
            },
        };
        Ok(trips)
    }

    /// Get trip by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_trip(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let trip = conn
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![id],
                map_trip,
            )
            .optional()?;
        Ok(trip)
    }

    /// Read, apply and write back inside one transaction.
    ///
    /// # Errors
    /// Returns `NotFound` if the trip does not exist.
    pub fn update_trip(&self, id: &str, input: TripInput) -> Result<Trip, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut trip = tx
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![id],
                map_trip,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("trip", id))?;
        trip.apply(input, crate::now());
        tx.execute(
            "UPDATE trips SET destination = ?1, start_date = ?2, end_date = ?3, flight = ?4,
               lodging = ?5, transportation = ?6, status = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                trip.destination,
                format_instant(&trip.start_date),
                format_instant(&trip.end_date),
                trip.flight,
                trip.lodging,
                trip.transportation,
                trip.status.as_str(),
                format_instant(&trip.updated_at),
                trip.id,
            ],
        )?;
        tx.commit()?;
        Ok(trip)
    }

    /// Delete trip; budget, expenses, daily plans and activities cascade.
    ///
    /// # Errors
    /// Returns `NotFound` if the trip does not exist.
    pub fn delete_trip(&self, id: &str) -> Result<Trip, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("DELETE FROM trips WHERE id = ?1 RETURNING {TRIP_COLUMNS}"),
            params![id],
            map_trip,
        )
        .optional()?
        .ok_or_else(|| StorageError::not_found("trip", id))
    }

    /// Delete all trips.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn clear_trips(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM trips", [])?)
    }
}

fn map_trip(row: &rusqlite::Row<'_>) -> rusqlite::Result<Trip> {
    let status_str: String = row.get(7)?;
    let status = status_str.parse::<TripStatus>().unwrap_or_else(|_| {
        tracing::warn!(invalid_status = %status_str, "corrupt trip status in DB, defaulting to Idea");
        TripStatus::Idea
    });
    Ok(Trip {
        id: row.get(0)?,
        destination: row.get(1)?,
        start_date: get_instant(row, 2)?,
        end_date: get_instant(row, 3)?,
        flight: row.get(4)?,
        lodging: row.get(5)?,
        transportation: row.get(6)?,
        status,
        created_at: get_instant(row, 8)?,
        updated_at: get_instant(row, 9)?,
    })
}
