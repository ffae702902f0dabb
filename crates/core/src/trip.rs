//! Trips and the composite views built around them.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::{Budget, BudgetWithExpenses};
use crate::error::CoreError;
use crate::instant::to_stored_precision;
use crate::itinerary::DailyPlanWithActivities;
use crate::validation::require_non_empty;

/// Planning stage of a trip.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TripStatus {
    #[default]
    Idea,
    Planning,
    Booked,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: &'static [TripStatus] =
        &[Self::Idea, Self::Planning, Self::Booked, Self::Completed, Self::Cancelled];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Idea => "Idea",
            Self::Planning => "Planning",
            Self::Booked => "Booked",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for TripStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idea" => Ok(Self::Idea),
            "planning" => Ok(Self::Planning),
            "booked" => Ok(Self::Booked),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(CoreError::InvalidEnum { kind: "trip status", value: s.to_owned() }),
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub flight: Option<String>,
    pub lodging: Option<String>,
    pub transportation: Option<String>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    #[must_use]
    pub fn new(id: String, input: TripInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            destination: input.destination,
            start_date: to_stored_precision(input.start_date),
            end_date: to_stored_precision(input.end_date),
            flight: input.flight,
            lodging: input.lodging,
            transportation: input.transportation,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite required fields; optional descriptors are only replaced when
    /// the input carries a value, so a missing flight never clears a stored one.
    pub fn apply(&mut self, input: TripInput, now: DateTime<Utc>) {
        self.destination = input.destination;
        self.start_date = to_stored_precision(input.start_date);
        self.end_date = to_stored_precision(input.end_date);
        self.status = input.status;
        if input.flight.is_some() {
            self.flight = input.flight;
        }
        if input.lodging.is_some() {
            self.lodging = input.lodging;
        }
        if input.transportation.is_some() {
            self.transportation = input.transportation;
        }
        self.updated_at = now;
    }

    /// Inclusive number of calendar days the trip spans.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date.date_naive() - self.start_date.date_naive()).num_days() + 1
    }
}

/// Payload for `trip.create` and `trip.update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub flight: Option<String>,
    #[serde(default)]
    pub lodging: Option<String>,
    #[serde(default)]
    pub transportation: Option<String>,
    #[serde(default)]
    pub status: TripStatus,
}

impl TripInput {
    pub fn validate(&self) -> crate::Result<()> {
        require_non_empty(&self.destination, "Destination is required")
    }
}

/// Trip listing row: the trip with its budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripWithBudget {
    #[serde(flatten)]
    pub trip: Trip,
    pub budget: Option<Budget>,
}

/// Everything shown on a trip page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    pub budget: Option<BudgetWithExpenses>,
    pub daily_plans: Vec<DailyPlanWithActivities>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paris() -> TripInput {
        TripInput {
            destination: "Paris".to_owned(),
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap(),
            flight: Some("AF 123".to_owned()),
            lodging: None,
            transportation: None,
            status: TripStatus::Planning,
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("booked".parse::<TripStatus>().unwrap(), TripStatus::Booked);
        assert_eq!("Cancelled".parse::<TripStatus>().unwrap(), TripStatus::Cancelled);
        assert!("someday".parse::<TripStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for status in TripStatus::ALL {
            assert_eq!(status.as_str().parse::<TripStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn duration_is_inclusive() {
        let trip = Trip::new("t1".to_owned(), paris(), Utc::now());
        assert_eq!(trip.duration_days(), 5);
    }

    #[test]
    fn apply_keeps_descriptors_when_absent() {
        let now = Utc::now();
        let mut trip = Trip::new("t1".to_owned(), paris(), now);
        let mut update = paris();
        update.destination = "Lyon".to_owned();
        update.flight = None;
        update.lodging = Some("Hotel Bellecour".to_owned());
        trip.apply(update, now);
        assert_eq!(trip.destination, "Lyon");
        assert_eq!(trip.flight.as_deref(), Some("AF 123"));
        assert_eq!(trip.lodging.as_deref(), Some("Hotel Bellecour"));
    }

    #[test]
    fn blank_destination_fails_validation() {
        let mut input = paris();
        input.destination = " ".to_owned();
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Destination is required");
    }

    #[test]
    fn input_defaults_status_to_idea() {
        let input: TripInput = serde_json::from_value(serde_json::json!({
            "destination": "Rome",
            "startDate": "2025-07-01T00:00:00Z",
            "endDate": "2025-07-03T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(input.status, TripStatus::Idea);
        assert!(input.flight.is_none());
    }
}
