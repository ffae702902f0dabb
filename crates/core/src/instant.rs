//! Instant precision shared by both storage backends.

use chrono::{DateTime, SubsecRound as _, Utc};

/// Truncate to microseconds, the finest resolution either backend stores, so
/// a value returned from a write equals the value read back later.
#[must_use]
pub fn to_stored_precision(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_nanoseconds_keeps_micros() {
        let raw = DateTime::parse_from_rfc3339("2025-06-01T08:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let stored = to_stored_precision(raw);
        assert_eq!(stored.to_rfc3339(), "2025-06-01T08:30:00.123456+00:00");
        assert_eq!(to_stored_precision(stored), stored);
    }
}
