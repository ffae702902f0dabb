//! Request and response types that exist only at the HTTP boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TripListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub version: &'static str,
    pub backend: &'static str,
}
