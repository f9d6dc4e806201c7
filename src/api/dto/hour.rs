//! DTO for the cached hour endpoint.

use serde::{Deserialize, Serialize};

/// Body returned by `GET /hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourResponse {
    /// Path of the date/time page.
    pub url: String,
}
