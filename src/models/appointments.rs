use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Availability keyed by `DD.MM.YYYY` date strings. Slot order within a day
/// is not meaningful; uniqueness is.
pub type AvailabilityMap = BTreeMap<String, Vec<String>>;

#[derive(Deserialize, Debug)]
pub struct SubmissionRequest {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: &'static str,
}
