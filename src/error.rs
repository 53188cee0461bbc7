use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Submission is missing `date` or `time`. Maps to a 400 response.
    #[error("Date and time are required")]
    MissingFields,

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// An upstream calendar key that does not parse as `DD.MM.YYYY`.
    #[error("Malformed upstream calendar key: {0}")]
    MalformedKey(String),

    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
