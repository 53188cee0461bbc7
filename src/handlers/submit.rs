use tracing::info;

use crate::error::ServiceError;
use crate::store::AppointmentStore;

/// Reorders `YYYY-MM-DD` input into the `DD.MM.YYYY` keying the rest of the
/// system uses. Dotted input is taken as already formatted. Components are
/// passed through positionally, not re-padded; anything else is passed
/// through as-is.
pub fn normalize_submitted_date(input: &str) -> String {
    if input.contains('.') {
        return input.to_string();
    }

    let parts: Vec<&str> = input.split('-').collect();
    match parts[..] {
        [year, month, day] => format!("{day}.{month}.{year}"),
        _ => input.to_string(),
    }
}

/// Validates and records one submission. Returns the formatted key and
/// whether the slot was new; duplicates are accepted silently.
pub fn record_submission(
    store: &AppointmentStore,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<(String, bool), ServiceError> {
    let (date, time) = match (date, time) {
        (Some(date), Some(time)) if !date.is_empty() && !time.is_empty() => (date, time),
        _ => return Err(ServiceError::MissingFields),
    };

    let formatted = normalize_submitted_date(date);
    let is_new = store.record_slot(&formatted, time)?;

    info!("Received appointment: Date = {}, Time = {}", formatted, time);

    Ok((formatted, is_new))
}
