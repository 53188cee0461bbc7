use crate::error::ServiceError;
use crate::models::appointments::AvailabilityMap;

/// Fetches raw availability from the external provider. The provider keys by
/// `DD.MM.YYYY` with whatever year it happens to serve; callers rewrite it.
pub async fn fetch_availability(url: &str) -> Result<AvailabilityMap, ServiceError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let data = response.json::<AvailabilityMap>().await?;
    Ok(data)
}
