use crate::error::ServiceError;
use crate::models::appointments::AvailabilityMap;
use crate::provider;
use crate::store::AppointmentStore;

/// Full read path: fetch from the provider, pin every date to `target_year`,
/// then union in the locally recorded appointments.
pub async fn merged_availability(
    provider_url: &str,
    target_year: u16,
    store: &AppointmentStore,
) -> Result<AvailabilityMap, ServiceError> {
    let external = provider::fetch_availability(provider_url).await?;
    let rewritten = rewrite_year(&external, target_year)?;
    Ok(merge_availability(&rewritten, &store.snapshot()))
}

/// Re-keys every entry to `target_year`, re-padding day and month to two
/// digits. Slot lists pass through untouched. Any key that is not three
/// dot-separated integers fails the whole operation.
pub fn rewrite_year(
    external: &AvailabilityMap,
    target_year: u16,
) -> Result<AvailabilityMap, ServiceError> {
    let mut rewritten = AvailabilityMap::new();

    for (date, times) in external {
        let parts: Vec<&str> = date.split('.').collect();
        let [day, month, year] = parts[..] else {
            return Err(ServiceError::MalformedKey(date.clone()));
        };

        let day: u32 = day
            .parse()
            .map_err(|_| ServiceError::MalformedKey(date.clone()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ServiceError::MalformedKey(date.clone()))?;
        // The source year still has to be numeric even though it is discarded.
        year.parse::<u32>()
            .map_err(|_| ServiceError::MalformedKey(date.clone()))?;

        let key = format!("{day:02}.{month:02}.{target_year}");
        rewritten.insert(key, times.clone());
    }

    Ok(rewritten)
}

/// Right-biased additive merge: `base` entries are preserved and each overlay
/// slot list is unioned in, deduplicated. Never a replacement.
pub fn merge_availability(base: &AvailabilityMap, overlay: &AvailabilityMap) -> AvailabilityMap {
    let mut merged = base.clone();

    for (date, times) in overlay {
        let existing = merged.remove(date).unwrap_or_default();
        let mut union: Vec<String> = Vec::new();
        for time in existing.iter().chain(times) {
            if !union.contains(time) {
                union.push(time.clone());
            }
        }
        merged.insert(date.clone(), union);
    }

    merged
}
