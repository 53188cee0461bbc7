use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::ServiceError;
use crate::models::appointments::AvailabilityMap;

/// Locally submitted appointments, shared across request handlers.
///
/// External availability never flows in here; the map only grows through
/// `record_slot`. With a backing path set, every new slot rewrites the whole
/// JSON file before the call returns.
pub struct AppointmentStore {
    records: Mutex<AvailabilityMap>,
    path: Option<PathBuf>,
}

impl AppointmentStore {
    /// Loads previously recorded appointments from `path`, or starts empty
    /// when the file does not exist yet. `None` disables persistence.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ServiceError> {
        let records = match &path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            _ => AvailabilityMap::new(),
        };

        Ok(AppointmentStore {
            records: Mutex::new(records),
            path,
        })
    }

    /// Appends `time` under `date` unless already present. Returns whether the
    /// slot was new; a new slot is flushed to disk before this returns.
    pub fn record_slot(&self, date: &str, time: &str) -> Result<bool, ServiceError> {
        let mut records = self.records.lock().unwrap();

        let slots = records.entry(date.to_string()).or_default();
        if slots.contains(&time.to_string()) {
            return Ok(false);
        }
        slots.push(time.to_string());

        if let Some(path) = &self.path {
            write_atomic(path, &records)?;
        }

        Ok(true)
    }

    pub fn snapshot(&self) -> AvailabilityMap {
        self.records.lock().unwrap().clone()
    }
}

// Write-to-temp then rename, so a crash mid-write cannot truncate the store.
fn write_atomic(path: &Path, records: &AvailabilityMap) -> Result<(), ServiceError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.flush()?;
    file.persist(path).map_err(|e| ServiceError::Io(e.error))?;

    Ok(())
}
