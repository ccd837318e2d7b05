//! Sensor list loading.
//!
//! The list is a JSON array. Each element is either a single-key mapping
//! `{"kitchen": "http://10.0.0.12/data"}` or the aggregator form
//! `{"room": "kitchen", "url": "http://10.0.0.12/data"}`. File order is
//! polling order.

use crate::error::ConfigError;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub room: String,
    pub url: String,
}

impl Sensor {
    pub fn new(room: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Named(NamedEntry),
    Mapping(IndexMap<String, String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamedEntry {
    room: String,
    url: String,
}

impl RawEntry {
    fn into_sensor(self, index: usize) -> Result<Sensor, ConfigError> {
        let sensor = match self {
            RawEntry::Named(entry) => Sensor::new(entry.room, entry.url),
            RawEntry::Mapping(map) => {
                let count = map.len();
                match map.into_iter().next() {
                    Some((room, url)) if count == 1 => Sensor::new(room, url),
                    _ => {
                        return Err(ConfigError::InvalidEntry {
                            index,
                            reason: format!("expected exactly one room, found {}", count),
                        })
                    }
                }
            }
        };

        if sensor.room.is_empty() {
            return Err(ConfigError::InvalidEntry {
                index,
                reason: "room name is empty".to_string(),
            });
        }

        Ok(sensor)
    }
}

/// Parse a sensor list from JSON text. `path` is only used in error messages.
pub fn parse_sensors(contents: &str, path: &Path) -> Result<Vec<Sensor>, ConfigError> {
    let entries: Vec<RawEntry> =
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    let mut sensors = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let sensor = entry.into_sensor(index)?;
        if !seen.insert(sensor.room.clone()) {
            return Err(ConfigError::DuplicateRoom(sensor.room));
        }
        sensors.push(sensor);
    }

    Ok(sensors)
}

pub fn load_sensors<P: AsRef<Path>>(path: P) -> Result<Vec<Sensor>, ConfigError> {
    let path = path.as_ref();
    debug!("Loading sensor list from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let sensors = parse_sensors(&contents, path)?;
    debug!("Loaded {} sensors", sensors.len());
    Ok(sensors)
}
