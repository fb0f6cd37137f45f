//! Static sunrise/sunset reference data and the day/night moment resolver.
//!
//! The table is loaded once at startup, validated, and never mutated
//! afterwards. All times are host-local naive values; the table must be
//! authored in the same zone the process runs in.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::types::{Moment, MomentError, SunTableError};

/// Bundled sample table. Real deployments ship a current one via
/// [`SunMomentTable::from_path`].
const BUNDLED_TABLE: &str = include_str!("../data/sunrise-sunset.json");

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(rename = "locationName")]
    location_name: String,
    #[serde(rename = "time", default)]
    time: Vec<RawDaily>,
}

#[derive(Debug, Deserialize)]
struct RawDaily {
    #[serde(rename = "dataTime")]
    data_time: String,
    sunrise: String,
    sunset: String,
}

/// Sunrise and sunset for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

/// Per-location, per-date sunrise/sunset reference data.
///
/// Immutable once constructed; at most one entry exists per
/// `(location, date)` pair (enforced at load).
#[derive(Debug, Clone)]
pub struct SunMomentTable {
    locations: HashMap<String, Vec<DailyEntry>>,
}

impl SunMomentTable {
    /// Load the table bundled with the crate.
    pub fn bundled() -> Result<Self, SunTableError> {
        Self::from_json_str(BUNDLED_TABLE)
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SunTableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SunTableError> {
        let raw: Vec<RawLocation> = serde_json::from_str(json)?;

        let mut locations = HashMap::with_capacity(raw.len());
        for location in raw {
            let mut entries = Vec::with_capacity(location.time.len());
            for daily in &location.time {
                let entry = parse_daily(&location.location_name, daily)?;
                if entries.iter().any(|e: &DailyEntry| e.date == entry.date) {
                    return Err(SunTableError::DuplicateEntry {
                        location: location.location_name.clone(),
                        date: entry.date,
                    });
                }
                entries.push(entry);
            }
            locations.insert(location.location_name, entries);
        }

        tracing::debug!("Loaded sun table with {} locations", locations.len());
        Ok(Self { locations })
    }

    /// Number of locations in the table.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Whether the table has any data for the given location.
    pub fn contains(&self, location_name: &str) -> bool {
        self.locations.contains_key(location_name)
    }

    /// Resolve whether it is day or night at a location.
    ///
    /// - Unknown location: `Ok(None)`. Normal outcome for unconfigured
    ///   locations, not an error.
    /// - Known location with no entry for `now`'s date:
    ///   [`MomentError::MissingDailyEntry`]. Surfaced explicitly so a stale
    ///   table is visible instead of silently misreporting night.
    ///
    /// The interval is inclusive at both ends: exactly sunrise and exactly
    /// sunset both count as day.
    pub fn resolve_moment(
        &self,
        location_name: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Moment>, MomentError> {
        let Some(entries) = self.locations.get(location_name) else {
            return Ok(None);
        };

        let today = now.date();
        let entry = entries
            .iter()
            .find(|entry| entry.date == today)
            .ok_or_else(|| MomentError::MissingDailyEntry {
                location: location_name.to_string(),
                date: today,
            })?;

        let sunrise = entry.date.and_time(entry.sunrise);
        let sunset = entry.date.and_time(entry.sunset);

        let moment = if sunrise <= now && now <= sunset {
            Moment::Day
        } else {
            Moment::Night
        };
        Ok(Some(moment))
    }
}

fn parse_daily(location: &str, daily: &RawDaily) -> Result<DailyEntry, SunTableError> {
    let date = NaiveDate::parse_from_str(&daily.data_time, "%Y-%m-%d").map_err(|_| {
        SunTableError::InvalidDate {
            location: location.to_string(),
            value: daily.data_time.clone(),
        }
    })?;
    Ok(DailyEntry {
        date,
        sunrise: parse_time(location, &daily.sunrise)?,
        sunset: parse_time(location, &daily.sunset)?,
    })
}

// The upstream dataset uses "HH:MM"; accept seconds too.
fn parse_time(location: &str, value: &str) -> Result<NaiveTime, SunTableError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| SunTableError::InvalidTime {
            location: location.to_string(),
            value: value.to_string(),
        })
}
