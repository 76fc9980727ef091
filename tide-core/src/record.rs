//! Canonical per-day record types.
//!
//! Everything downstream of normalization works on these strongly-typed
//! records; the open-ended JSON shapes never leave the `normalize` module.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timestamped measurement in a day's series (tide height in meters or
/// barometric pressure in hPa). `value` is always finite: non-finite samples
/// are dropped during normalization, never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySample {
    pub time: NaiveDateTime,
    pub value: f64,
    /// Source tag such as "high"/"low" (tide only), carried for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Scalar hydrology snapshot for one day. Each field is independently
/// optional; absent values render as a dash.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hydrology {
    pub sea_level: Option<f64>,
    pub water_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wave_height: Option<f64>,
}

/// Fixed historical-mean comparators shown next to each hydrology value.
pub mod means {
    pub const SEA_LEVEL_M: f64 = 0.74;
    pub const WATER_TEMPERATURE_C: f64 = 27.16;
    pub const WIND_SPEED_MS: f64 = 3.48;
    pub const WAVE_HEIGHT_M: f64 = 1.11;
}

/// Canonical, deduplicated representation of one calendar day.
///
/// `date` is the unique key for deduplication and ordering. Both series are
/// sorted ascending by timestamp before any downstream consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Opaque lunar-calendar display string, not parsed or validated.
    pub lunar_date: String,
    pub tide: Vec<DaySample>,
    pub pressure: Vec<DaySample>,
    #[serde(default)]
    pub hydrology: Hydrology,
}

impl DayRecord {
    /// Combined sample count, the richness key used when two input records
    /// collide on the same date.
    pub fn sample_count(&self) -> usize {
        self.tide.len() + self.pressure.len()
    }
}
