//! Normalization of raw `data.json` records into canonical [`DayRecord`]s.
//!
//! The source file has been produced by several generations of the ETL, so
//! field names vary ("tidal_data" vs "Tidal Data" vs "tide", "height" vs
//! "h", ...). Each logical field is resolved through an ordered alias list;
//! the first present key wins. Failures are contained at the smallest
//! scope: a bad sample drops that sample, a bad record drops that record,
//! and nothing here ever panics on malformed input.

use std::fmt;

use serde_json::{Map, Value};

use crate::dates;
use crate::record::{DayRecord, DaySample, Hydrology};

/// Accepted keys for the calendar date, in resolution order.
const DATE_KEYS: &[&str] = &["vietnam_date", "Vietnam Date", "date"];
/// Accepted keys for the lunar date display string.
const LUNAR_KEYS: &[&str] = &["lunar_date", "Lunar Date"];
/// Accepted keys for the tide series array.
const TIDE_KEYS: &[&str] = &["tidal_data", "Tidal Data", "tide", "tides"];
/// Accepted keys for the pressure series array.
const PRESSURE_KEYS: &[&str] = &["pressure_data", "Pressure Data", "pressureSeries", "pressure"];
/// Accepted keys for a sample's timestamp.
const TIME_KEYS: &[&str] = &["time", "timestamp", "t", "dateTime", "datetime"];
/// Accepted keys for a tide sample's value.
const TIDE_VALUE_KEYS: &[&str] = &["height", "h"];
/// Accepted keys for a pressure sample's value.
const PRESSURE_VALUE_KEYS: &[&str] = &["pressure", "p"];

/// Producer-side failure reported inside the document itself (an `error`
/// field). Rendered verbatim; no further processing happens for that load.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerError(pub String);

impl fmt::Display for ProducerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ProducerError {}

/// Extract the list of raw day objects from a parsed document.
///
/// Accepted top-level shapes: `{"days": [...]}`, `{"data": [...]}`, or a
/// bare array. Anything else yields an empty list rather than an error —
/// only a producer-reported `error` field is terminal.
pub fn decode_document(doc: &Value) -> Result<Vec<Value>, ProducerError> {
    if let Some(msg) = doc.get("error").and_then(Value::as_str) {
        return Err(ProducerError(msg.to_string()));
    }
    let days = doc
        .get("days")
        .or_else(|| doc.get("data"))
        .unwrap_or(doc);
    match days.as_array() {
        Some(list) => Ok(list.clone()),
        None => {
            log::warn!("document has no day list; rendering empty calendar");
            Ok(Vec::new())
        }
    }
}

/// Normalize one raw day object into a [`DayRecord`].
///
/// Returns `None` when the record has no parseable calendar date; a missing
/// or non-array series is treated as empty, never as an error. Output series
/// are sorted ascending by timestamp — input order is not trusted.
pub fn normalize_day(raw: &Value) -> Option<DayRecord> {
    let obj = raw.as_object()?;

    let date_str = first_str(obj, DATE_KEYS)?;
    let date = match dates::parse_flexible_date(date_str) {
        Some(d) => d,
        None => {
            log::warn!("dropping day record with unparseable date {:?}", date_str);
            return None;
        }
    };

    let lunar_date = first_str(obj, LUNAR_KEYS).unwrap_or("").to_string();

    let mut tide = normalize_samples(first_array(obj, TIDE_KEYS), TIDE_VALUE_KEYS, true);
    let mut pressure = normalize_samples(first_array(obj, PRESSURE_KEYS), PRESSURE_VALUE_KEYS, false);
    tide.sort_by_key(|s| s.time);
    pressure.sort_by_key(|s| s.time);

    let hydrology = Hydrology {
        sea_level: finite_number(obj.get("sea_level")),
        water_temperature: finite_number(obj.get("water_temperature")),
        wind_speed: finite_number(obj.get("wind_speed")),
        wind_direction: finite_number(obj.get("wind_direction")),
        wave_height: finite_number(obj.get("wave_height")),
    };

    Some(DayRecord {
        date,
        lunar_date,
        tide,
        pressure,
        hydrology,
    })
}

/// Normalize a full list of raw day objects, dropping unparseable records.
pub fn normalize_days(raw_days: &[Value]) -> Vec<DayRecord> {
    let records: Vec<DayRecord> = raw_days.iter().filter_map(normalize_day).collect();
    if records.len() < raw_days.len() {
        log::warn!(
            "dropped {} of {} day records during normalization",
            raw_days.len() - records.len(),
            raw_days.len()
        );
    }
    records
}

/// Run a raw `data.json` body through the whole ingest pipeline: parse,
/// decode, normalize, deduplicate, sort.
///
/// JSON syntax errors and producer-reported errors surface as errors
/// (callers can `downcast_ref::<ProducerError>()` to show the producer's
/// message verbatim); record- and sample-level problems are dropped.
pub fn load_day_records(body: &str) -> anyhow::Result<Vec<DayRecord>> {
    use anyhow::Context;
    let doc: Value = serde_json::from_str(body).context("invalid JSON document")?;
    let raw_days = decode_document(&doc)?;
    Ok(crate::dedup::dedup_and_sort(normalize_days(&raw_days)))
}

fn normalize_samples(raw: Option<&Vec<Value>>, value_keys: &[&str], keep_kind: bool) -> Vec<DaySample> {
    let Some(items) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let time = dates::parse_instant(first_str(obj, TIME_KEYS)?)?;
            let value = value_keys.iter().find_map(|k| finite_number(obj.get(*k)))?;
            let kind = if keep_kind {
                obj.get("type").and_then(Value::as_str).map(str::to_string)
            } else {
                None
            };
            Some(DaySample { time, value, kind })
        })
        .collect()
}

fn first_str<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_str))
}

fn first_array<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_array))
}

/// Coerce a JSON value to a finite f64. Accepts numbers and numeric strings
/// (both appear in the data); everything else, including NaN/inf, is `None`.
fn finite_number(v: Option<&Value>) -> Option<f64> {
    let n = match v? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_decode_document_shapes() {
        let wrapped = json!({"days": [{"date": "01/01/2024"}]});
        assert_eq!(decode_document(&wrapped).unwrap().len(), 1);

        let alt = json!({"data": [{"date": "01/01/2024"}, {"date": "02/01/2024"}]});
        assert_eq!(decode_document(&alt).unwrap().len(), 2);

        let bare = json!([{"date": "01/01/2024"}]);
        assert_eq!(decode_document(&bare).unwrap().len(), 1);

        let unknown = json!({"something": 1});
        assert_eq!(decode_document(&unknown).unwrap().len(), 0);
    }

    #[test]
    fn test_decode_document_producer_error() {
        let doc = json!({"error": "upstream scrape failed", "days": []});
        let err = decode_document(&doc).unwrap_err();
        assert_eq!(err.to_string(), "upstream scrape failed");
    }

    #[test]
    fn test_normalize_basic_day() {
        let raw = json!({
            "vietnam_date": "01/01/2024",
            "lunar_date": "20/11 Quý Mão",
            "tidal_data": [
                {"time": "2024-01-01T03:00:00+07:00", "height": 0.3, "type": "low"}
            ]
        });
        let day = normalize_day(&raw).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(day.lunar_date, "20/11 Quý Mão");
        assert_eq!(day.tide.len(), 1);
        assert_eq!(day.tide[0].value, 0.3);
        assert_eq!(day.tide[0].kind.as_deref(), Some("low"));
        assert!(day.pressure.is_empty());
    }

    #[test]
    fn test_normalize_alias_keys() {
        let raw = json!({
            "Vietnam Date": "2024-01-05",
            "Lunar Date": "24/11",
            "Tidal Data": [
                {"t": "2024-01-05T09:00:00", "h": "1.2"}
            ],
            "Pressure Data": [
                {"dateTime": "2024-01-05T06:00:00", "p": 1008.5}
            ]
        });
        let day = normalize_day(&raw).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(day.tide[0].value, 1.2);
        assert_eq!(day.pressure[0].value, 1008.5);
    }

    #[test]
    fn test_bad_samples_are_dropped_not_zeroed() {
        let raw = json!({
            "date": "03/01/2024",
            "tides": [
                {"time": "2024-01-03T01:00:00", "height": 0.5},
                {"time": "not a time", "height": 0.7},
                {"time": "2024-01-03T05:00:00", "height": "NaN"},
                {"time": "2024-01-03T07:00:00"}
            ]
        });
        let day = normalize_day(&raw).unwrap();
        assert_eq!(day.tide.len(), 1);
        assert_eq!(day.tide[0].value, 0.5);
    }

    #[test]
    fn test_non_array_series_treated_as_empty() {
        let raw = json!({"date": "03/01/2024", "tidal_data": "corrupt"});
        let day = normalize_day(&raw).unwrap();
        assert!(day.tide.is_empty());
    }

    #[test]
    fn test_missing_date_drops_record() {
        assert!(normalize_day(&json!({"tidal_data": []})).is_none());
        assert!(normalize_day(&json!({"date": "junk"})).is_none());
        assert!(normalize_day(&json!(42)).is_none());
    }

    #[test]
    fn test_series_sorted_by_timestamp() {
        let raw = json!({
            "date": "04/01/2024",
            "tide": [
                {"time": "2024-01-04T18:00:00", "height": 1.0},
                {"time": "2024-01-04T06:00:00", "height": 0.4}
            ]
        });
        let day = normalize_day(&raw).unwrap();
        assert!(day.tide[0].time < day.tide[1].time);
        assert_eq!(day.tide[0].value, 0.4);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!({
            "vietnam_date": "06/01/2024",
            "lunar_date": "25/11",
            "tidal_data": [
                {"time": "2024-01-06T04:00:00", "height": 0.8, "type": "high"}
            ],
            "pressure_data": [
                {"time": "2024-01-06T04:00:00", "pressure": 1009.0}
            ],
            "sea_level": 0.71
        });
        let once = normalize_day(&raw).unwrap();
        // Re-encode the canonical record in canonical key names and run it
        // through again; the result must be equivalent.
        let reencoded = json!({
            "vietnam_date": once.date.format("%d/%m/%Y").to_string(),
            "lunar_date": once.lunar_date,
            "tidal_data": once.tide.iter().map(|s| json!({
                "time": s.time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "height": s.value,
                "type": s.kind,
            })).collect::<Vec<_>>(),
            "pressure_data": once.pressure.iter().map(|s| json!({
                "time": s.time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "pressure": s.value,
            })).collect::<Vec<_>>(),
            "sea_level": once.hydrology.sea_level,
        });
        let twice = normalize_day(&reencoded).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_load_day_records_end_to_end() {
        let body = r#"{"days":[{"vietnam_date":"01/01/2024","tidal_data":[{"time":"2024-01-01T03:00:00+07:00","height":0.3}]}]}"#;
        let days = load_day_records(body).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].tide.len(), 1);
        assert_eq!(days[0].tide[0].value, 0.3);

        let err = load_day_records(r#"{"error":"ETL down"}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProducerError>().unwrap().to_string(),
            "ETL down"
        );

        assert!(load_day_records("{not json").is_err());
    }

    #[test]
    fn test_hydrology_fields_independent() {
        let raw = json!({
            "date": "07/01/2024",
            "sea_level": 0.68,
            "wave_height": "1.3"
        });
        let day = normalize_day(&raw).unwrap();
        assert_eq!(day.hydrology.sea_level, Some(0.68));
        assert_eq!(day.hydrology.wave_height, Some(1.3));
        assert_eq!(day.hydrology.wind_speed, None);
    }
}
