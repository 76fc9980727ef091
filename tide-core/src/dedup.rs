//! Collapse duplicate calendar dates and order the working set.

use std::collections::BTreeMap;

use crate::record::DayRecord;

/// Collapse records sharing a calendar date and sort chronologically.
///
/// On a collision the record with the larger combined sample count wins
/// ("richer data wins"); on a tie the first-seen record is kept. The
/// `BTreeMap` keyed by date gives the ascending order for free.
pub fn dedup_and_sort(records: Vec<DayRecord>) -> Vec<DayRecord> {
    let total = records.len();
    let mut by_date: BTreeMap<chrono::NaiveDate, DayRecord> = BTreeMap::new();
    for record in records {
        match by_date.get(&record.date) {
            Some(existing) if existing.sample_count() >= record.sample_count() => {}
            _ => {
                by_date.insert(record.date, record);
            }
        }
    }
    if by_date.len() < total {
        log::info!("collapsed {} duplicate day records", total - by_date.len());
    }
    by_date.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DaySample, Hydrology};
    use chrono::NaiveDate;

    fn day(date: &str, tide_n: usize, pressure_n: usize, tag: &str) -> DayRecord {
        let d = NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap();
        let sample = |i: usize| DaySample {
            time: d.and_hms_opt(i as u32, 0, 0).unwrap(),
            value: i as f64,
            kind: None,
        };
        DayRecord {
            date: d,
            lunar_date: tag.to_string(),
            tide: (0..tide_n).map(sample).collect(),
            pressure: (0..pressure_n).map(sample).collect(),
            hydrology: Hydrology::default(),
        }
    }

    #[test]
    fn test_richer_record_wins() {
        // 3 tide samples beats 1 tide + 1 pressure (total 2)
        let out = dedup_and_sort(vec![
            day("02/01/2024", 1, 1, "poor"),
            day("02/01/2024", 3, 0, "rich"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lunar_date, "rich");
        assert_eq!(out[0].tide.len(), 3);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let out = dedup_and_sort(vec![
            day("02/01/2024", 2, 0, "first"),
            day("02/01/2024", 1, 1, "second"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lunar_date, "first");
    }

    #[test]
    fn test_output_sorted_and_unique() {
        let out = dedup_and_sort(vec![
            day("05/01/2024", 1, 0, "c"),
            day("01/01/2024", 1, 0, "a"),
            day("03/01/2024", 1, 0, "b"),
            day("01/01/2024", 2, 0, "a-rich"),
        ]);
        assert_eq!(out.len(), 3);
        for pair in out.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(out[0].lunar_date, "a-rich");
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_and_sort(Vec::new()).is_empty());
    }
}
