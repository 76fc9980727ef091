//! Date and time utilities shared across the pipeline.
//!
//! The source document mixes several date formats across its historical
//! schema variants, so parsing here is deliberately permissive: anything
//! that fails to parse yields `None` and the caller drops the value.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Display format for calendar dates: "dd/MM/yyyy" (as in the source data).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a calendar date in any of the formats seen in the data:
/// "dd/MM/yyyy", "yyyy-MM-dd", or an ISO datetime (date part taken).
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    parse_instant(s).map(|dt| dt.date())
}

/// Parse an ISO-8601 instant, with or without a UTC offset.
///
/// The local (offset-naive) wall time is kept: hour-of-day on the chart
/// axis is always the document's local clock, never UTC.
pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    None
}

/// Short English weekday label ("Sun".."Sat"), as shown on day-card headers.
pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Forecast classification: a day is a forecast day iff it is today or
/// later. `today` is an explicit argument so the caller (and tests) control
/// the clock; the app recomputes it on every render pass.
pub fn is_forecast(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Project a wall-clock time onto the 0-24 hour chart axis.
pub fn hour_of_day(t: NaiveDateTime) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0
}

/// Format a fractional hour-of-day as "HH:MM" for axis tick labels.
pub fn format_hm(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let h = (total_minutes / 60).rem_euclid(24);
    let m = total_minutes % 60;
    format!("{:02}:{:02}", h, m)
}

/// Format a calendar date for display ("dd/MM/yyyy").
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flexible_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(parse_flexible_date("02/01/2024"), Some(expected));
        assert_eq!(parse_flexible_date("2024-01-02"), Some(expected));
        assert_eq!(
            parse_flexible_date("2024-01-02T05:30:00+07:00"),
            Some(expected)
        );
        assert_eq!(parse_flexible_date("not a date"), None);
        assert_eq!(parse_flexible_date("32/01/2024"), None);
    }

    #[test]
    fn test_parse_instant_keeps_local_wall_time() {
        let dt = parse_instant("2024-01-01T03:00:00+07:00").unwrap();
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.minute(), 0);

        let naive = parse_instant("2024-01-01T15:45:00").unwrap();
        assert_eq!(naive.hour(), 15);
        assert_eq!(naive.minute(), 45);
    }

    #[test]
    fn test_weekday_short() {
        // 2024-01-01 was a Monday
        let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(weekday_short(mon), "Mon");
        assert!(!is_weekend(mon));
        let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_eq!(weekday_short(sat), "Sat");
        assert!(is_weekend(sat));
    }

    #[test]
    fn test_is_forecast() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(is_forecast(today, today));
        assert!(is_forecast(today.succ_opt().unwrap(), today));
        assert!(!is_forecast(today.pred_opt().unwrap(), today));
    }

    #[test]
    fn test_hour_of_day() {
        let dt = parse_instant("2024-01-01T03:00:00+07:00").unwrap();
        assert_eq!(hour_of_day(dt), 3.0);
        let dt = parse_instant("2024-01-01T16:30:00").unwrap();
        assert_eq!(hour_of_day(dt), 16.5);
    }

    #[test]
    fn test_format_hm() {
        assert_eq!(format_hm(9.0), "09:00");
        assert_eq!(format_hm(16.5), "16:30");
        assert_eq!(format_hm(0.0), "00:00");
    }
}
