//! Renderable chart models.
//!
//! A [`ChartModel`] is everything the canvas bridge needs to draw one
//! day-card chart: points already in axis coordinates, value-axis bounds,
//! tick positions for both axes, and styling. Assembly is a stateless
//! function of the day record and projector config; the drawing side holds
//! no state of its own.

use serde::Serialize;

use crate::dates;
use crate::record::{DayRecord, DaySample};
use crate::series::{self, ProjectedPoint, ProjectorConfig, MAX_VALUE_TICKS};

/// Shaded daytime band marking the usual fishing hours, 09:00-16:30.
pub const DAYTIME_BAND: (f64, f64) = (9.0, 16.5);

const TIDE_STROKE: &str = "#4fc1ff";
const PRESSURE_STROKE: &str = "#ce9178";

/// Highlighted time-of-day band, in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub start_hour: f64,
    pub end_hour: f64,
}

/// A time-axis tick with its preformatted "HH:MM" label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTick {
    pub hour: f64,
    pub label: String,
}

/// Complete input for one chart draw, serialized as JSON across the JS
/// bridge. Coordinates are axis-relative; pixel mapping and device-pixel-
/// ratio scaling happen on the drawing side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub points: Vec<ProjectedPoint>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_ticks: Vec<f64>,
    pub x_ticks: Vec<HourTick>,
    /// Decimal places for value-axis tick labels.
    pub decimals: usize,
    pub unit: &'static str,
    pub stroke: &'static str,
    pub point_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Band>,
}

/// Tide chart for one day: interpolated reference points, daytime band,
/// visible sample markers.
pub fn tide_chart(day: &DayRecord, config: &ProjectorConfig) -> ChartModel {
    build(&day.tide, config, "m", 2, TIDE_STROKE, 2.0, Some(Band {
        start_hour: DAYTIME_BAND.0,
        end_hour: DAYTIME_BAND.1,
    }))
}

/// Pressure chart for one day: no reference points, no band, no markers.
pub fn pressure_chart(day: &DayRecord, config: &ProjectorConfig) -> ChartModel {
    build(&day.pressure, config, "hPa", 1, PRESSURE_STROKE, 0.0, None)
}

fn build(
    samples: &[DaySample],
    config: &ProjectorConfig,
    unit: &'static str,
    decimals: usize,
    stroke: &'static str,
    point_radius: f64,
    band: Option<Band>,
) -> ChartModel {
    let mut points = series::project(samples);
    series::insert_reference_points(&mut points, &config.references);

    // Empty series still gets a frame: fall back to the minimum span
    // around zero so the axes have something to show.
    let (y_min, y_max) =
        series::value_bounds(&points, config.min_span).unwrap_or((0.0, config.min_span));
    let step = series::nice_step(y_max - y_min, MAX_VALUE_TICKS);
    let y_ticks = series::value_ticks(y_min, y_max, step);
    let x_ticks = series::hour_ticks(&points)
        .into_iter()
        .map(|hour| HourTick {
            hour,
            label: dates::format_hm(hour),
        })
        .collect();

    ChartModel {
        points,
        y_min,
        y_max,
        y_ticks,
        x_ticks,
        decimals,
        unit,
        stroke,
        point_radius,
        band,
    }
}
