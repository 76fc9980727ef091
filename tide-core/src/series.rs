//! Series projection and axis tick planning.
//!
//! Projects a single day's chronologically sorted samples onto a normalized
//! 0-24 hour axis, synthesizes interpolated reference points at fixed times
//! of day where no real sample is nearby, and derives "nice" value-axis
//! bounds and tick steps so the charts stay readable without zooming in too
//! far on flat data.

use crate::dates;
use crate::record::DaySample;
use serde::Serialize;

/// Maximum number of value-axis ticks across the bounded range.
pub const MAX_VALUE_TICKS: usize = 7;

/// Candidate value-axis tick steps, smallest first.
const TICK_STEPS: &[f64] = &[
    0.05, 0.1, 0.2, 0.25, 0.5, 1.0, 2.0, 2.5, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0,
];

/// One plotted point in axis coordinates: fractional hour of day on x,
/// measurement value on y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub hour: f64,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// True for interpolated reference points (drawn, not measured).
    pub synthetic: bool,
}

/// A fixed time of day at which a reference point is synthesized when no
/// real sample falls within `tolerance_hours` of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTime {
    pub hour: f64,
    pub tolerance_hours: f64,
}

/// Projection parameters for one series kind. The reference times and
/// tolerance windows vary between historical revisions of the site, so they
/// are configuration rather than constants baked into the projector.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectorConfig {
    pub references: Vec<ReferenceTime>,
    /// Minimum value-axis span; narrower data is centered within this.
    pub min_span: f64,
}

impl ProjectorConfig {
    /// Tide defaults: reference points at 09:00 and 16:30 with a +/- 1h
    /// window, minimum axis span of 1 m.
    pub fn tide() -> Self {
        Self {
            references: vec![
                ReferenceTime {
                    hour: 9.0,
                    tolerance_hours: 1.0,
                },
                ReferenceTime {
                    hour: 16.5,
                    tolerance_hours: 1.0,
                },
            ],
            min_span: 1.0,
        }
    }

    /// Pressure defaults: no reference points, minimum axis span of 3 hPa.
    pub fn pressure() -> Self {
        Self {
            references: Vec::new(),
            min_span: 3.0,
        }
    }
}

/// Project a day's samples onto the hour-of-day axis.
///
/// The input must already be sorted ascending by timestamp (the normalizer
/// guarantees this); the projection preserves that order.
pub fn project(samples: &[DaySample]) -> Vec<ProjectedPoint> {
    samples
        .iter()
        .map(|s| ProjectedPoint {
            hour: dates::hour_of_day(s.time),
            value: s.value,
            kind: s.kind.clone(),
            synthetic: false,
        })
        .collect()
}

/// Insert interpolated reference points where the series has no real sample
/// near a configured reference time.
///
/// A synthetic point is linearly interpolated between the chronologically
/// bracketing real samples; a reference time outside the sampled range gets
/// no point (no extrapolation). The result stays sorted by hour.
pub fn insert_reference_points(points: &mut Vec<ProjectedPoint>, references: &[ReferenceTime]) {
    for reference in references {
        let covered = points
            .iter()
            .any(|p| !p.synthetic && (p.hour - reference.hour).abs() <= reference.tolerance_hours);
        if covered {
            continue;
        }
        if let Some(value) = interpolate_at(points, reference.hour) {
            points.push(ProjectedPoint {
                hour: reference.hour,
                value,
                kind: None,
                synthetic: true,
            });
        }
    }
    points.sort_by(|a, b| a.hour.total_cmp(&b.hour));
}

/// Linear interpolation over the real (non-synthetic) points at `hour`.
/// Returns `None` when `hour` is outside the real points' range.
fn interpolate_at(points: &[ProjectedPoint], hour: f64) -> Option<f64> {
    let real: Vec<&ProjectedPoint> = points.iter().filter(|p| !p.synthetic).collect();
    let before = real
        .iter()
        .filter(|p| p.hour <= hour)
        .max_by(|a, b| a.hour.total_cmp(&b.hour))?;
    let after = real
        .iter()
        .filter(|p| p.hour >= hour)
        .min_by(|a, b| a.hour.total_cmp(&b.hour))?;
    let span = after.hour - before.hour;
    if span <= f64::EPSILON {
        return Some(before.value);
    }
    Some(before.value + (after.value - before.value) * (hour - before.hour) / span)
}

/// Value-axis bounds over the plotted points, widened so the span is never
/// narrower than `min_span` (centered on the data midpoint when it is).
/// Returns `None` for an empty point set: the renderer draws the frame only.
pub fn value_bounds(points: &[ProjectedPoint], min_span: f64) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.value);
        max = max.max(p.value);
    }
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    let span = (max - min).max(min_span);
    let mid = (min + max) / 2.0;
    Some((mid - span / 2.0, mid + span / 2.0))
}

/// Smallest candidate tick step producing at most `max_ticks` ticks across
/// `range`. Falls back to the largest candidate for pathological ranges.
pub fn nice_step(range: f64, max_ticks: usize) -> f64 {
    for &step in TICK_STEPS {
        if (range / step).ceil() as usize + 1 <= max_ticks {
            return step;
        }
    }
    *TICK_STEPS.last().unwrap()
}

/// Tick values aligned to multiples of `step` within `[lo, hi]`.
pub fn value_ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    // Multiply from an integer index instead of accumulating, so long tick
    // runs don't drift.
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Time-axis ticks: the deduplicated hours present in the point set,
/// ascending. Synthetic reference points contribute ticks too.
pub fn hour_ticks(points: &[ProjectedPoint]) -> Vec<f64> {
    let mut hours: Vec<f64> = points.iter().map(|p| p.hour).collect();
    hours.sort_by(f64::total_cmp);
    hours.dedup_by(|a, b| (*a - *b).abs() < 1.0 / 120.0);
    hours
}
