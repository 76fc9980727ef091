//! Core data pipeline for the tide calendar dashboard.
//!
//! Turns the heterogeneous daily records of `data.json` into a deduplicated,
//! chronologically sorted, paginated sequence of [`record::DayRecord`]s, and
//! projects each day's tide/pressure series into renderable chart models.
//!
//! Data flows one way:
//! raw JSON -> `normalize` -> `dedup` -> `paginate` (visible slice) ->
//! per day: `series` projection -> `chart` model -> JS canvas bridge.

pub mod chart;
pub mod dates;
pub mod dedup;
pub mod normalize;
pub mod paginate;
pub mod record;
pub mod series;
