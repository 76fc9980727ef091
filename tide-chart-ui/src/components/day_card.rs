//! One calendar-day card: header, tide and pressure chart slots, hydrology
//! summary with historical-mean comparators, and a local note field.
//!
//! The chart containers are plain divs with deterministic ids; the app's
//! render pass draws into them through the JS bridge after the DOM commits.

use dioxus::prelude::*;
use tide_core::dates;
use tide_core::record::{means, DayRecord};

use crate::notes;

/// DOM id of the tide chart container for a day.
pub fn tide_container_id(day: &DayRecord) -> String {
    format!("tide-{}", day.date.format("%Y%m%d"))
}

/// DOM id of the pressure chart container for a day.
pub fn pressure_container_id(day: &DayRecord) -> String {
    format!("pressure-{}", day.date.format("%Y%m%d"))
}

#[derive(Props, Clone, PartialEq)]
pub struct DayCardProps {
    pub day: DayRecord,
    /// Recomputed by the caller from today's date on every render pass.
    pub is_forecast: bool,
}

#[component]
pub fn DayCard(props: DayCardProps) -> Element {
    let day = &props.day;
    let weekday = dates::weekday_short(day.date);
    let weekend_color = if dates::is_weekend(day.date) {
        "#f48771"
    } else {
        "#9cdcfe"
    };
    let date_label = dates::format_display_date(day.date);
    let tide_id = tide_container_id(day);
    let pressure_id = pressure_container_id(day);

    let note_date = day.date;
    let mut note = use_signal(move || notes::load_note(note_date).unwrap_or_default());

    rsx! {
        div {
            style: "background: #1e1e1e; border: 1px solid #3c3c3c; border-radius: 6px; padding: 10px; display: flex; flex-direction: column; gap: 6px;",

            // Header: weekday, date, lunar date, forecast tag
            div {
                style: "display: flex; gap: 8px; align-items: baseline; font-size: 13px;",
                span { style: "font-weight: bold; color: {weekend_color};", "{weekday}" }
                span { style: "color: #d4d4d4;", "{date_label}" }
                span { style: "color: #b5cea8; font-size: 11px;", "{day.lunar_date}" }
                if props.is_forecast {
                    span {
                        style: "margin-left: auto; background: #264f78; color: #9cdcfe; border-radius: 3px; padding: 1px 6px; font-size: 10px;",
                        "Forecast"
                    }
                }
            }

            div { id: "{tide_id}", style: "width: 100%; height: 120px;" }
            div { id: "{pressure_id}", style: "width: 100%; height: 90px;" }

            HydroLine { day: day.clone() }

            textarea {
                style: "background: #252526; color: #d4d4d4; border: 1px solid #3c3c3c; border-radius: 3px; font-size: 11px; padding: 4px; resize: vertical; min-height: 20px;",
                placeholder: "Notes...",
                value: "{note}",
                oninput: move |evt| {
                    let text = evt.value();
                    notes::save_note(note_date, &text);
                    note.set(text);
                },
            }
        }
    }
}

/// Hydrology summary line: each value renders next to its fixed historical
/// mean, or as a dash when absent.
#[component]
fn HydroLine(day: DayRecord) -> Element {
    let h = &day.hydrology;
    let sea = hydro_label("Sea Level", h.sea_level, 2, "m", Some(means::SEA_LEVEL_M));
    let temp = hydro_label(
        "Water Temp",
        h.water_temperature,
        2,
        "\u{b0}C",
        Some(means::WATER_TEMPERATURE_C),
    );
    let wind = hydro_label("Wind Speed", h.wind_speed, 2, " m/s", Some(means::WIND_SPEED_MS));
    let dir = hydro_label("Wind Dir", h.wind_direction, 0, "\u{b0}", None);
    let wave = hydro_label("Wave", h.wave_height, 2, "m", Some(means::WAVE_HEIGHT_M));

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 10px; font-size: 11px; color: #d4d4d4;",
            span { "{sea}" }
            span { "{temp}" }
            span { "{wind}" }
            span { "{dir}" }
            span { "{wave}" }
        }
    }
}

fn hydro_label(name: &str, value: Option<f64>, decimals: usize, unit: &str, mean: Option<f64>) -> String {
    let value_text = match value {
        Some(v) => format!("{:.*}{}", decimals, v, unit),
        None => "\u{2014}".to_string(),
    };
    match mean {
        Some(m) => format!("{}: {} # {:.2}{}", name, value_text, m, unit),
        None => format!("{}: {}", name, value_text),
    }
}
