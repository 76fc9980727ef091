//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The deduplicated day list and current page index live here and nowhere
//! else; the render pipeline is their only writer.

use dioxus::prelude::*;
use tide_core::record::DayRecord;

/// Shared application state for the tide calendar.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the credential gate has been passed
    pub authed: Signal<bool>,
    /// Whether the data document is still loading
    pub loading: Signal<bool>,
    /// Error message if the load failed or the producer reported an error
    pub error_msg: Signal<Option<String>>,
    /// Deduplicated, chronologically sorted day records
    pub days: Signal<Vec<DayRecord>>,
    /// Current page index into the day sequence
    pub page: Signal<usize>,
    /// Whether the user has navigated away from the default last page
    pub navigated: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            authed: Signal::new(false),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            days: Signal::new(Vec::new()),
            page: Signal::new(0),
            navigated: Signal::new(false),
        }
    }
}
