//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load or producer error in place of the day grid.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #2d1215; color: #f48771; border-radius: 4px; border: 1px solid #5a1d1d; font-family: monospace; white-space: pre-wrap;",
            "{props.message}"
        }
    }
}
