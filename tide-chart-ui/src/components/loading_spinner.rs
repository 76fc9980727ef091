//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while data.json is being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #888;",
            "Loading data..."
        }
    }
}
