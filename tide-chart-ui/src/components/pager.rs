//! Previous/next page controls with a page indicator.

use dioxus::prelude::*;
use tide_core::paginate::{self, DEFAULT_PAGE_SIZE};

use crate::state::AppState;

/// Pager reading and writing the shared page index. Navigation clamps at
/// the boundaries rather than wrapping.
#[component]
pub fn Pager() -> Element {
    let mut state = use_context::<AppState>();
    let total = state.days.read().len();
    let view = paginate::paginate(total, (state.page)(), DEFAULT_PAGE_SIZE);
    let indicator = format!(
        "Page {} / {} \u{2022} {} days",
        view.page + 1,
        view.page_count,
        total
    );

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; justify-content: center; padding: 8px 0;",
            button {
                style: "padding: 4px 12px; cursor: pointer;",
                disabled: view.page == 0,
                onclick: move |_| {
                    let current = (state.page)();
                    state.page.set(current.saturating_sub(1));
                    state.navigated.set(true);
                },
                "\u{2190} Prev"
            }
            span {
                style: "color: #888; font-size: 13px;",
                "{indicator}"
            }
            button {
                style: "padding: 4px 12px; cursor: pointer;",
                disabled: view.page + 1 >= view.page_count,
                onclick: move |_| {
                    let total = state.days.read().len();
                    let next = paginate::paginate(total, (state.page)() + 1, DEFAULT_PAGE_SIZE);
                    state.page.set(next.page);
                    state.navigated.set(true);
                },
                "Next \u{2192}"
            }
        }
    }
}
