//! Fishing-calendar dashboard.
//!
//! Renders a paginated grid of day cards (tide chart, pressure chart,
//! lunar date, hydrology summary) from a static `data.json`, behind a
//! cosmetic login gate.
//!
//! Data flow per load:
//! 1. Fetch `./data.json` (no-store) once the gate is passed.
//! 2. `load_day_records`: decode -> normalize -> deduplicate -> sort.
//! 3. Pagination starts on the last page (most recent / forecast days).
//! 4. A render-pass effect destroys stale chart surfaces and redraws the
//!    visible slice through the canvas bridge; window resizes re-trigger it.

mod auth;

use chrono::Local;
use dioxus::prelude::*;
use tide_core::chart;
use tide_core::dates;
use tide_core::normalize;
use tide_core::paginate::{self, DEFAULT_PAGE_SIZE};
use tide_core::series::ProjectorConfig;
use tide_chart_ui::components::{
    pressure_container_id, tide_container_id, DayCard, ErrorDisplay, LoadingSpinner, LoginForm,
    Pager,
};
use tide_chart_ui::js_bridge;
use tide_chart_ui::state::AppState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tide-calendar-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut redraw = use_signal(|| 0u32);

    // Re-render charts when the window is resized
    use_effect(move || {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let next = redraw.peek().wrapping_add(1);
            redraw.set(next);
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    // Fetch and normalize the document once the gate is passed
    use_effect(move || {
        if !(state.authed)() || !(state.loading)() {
            return;
        }
        spawn(async move {
            let result = match fetch_text("./data.json").await {
                Ok(body) => normalize::load_day_records(&body),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            };
            match result {
                Ok(days) => {
                    log::info!("loaded {} day records", days.len());
                    if !(state.navigated)() {
                        state
                            .page
                            .set(paginate::last_page(days.len(), DEFAULT_PAGE_SIZE));
                    }
                    state.days.set(days);
                }
                Err(e) => {
                    log::error!("data load failed: {:#}", e);
                    // Producer-reported errors display verbatim; everything
                    // else gets a load-failure prefix.
                    let msg = match e.downcast_ref::<normalize::ProducerError>() {
                        Some(producer) => producer.to_string(),
                        None => format!("Failed to load data: {:#}", e),
                    };
                    state.error_msg.set(Some(msg));
                }
            }
            state.loading.set(false);
        });
    });

    // Render pass: draw the visible slice's charts after the DOM commits.
    // Operates on a fully-normalized snapshot; each chart surface is torn
    // down before its slot is redrawn.
    use_effect(move || {
        let _ = redraw();
        if !(state.authed)() || (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        js_bridge::init_charts();

        let days = state.days.read();
        let view = paginate::paginate(days.len(), (state.page)(), DEFAULT_PAGE_SIZE);
        let tide_config = ProjectorConfig::tide();
        let pressure_config = ProjectorConfig::pressure();

        for day in &days[view.start..view.end] {
            let tide_id = tide_container_id(day);
            js_bridge::destroy_chart(&tide_id);
            js_bridge::render_day_chart(&tide_id, &chart::tide_chart(day, &tide_config));

            let pressure_id = pressure_container_id(day);
            js_bridge::destroy_chart(&pressure_id);
            js_bridge::render_day_chart(&pressure_id, &chart::pressure_chart(day, &pressure_config));
        }
    });

    rsx! {
        div {
            style: "padding: 16px; background: #161616; min-height: 100vh; color: #d4d4d4; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if !(state.authed)() {
                LoginForm {
                    on_submit: move |(user, pass): (String, String)| {
                        if auth::authenticate(&user, &pass) {
                            state.authed.set(true);
                        } else {
                            js_bridge::call_js("alert('Sai th\\u00f4ng tin!');");
                        }
                    }
                }
            } else if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                Dashboard {}
            }
        }
    }
}

/// The paginated day-card grid with its pager.
#[component]
fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let days = state.days.read();
    let view = paginate::paginate(days.len(), (state.page)(), DEFAULT_PAGE_SIZE);
    // Today is recomputed on every render pass, never cached: the forecast
    // split must stay correct across midnight.
    let today = Local::now().date_naive();

    rsx! {
        Pager {}
        div {
            style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
            for day in days[view.start..view.end].iter().cloned() {
                DayCard {
                    key: "{day.date}",
                    is_forecast: dates::is_forecast(day.date, today),
                    day,
                }
            }
        }
    }
}

/// Fetch a text document, bypassing the HTTP cache.
async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window object")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
