//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The canvas drawing primitive lives in `assets/js/day-chart.js` and is
//! evaluated as a global (no ES modules), exposed via `window.*`. This
//! module provides safe Rust wrappers that serialize a
//! [`tide_core::chart::ChartModel`] and call it. All layout math (axis
//! bounds, ticks, interpolation) happens in Rust; the JS side only maps
//! axis coordinates to pixels and strokes the polyline.

use tide_core::chart::ChartModel;

// Embed the chart drawing JS at compile time
static DAY_CHART_JS: &str = include_str!("../assets/js/day-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('tide JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart script at global scope and promote its functions to
/// `window.*`. Call once at app startup; re-running is harmless.
pub fn init_charts() {
    let store_js = format!(
        "window.__tideChartScript = {};",
        serde_json::to_string(DAY_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__tideChartsReady) { delete window.__tideChartScript; return; }
            // Eval at global scope via indirect eval
            (0, eval)(window.__tideChartScript);
            delete window.__tideChartScript;
            if (typeof renderDayChart !== 'undefined') window.renderDayChart = renderDayChart;
            if (typeof destroyDayChart !== 'undefined') window.destroyDayChart = destroyDayChart;
            window.__tideChartsReady = true;
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw one day-card chart into the container with the given DOM id.
///
/// Polls until the chart script is initialized and the container element
/// exists (Dioxus may not have committed the DOM yet), then draws. Any
/// previous drawing in the container is fully replaced, not layered.
pub fn render_day_chart(container_id: &str, model: &ChartModel) {
    let data_json = match serde_json::to_string(model) {
        Ok(s) => s,
        Err(e) => {
            log::error!("failed to serialize chart model: {}", e);
            return;
        }
    };
    let escaped = data_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                // Give up after ~5s: the container is gone (page flipped away)
                if (++attempts > 100) {{ clearInterval(poll); return; }}
                if (window.__tideChartsReady &&
                    typeof window.renderDayChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDayChart('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[tide] renderDayChart error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Tear down a chart in the given container. Must run before the container
/// is reused for another page's chart, so surfaces don't accumulate.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyDayChart) window.destroyDayChart('{}'); \
         else {{ var el = document.getElementById('{}'); if (el) el.innerHTML = ''; }}",
        container_id, container_id
    ));
}
