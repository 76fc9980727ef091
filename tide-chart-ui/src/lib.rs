//! Shared Dioxus components and canvas bridge for the tide calendar app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the embedded canvas chart drawer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `notes`: localStorage-backed per-day text overrides
//! - `components`: Reusable RSX components (day card, pager, login form, etc.)

pub mod components;
pub mod js_bridge;
pub mod notes;
pub mod state;
