//! Reusable Dioxus RSX components for the tide calendar.

mod day_card;
mod error_display;
mod loading_spinner;
mod login_form;
mod pager;

pub use day_card::{pressure_container_id, tide_container_id, DayCard};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use login_form::LoginForm;
pub use pager::Pager;
