//! Reusable Dioxus RSX components for the dashboard page.

mod chart_container;
mod loading_spinner;
mod status_banner;
mod trade_type_selector;
mod year_slider;

pub use chart_container::ChartContainer;
pub use loading_spinner::LoadingSpinner;
pub use status_banner::{StatusBanner, Tone};
pub use trade_type_selector::TradeTypeSelector;
pub use year_slider::YearSlider;
