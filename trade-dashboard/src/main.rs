//! Trade Visualisation Dashboard
//!
//! Embeds the Vega charts listed in the dashboard configuration and keeps them
//! in step with two global controls: a year slider and a trade direction
//! selector.
//!
//! Flow:
//! 1. The configuration is parsed from the JSON embedded in `tv-dash`.
//! 2. The page renders the controls and one empty container per chart.
//! 3. On mount, the controller embeds every spec in turn, then pushes the
//!    initial control values into the charts.
//! 4. Slider input is debounced; selector changes apply immediately.

use std::rc::Rc;

use dioxus::prelude::*;
use tv_chart_ui::components::{
    ChartContainer, LoadingSpinner, StatusBanner, Tone, TradeTypeSelector, YearSlider,
};
use tv_chart_ui::dom::{BrowserScheduler, DomControls};
use tv_chart_ui::js_bridge::VegaEmbedder;
use tv_chart_ui::state::AppState;
use tv_dash::{DashboardConfig, DashboardController};

type Controller = DashboardController<VegaEmbedder, BrowserScheduler, DomControls>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trade-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(|| DashboardConfig::builtin().map_err(|e| e.to_string()));

    let startup_error = config.as_ref().err().cloned();
    use_effect(move || {
        if let Some(e) = &startup_error {
            log::error!("Invalid dashboard configuration: {}", e);
            state.error_msg.set(Some(e.clone()));
            state.loading.set(false);
        }
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                StatusBanner {
                    heading: "Dashboard unavailable".to_string(),
                    tone: Tone::Error,
                    details: vec![err.clone()],
                }
            }

            if let Ok(config) = config {
                Dashboard { config }
            }
        }
    }
}

#[component]
fn Dashboard(config: DashboardConfig) -> Element {
    let mut state = use_context::<AppState>();
    let controller: Rc<Controller> = use_hook(|| {
        Rc::new(DashboardController::new(
            config.clone(),
            VegaEmbedder::new(),
            BrowserScheduler,
            DomControls::new(config.controls.clone()),
        ))
    });

    // ─── Load every chart once the containers are in the DOM ───
    let loader = controller.clone();
    use_effect(move || {
        let controller = loader.clone();
        spawn(async move {
            let report = controller.start().await;
            if !report.failed.is_empty() {
                log::warn!(
                    "{} of {} charts failed to load",
                    report.failed.len(),
                    report.failed.len() + report.loaded.len()
                );
            }
            state.failed_charts.set(report.failed_containers());
            state.loading.set(false);
        });
    });

    let on_year = {
        let controller = controller.clone();
        move |_: ()| controller.on_year_input()
    };
    let on_trade = {
        let controller = controller.clone();
        move |_: ()| {
            controller.on_trade_change();
        }
    };

    let loading = *state.loading.read();
    let unavailable: Vec<String> = config
        .charts
        .iter()
        .filter(|entry| state.is_failed(&entry.container))
        .map(|entry| entry.title().to_string())
        .collect();

    rsx! {
        h1 {
            style: "margin: 8px 0; font-size: 22px;",
            "Trade Visualisation Dashboard"
        }

        div {
            style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: center; margin: 8px 0 16px 0; padding-bottom: 8px; border-bottom: 1px solid #e0e0e0;",
            YearSlider {
                id: config.controls.year_slider.clone(),
                label_id: config.controls.year_label.clone(),
                range: config.years,
                on_input: on_year,
            }
            TradeTypeSelector {
                id: config.controls.trade_type.clone(),
                on_change: on_trade,
            }
        }

        if loading {
            LoadingSpinner {}
        }

        if !unavailable.is_empty() {
            StatusBanner {
                heading: format!(
                    "{} of {} charts could not be loaded",
                    unavailable.len(),
                    config.charts.len()
                ),
                tone: Tone::Warning,
                details: unavailable.clone(),
            }
        }

        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 16px;",
            for entry in config.charts.iter() {
                ChartContainer {
                    key: "{entry.container}",
                    id: entry.container.clone(),
                    title: entry.title().to_string(),
                    source: entry.spec.clone(),
                    loading,
                    unavailable: state.is_failed(&entry.container),
                }
            }
        }
    }
}
