//! The page-session controller.
//!
//! One `DashboardController` is built at startup. It owns the handle table and
//! the debounce timer, loads the charts once, and then answers control events:
//! slider input is debounced, selector changes synchronize straight away.

use std::rc::Rc;

use crate::config::DashboardConfig;
use crate::controls::Controls;
use crate::debounce::{Debouncer, Scheduler};
use crate::loader::{load_charts, LoadReport};
use crate::sync::{apply_controls, SyncReport};
use crate::table::ChartTable;
use crate::view::ChartEmbedder;

pub struct DashboardController<E: ChartEmbedder, S: Scheduler, C: Controls> {
    config: DashboardConfig,
    embedder: E,
    controls: C,
    charts: ChartTable<E::View>,
    debouncer: Debouncer<S>,
}

impl<E, S, C> DashboardController<E, S, C>
where
    E: ChartEmbedder,
    S: Scheduler,
    C: Controls,
{
    pub fn new(config: DashboardConfig, embedder: E, scheduler: S, controls: C) -> Self {
        let debouncer = Debouncer::new(scheduler, config.debounce());
        Self {
            config,
            embedder,
            controls,
            charts: ChartTable::new(),
            debouncer,
        }
    }

    /// Load every chart, then synchronize once with the initial control values.
    pub async fn start(&self) -> LoadReport {
        log::info!("Loading {} visualisations", self.config.charts.len());
        let report = load_charts(
            &self.config.charts,
            &self.config.embed,
            &self.embedder,
            &self.charts,
        )
        .await;
        self.synchronize();
        report
    }

    pub fn synchronize(&self) -> SyncReport {
        apply_controls(&self.controls, &self.config.signals, &self.charts)
    }

    /// Selector changes are discrete, so they skip the debounce.
    pub fn on_trade_change(&self) -> SyncReport {
        self.synchronize()
    }

    pub fn charts(&self) -> &ChartTable<E::View> {
        &self.charts
    }
}

impl<E, S, C> DashboardController<E, S, C>
where
    E: ChartEmbedder + 'static,
    S: Scheduler + 'static,
    C: Controls + 'static,
{
    /// Slider input: synchronize once the slider has been still for the quiet period.
    pub fn on_year_input(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.debouncer.call(move || {
            this.synchronize();
        });
    }
}
