//! Pushes the control values into every loaded chart.

use crate::config::SignalNames;
use crate::controls::{ControlState, Controls};
use crate::error::ChartError;
use crate::table::{ChartTable, LoadedChart};
use crate::view::{ChartView, SignalValue};

/// What one synchronization run did. Container lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Control values used, `None` when the controls could not be read
    pub state: Option<ControlState>,
    pub year_set: Vec<String>,
    pub trade_set: Vec<String>,
    pub rendered: Vec<String>,
    pub failed: Vec<String>,
}

/// Read the controls once, then update each chart that declares the signals.
///
/// The year label follows the slider as soon as the year parses. Charts are only
/// touched when both controls hold valid values. A chart that fails is logged
/// and skipped; the rest are still updated.
pub fn apply_controls<V: ChartView>(
    controls: &impl Controls,
    signals: &SignalNames,
    table: &ChartTable<V>,
) -> SyncReport {
    let year = match controls.year() {
        Ok(year) => year,
        Err(e) => {
            log::warn!("Could not read dashboard controls: {}", e);
            return SyncReport::default();
        }
    };

    controls.show_year(year);

    let trade = match controls.trade() {
        Ok(trade) => trade,
        Err(e) => {
            log::warn!("Could not read dashboard controls: {}", e);
            return SyncReport::default();
        }
    };
    let state = ControlState { year, trade };

    let mut report = SyncReport {
        state: Some(state),
        ..SyncReport::default()
    };

    table.for_each(|container, chart| {
        let mut pushed = Pushed::default();
        match update_chart(chart, signals, state, &mut pushed) {
            Ok(()) => report.rendered.push(container.to_string()),
            Err(e) => {
                log::warn!("Could not update signals for {}: {}", container, e);
                report.failed.push(container.to_string());
            }
        }
        if pushed.year {
            report.year_set.push(container.to_string());
        }
        if pushed.trade {
            report.trade_set.push(container.to_string());
        }
    });

    report
}

#[derive(Default)]
struct Pushed {
    year: bool,
    trade: bool,
}

fn update_chart<V: ChartView>(
    chart: &LoadedChart<V>,
    signals: &SignalNames,
    state: ControlState,
    pushed: &mut Pushed,
) -> Result<(), ChartError> {
    let declared = chart.signal_names()?;

    if declared.iter().any(|name| *name == signals.year) {
        chart
            .view
            .set_signal(&signals.year, SignalValue::Year(state.year))?;
        pushed.year = true;
    }
    if declared.iter().any(|name| *name == signals.trade) {
        chart
            .view
            .set_signal(&signals.trade, SignalValue::Trade(state.trade))?;
        pushed.trade = true;
    }

    chart.view.request_render()
}
