//! In-memory stand-ins for the chart library, the page controls and the timer.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

use log::{Level, LevelFilter, Metadata, Record};

use crate::config::EmbedOptions;
use crate::controls::{parse_year, Controls, TradeDirection};
use crate::debounce::Scheduler;
use crate::error::{ChartError, ControlError};
use crate::view::{ChartEmbedder, ChartView, SignalValue};

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps log records per test thread so assertions see only their own output.
struct CaptureLogger;

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = record.args().to_string();
            CAPTURED.with(|records| records.borrow_mut().push((record.level(), line)));
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger (once per process) and clear this thread's records.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    });
    CAPTURED.with(|records| records.borrow_mut().clear());
}

/// Warnings logged on this thread since the last `capture_logs`.
pub fn captured_warnings() -> Vec<String> {
    CAPTURED.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, line)| line.clone())
            .collect()
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartCall {
    Set {
        chart: String,
        name: String,
        value: SignalValue,
    },
    Render {
        chart: String,
    },
}

/// Shared log of every call made on fake views.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<ChartCall>>>);

impl Journal {
    fn record(&self, call: ChartCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<ChartCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Charts that received signal `name`, in call order.
    pub fn charts_set(&self, name: &str) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ChartCall::Set { chart, name: n, .. } if n == name => Some(chart.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn values_set(&self, name: &str) -> Vec<SignalValue> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ChartCall::Set { name: n, value, .. } if n == name => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn renders(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ChartCall::Render { chart } => Some(chart.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Behaves like a Vega view: setting an undeclared signal is an error.
pub struct FakeView {
    chart: String,
    signals: Rc<RefCell<Vec<String>>>,
    broken: bool,
    failing_query: bool,
    journal: Journal,
}

impl FakeView {
    pub fn new(chart: &str, signals: &[&str], journal: Journal) -> Self {
        Self {
            chart: chart.to_string(),
            signals: Rc::new(RefCell::new(
                signals.iter().map(|s| s.to_string()).collect(),
            )),
            broken: false,
            failing_query: false,
            journal,
        }
    }

    /// Every signal update on this view fails.
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    /// Asking this view for its signals fails.
    pub fn failing_query(mut self) -> Self {
        self.failing_query = true;
        self
    }

    /// Handle for changing the declared signals after the view is stored.
    pub fn signals_handle(&self) -> Rc<RefCell<Vec<String>>> {
        self.signals.clone()
    }
}

impl ChartView for FakeView {
    fn signal_names(&self) -> Result<Vec<String>, ChartError> {
        if self.failing_query {
            return Err(ChartError::SignalQuery("view state unavailable".to_string()));
        }
        Ok(self.signals.borrow().clone())
    }

    fn set_signal(&self, name: &str, value: SignalValue) -> Result<(), ChartError> {
        if self.broken {
            return Err(ChartError::Signal {
                name: name.to_string(),
                reason: "view is broken".to_string(),
            });
        }
        if !self.signals.borrow().iter().any(|s| s == name) {
            return Err(ChartError::Signal {
                name: name.to_string(),
                reason: "Unrecognized signal name".to_string(),
            });
        }
        self.journal.record(ChartCall::Set {
            chart: self.chart.clone(),
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn request_render(&self) -> Result<(), ChartError> {
        self.journal.record(ChartCall::Render {
            chart: self.chart.clone(),
        });
        Ok(())
    }
}

/// Serves only the spec paths registered with `with_spec`; anything else 404s.
pub struct FakeEmbedder {
    specs: HashMap<String, Vec<String>>,
    journal: Journal,
    attempts: RefCell<Vec<String>>,
    last_options: RefCell<Option<EmbedOptions>>,
}

impl FakeEmbedder {
    pub fn new(journal: Journal) -> Self {
        Self {
            specs: HashMap::new(),
            journal,
            attempts: RefCell::new(Vec::new()),
            last_options: RefCell::new(None),
        }
    }

    pub fn with_spec(mut self, path: &str, signals: &[&str]) -> Self {
        self.specs.insert(
            path.to_string(),
            signals.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Selectors passed to `embed`, in call order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }

    pub fn last_options(&self) -> Option<EmbedOptions> {
        self.last_options.borrow().clone()
    }
}

impl ChartEmbedder for FakeEmbedder {
    type View = FakeView;

    async fn embed(
        &self,
        selector: &str,
        spec_path: &str,
        options: &EmbedOptions,
    ) -> Result<FakeView, ChartError> {
        self.attempts.borrow_mut().push(selector.to_string());
        *self.last_options.borrow_mut() = Some(options.clone());

        let signals = self
            .specs
            .get(spec_path)
            .ok_or_else(|| ChartError::Embed(format!("404 Not Found: {}", spec_path)))?;
        let names: Vec<&str> = signals.iter().map(String::as_str).collect();
        let chart = selector.trim_start_matches('#');
        Ok(FakeView::new(chart, &names, self.journal.clone()))
    }
}

struct ControlsInner {
    year: RefCell<String>,
    trade: RefCell<String>,
    label: RefCell<Option<String>>,
    reads: Cell<usize>,
}

/// Raw widget values, as the DOM would hand them over.
#[derive(Clone)]
pub struct FakeControls(Rc<ControlsInner>);

impl FakeControls {
    pub fn new(year: &str, trade: &str) -> Self {
        Self(Rc::new(ControlsInner {
            year: RefCell::new(year.to_string()),
            trade: RefCell::new(trade.to_string()),
            label: RefCell::new(None),
            reads: Cell::new(0),
        }))
    }

    pub fn set_year(&self, raw: &str) {
        *self.0.year.borrow_mut() = raw.to_string();
    }

    pub fn set_trade(&self, raw: &str) {
        *self.0.trade.borrow_mut() = raw.to_string();
    }

    pub fn label(&self) -> Option<String> {
        self.0.label.borrow().clone()
    }

    /// Number of times the slider was read.
    pub fn reads(&self) -> usize {
        self.0.reads.get()
    }
}

impl Controls for FakeControls {
    fn year(&self) -> Result<i32, ControlError> {
        self.0.reads.set(self.0.reads.get() + 1);
        parse_year("yearSlider", &self.0.year.borrow())
    }

    fn trade(&self) -> Result<TradeDirection, ControlError> {
        self.0.trade.borrow().parse()
    }

    fn show_year(&self, year: i32) {
        *self.0.label.borrow_mut() = Some(year.to_string());
    }
}

struct Timer {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Virtual-time scheduler. Time only moves on `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<Clock>>);

impl ManualScheduler {
    /// Move time forward, running every timer that falls due, earliest first.
    pub fn advance(&self, by: Duration) {
        let target = self.0.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.0.borrow_mut();
                let due = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(idx, _)| idx);
                match due {
                    Some(idx) => {
                        let timer = clock.timers.remove(idx);
                        clock.now = timer.due;
                        Some(timer.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().timers.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> u64 {
        let mut clock = self.0.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.timers.push(Timer { id, due, task });
        id
    }

    fn cancel(&self, handle: u64) {
        self.0.borrow_mut().timers.retain(|t| t.id != handle);
    }
}
