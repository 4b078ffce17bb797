//! Handle table: container id -> live chart view.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::ChartError;
use crate::view::ChartView;

/// A successfully embedded chart.
pub struct LoadedChart<V> {
    pub view: V,
    /// Signals declared in the registry entry, if any.
    pub declared: Option<Vec<String>>,
}

impl<V: ChartView> LoadedChart<V> {
    /// Signals to consider for this chart. The view is asked again on every call
    /// unless the registry entry pinned an explicit list.
    pub fn signal_names(&self) -> Result<Vec<String>, ChartError> {
        match &self.declared {
            Some(names) => Ok(names.clone()),
            None => self.view.signal_names(),
        }
    }
}

/// Only successful loads are ever inserted; a failed container has no entry.
pub struct ChartTable<V> {
    charts: RefCell<BTreeMap<String, LoadedChart<V>>>,
}

impl<V> Default for ChartTable<V> {
    fn default() -> Self {
        Self {
            charts: RefCell::new(BTreeMap::new()),
        }
    }
}

impl<V> ChartTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, container: impl Into<String>, chart: LoadedChart<V>) {
        self.charts.borrow_mut().insert(container.into(), chart);
    }

    pub fn contains(&self, container: &str) -> bool {
        self.charts.borrow().contains_key(container)
    }

    /// Container ids with a live view, sorted.
    pub fn containers(&self) -> Vec<String> {
        self.charts.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.charts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.borrow().is_empty()
    }

    /// Visit every chart. The table must not be modified from inside `f`.
    pub(crate) fn for_each(&self, mut f: impl FnMut(&str, &LoadedChart<V>)) {
        for (container, chart) in self.charts.borrow().iter() {
            f(container, chart);
        }
    }
}
