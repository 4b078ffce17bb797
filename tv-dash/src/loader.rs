//! Embeds every registered spec into its container.

use std::fmt;

use crate::config::{EmbedOptions, SpecRegistry};
use crate::error::ChartError;
use crate::table::{ChartTable, LoadedChart};
use crate::view::ChartEmbedder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub container: String,
    pub spec: String,
    pub error: ChartError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not load {} into #{}: {}",
            self.spec, self.container, self.error
        )
    }
}

/// Outcome of one load pass, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn failed_containers(&self) -> Vec<String> {
        self.failed.iter().map(|f| f.container.clone()).collect()
    }
}

/// Embed each registry entry in turn, awaiting one before starting the next.
///
/// A failed embed is logged and skipped; it never stops the remaining entries.
pub async fn load_charts<E: ChartEmbedder>(
    registry: &SpecRegistry,
    options: &EmbedOptions,
    embedder: &E,
    table: &ChartTable<E::View>,
) -> LoadReport {
    let mut report = LoadReport::default();

    for entry in registry.iter() {
        match embedder.embed(&entry.selector(), &entry.spec, options).await {
            Ok(view) => {
                table.insert(
                    entry.container.clone(),
                    LoadedChart {
                        view,
                        declared: entry.signals.clone(),
                    },
                );
                log::info!("Loaded {} from {}", entry.container, entry.spec);
                report.loaded.push(entry.container.clone());
            }
            Err(error) => {
                let failure = LoadFailure {
                    container: entry.container.clone(),
                    spec: entry.spec.clone(),
                    error,
                };
                log::warn!("{}", failure);
                report.failed.push(failure);
            }
        }
    }

    log::info!(
        "Loaded {} of {} charts",
        report.loaded.len(),
        registry.len()
    );
    report
}
