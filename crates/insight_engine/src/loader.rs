use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use insight_logging::{insight_debug, insight_info, insight_warn};

use crate::aggregate::{aggregate, AggregateError, Aggregation};
use crate::source::read_items;
use crate::token::{WhitespaceWordCounter, WordCounter};

enum LoaderCommand {
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderEvent {
    /// A full pass over the item source finished.
    DataReady(Result<Aggregation, AggregateError>),
}

/// Background loader owning the item source path.
///
/// Runs one pass immediately on construction and another on every `reload`,
/// so consumers get an explicit readiness signal instead of waiting a fixed
/// delay for the source to appear.
pub struct LoaderHandle {
    cmd_tx: mpsc::Sender<LoaderCommand>,
    event_rx: mpsc::Receiver<LoaderEvent>,
}

impl LoaderHandle {
    pub fn new(source_path: PathBuf) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let counter = WhitespaceWordCounter;
            while let Ok(LoaderCommand::Reload) = cmd_rx.recv() {
                let event = LoaderEvent::DataReady(run_pass(&source_path, &counter));
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        let handle = Self { cmd_tx, event_rx };
        handle.reload();
        handle
    }

    /// Schedules a fresh read-and-aggregate pass.
    pub fn reload(&self) {
        let _ = self.cmd_tx.send(LoaderCommand::Reload);
    }

    pub fn try_recv(&self) -> Option<LoaderEvent> {
        self.event_rx.try_recv().ok()
    }
}

fn run_pass(path: &Path, counter: &dyn WordCounter) -> Result<Aggregation, AggregateError> {
    let items = match read_items(path) {
        Ok(items) => Some(items),
        Err(err) => {
            // An unreadable source is indistinguishable from a missing one
            // as far as the chart is concerned; keep the detail in the log.
            insight_warn!("item source unavailable: {err}");
            None
        }
    };

    let result = aggregate(items.as_deref(), counter);
    match &result {
        Ok(aggregation) => {
            insight_info!("aggregated {} items from {:?}", aggregation.len(), path);
            insight_debug!(
                "labels={:?} words={:?} tips={:?}",
                aggregation.labels,
                aggregation.word_counts,
                aggregation.tip_counts
            );
        }
        Err(err) => insight_info!("aggregation yielded no chart: {err}"),
    }
    result
}
