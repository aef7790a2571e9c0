use crate::chart::{ChartData, ChartHandle, DataFault};
use crate::view_model::{AppViewModel, BarsView, ChartView};

/// Chart lifecycle. There is never more than one live handle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartPhase {
    /// No chart exists and no data pass has completed yet.
    #[default]
    NoChart,
    /// The last data pass failed; the error display replaces the chart.
    Faulted(DataFault),
    /// Exactly one chart is live.
    HasChart(ChartHandle),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: ChartPhase,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let chart = match &self.phase {
            ChartPhase::NoChart => ChartView::Loading,
            ChartPhase::Faulted(fault) => ChartView::Fault {
                message: fault.message().to_string(),
            },
            ChartPhase::HasChart(handle) => ChartView::Bars(BarsView {
                rows: handle.data().rows().to_vec(),
                max_value: handle.data().max_value(),
                progress_pct: handle.progress_pct(),
            }),
        };
        let item_count = match &self.phase {
            ChartPhase::HasChart(handle) => handle.data().len(),
            _ => 0,
        };
        AppViewModel {
            chart,
            item_count,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> &ChartPhase {
        &self.phase
    }

    pub fn has_chart(&self) -> bool {
        matches!(self.phase, ChartPhase::HasChart(_))
    }

    /// Installs a freshly built chart. Disposes any live handle first so
    /// destruction always precedes creation.
    pub(crate) fn install_chart(&mut self, data: ChartData) {
        self.dispose_chart();
        self.phase = ChartPhase::HasChart(ChartHandle::new(data));
        self.mark_dirty();
    }

    /// Drops the live chart handle, if any. Returns whether one existed.
    pub(crate) fn dispose_chart(&mut self) -> bool {
        if let ChartPhase::HasChart(_) = self.phase {
            self.phase = ChartPhase::NoChart;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Records a failed data pass. Any live chart is disposed first.
    pub(crate) fn set_fault(&mut self, fault: DataFault) {
        self.dispose_chart();
        self.phase = ChartPhase::Faulted(fault);
        self.mark_dirty();
    }

    /// Advances the reveal animation while one is running.
    pub(crate) fn tick_animation(&mut self) {
        if let ChartPhase::HasChart(handle) = &mut self.phase {
            if handle.tick() {
                self.dirty = true;
            }
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }
}
