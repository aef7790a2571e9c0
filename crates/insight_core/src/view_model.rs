use crate::chart::ChartRow;

/// Legend name of the word-count series.
pub const SERIES_WORDS: &str = "Words";
/// Legend name of the tip-count series.
pub const SERIES_TIPS: &str = "Tips";
/// Unit suffix printed after word-count values.
pub const WORDS_UNIT: &str = "words";
/// Unit suffix printed after tip-count values.
pub const TIPS_UNIT: &str = "tips";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub chart: ChartView,
    pub item_count: usize,
    pub dirty: bool,
}

/// What the chart container should show this frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartView {
    /// No data pass has completed yet.
    #[default]
    Loading,
    /// The last pass failed; the message replaces the chart.
    Fault { message: String },
    /// A live chart.
    Bars(BarsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarsView {
    pub rows: Vec<ChartRow>,
    /// Final axis maximum; fixed so the reveal animation does not rescale.
    pub max_value: u32,
    /// Reveal progress in whole percent (0..=100).
    pub progress_pct: u16,
}
