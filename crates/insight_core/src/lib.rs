//! Insight core: pure chart lifecycle state machine and view-model helpers.
mod chart;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use chart::{ChartData, ChartHandle, ChartRow, DataFault, ANIMATION_TICKS};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, ChartPhase};
pub use update::update;
pub use view_model::{
    AppViewModel, BarsView, ChartView, SERIES_TIPS, SERIES_WORDS, TIPS_UNIT, WORDS_UNIT,
};
