use crate::{ChartData, DataFault};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Loader finished a full pass over the item source.
    DataReady(Result<ChartData, DataFault>),
    /// User pressed the rebuild control.
    RebuildClicked,
    /// UI/render tick; drives the bar reveal animation.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
