#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-read the item source and aggregate it from scratch.
    ReloadData,
}
