use thiserror::Error;

use crate::item::Item;
use crate::token::WordCounter;

/// Per-item aggregation output. The three sequences are index-aligned with
/// the input item list, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub labels: Vec<String>,
    pub word_counts: Vec<u32>,
    pub tip_counts: Vec<u32>,
}

impl Aggregation {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// The item source was never supplied.
    #[error("data not found")]
    DataNotFound,
    /// The item source was supplied but holds no items.
    #[error("no items to analyze")]
    NoItems,
}

/// Derives the display label plus word and tip counts for every item.
///
/// Pure function of its input; recomputed from scratch on every call. No
/// sorting, no dedup.
pub fn aggregate(
    items: Option<&[Item]>,
    counter: &dyn WordCounter,
) -> Result<Aggregation, AggregateError> {
    let items = items.ok_or(AggregateError::DataNotFound)?;
    if items.is_empty() {
        return Err(AggregateError::NoItems);
    }

    let mut aggregation = Aggregation {
        labels: Vec::with_capacity(items.len()),
        word_counts: Vec::with_capacity(items.len()),
        tip_counts: Vec::with_capacity(items.len()),
    };
    for item in items {
        aggregation.labels.push(item.label().to_string());
        aggregation.word_counts.push(item.word_count(counter));
        aggregation.tip_counts.push(item.tip_count());
    }
    Ok(aggregation)
}
