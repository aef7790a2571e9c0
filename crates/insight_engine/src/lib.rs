//! Insight engine: item data model, aggregation pipeline and source loader.
mod aggregate;
mod item;
mod loader;
mod source;
mod token;

pub use aggregate::{aggregate, AggregateError, Aggregation};
pub use item::{Item, ItemContent, UNTITLED_LABEL};
pub use loader::{LoaderEvent, LoaderHandle};
pub use source::{read_items, SourceError};
pub use token::{WhitespaceWordCounter, WordCounter};
