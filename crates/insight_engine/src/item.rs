use serde::Deserialize;

use crate::token::WordCounter;

/// Label shown for items without a usable title.
pub const UNTITLED_LABEL: &str = "Untitled";

/// One content entry as supplied by the external item source.
///
/// Every field is optional; absence defaults to empty/zero and is never an
/// error. The wire format uses camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub title: Option<String>,
    pub tips: Option<Vec<serde_json::Value>>,
    pub content: Option<ItemContent>,
}

/// The structured content sections of an item. Only these four sections
/// contribute to the word count.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemContent {
    pub introduction: Option<String>,
    pub main_content: Option<String>,
    pub impact: Option<String>,
    pub solution: Option<String>,
}

impl Item {
    /// Display label; an absent or empty title falls back to the fixed
    /// placeholder.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(UNTITLED_LABEL)
    }

    pub fn tip_count(&self) -> u32 {
        self.tips.as_ref().map_or(0, |tips| tips.len() as u32)
    }

    /// Total words across the content sections that are present.
    pub fn word_count(&self, counter: &dyn WordCounter) -> u32 {
        match &self.content {
            Some(content) => content.sections().map(|text| counter.count(text)).sum(),
            None => 0,
        }
    }
}

impl ItemContent {
    /// The counted sections in their fixed order, skipping absent ones.
    fn sections(&self) -> impl Iterator<Item = &str> {
        [
            &self.introduction,
            &self.main_content,
            &self.impact,
            &self.solution,
        ]
        .into_iter()
        .filter_map(|section| section.as_deref())
    }
}
