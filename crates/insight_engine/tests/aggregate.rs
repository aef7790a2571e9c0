use insight_engine::{
    aggregate, AggregateError, Item, WhitespaceWordCounter, WordCounter, UNTITLED_LABEL,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn item(value: serde_json::Value) -> Item {
    serde_json::from_value(value).expect("item fixture")
}

#[test]
fn counts_blank_text_as_zero() {
    let counter = WhitespaceWordCounter;
    assert_eq!(counter.count(""), 0);
    assert_eq!(counter.count("   "), 0);
    assert_eq!(counter.count("\t\n  \n"), 0);
}

#[test]
fn collapses_whitespace_runs() {
    let counter = WhitespaceWordCounter;
    assert_eq!(counter.count("one two  three"), 3);
    assert_eq!(counter.count("  leading and trailing  "), 3);
    assert_eq!(counter.count("tabs\tand\nnewlines"), 3);
}

#[test]
fn missing_source_is_data_not_found() {
    let result = aggregate(None, &WhitespaceWordCounter);
    assert_eq!(result, Err(AggregateError::DataNotFound));
}

#[test]
fn empty_source_is_no_items() {
    let result = aggregate(Some(&[]), &WhitespaceWordCounter);
    assert_eq!(result, Err(AggregateError::NoItems));
}

#[test]
fn error_messages_are_fixed() {
    assert_eq!(AggregateError::DataNotFound.to_string(), "data not found");
    assert_eq!(AggregateError::NoItems.to_string(), "no items to analyze");
}

#[test]
fn single_item_counts_words_and_tips() {
    let items = vec![item(json!({
        "title": "A",
        "tips": [1, 2],
        "content": {
            "introduction": "a b",
            "mainContent": "c"
        }
    }))];

    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();

    assert_eq!(aggregation.labels, vec!["A".to_string()]);
    assert_eq!(aggregation.word_counts, vec![3]);
    assert_eq!(aggregation.tip_counts, vec![2]);
}

#[test]
fn all_four_sections_contribute() {
    let items = vec![item(json!({
        "title": "Full",
        "content": {
            "introduction": "one two",
            "mainContent": "three",
            "impact": "four five six",
            "solution": "seven"
        }
    }))];

    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();
    assert_eq!(aggregation.word_counts, vec![7]);
}

#[test]
fn untitled_item_uses_placeholder() {
    let items = vec![item(json!({ "tips": [] }))];
    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();
    assert_eq!(aggregation.labels, vec![UNTITLED_LABEL.to_string()]);
}

#[test]
fn empty_title_uses_placeholder() {
    let items = vec![item(json!({ "title": "" }))];
    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();
    assert_eq!(aggregation.labels, vec![UNTITLED_LABEL.to_string()]);
}

#[test]
fn missing_tips_and_content_count_zero() {
    let items = vec![item(json!({ "title": "Bare" }))];
    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();
    assert_eq!(aggregation.word_counts, vec![0]);
    assert_eq!(aggregation.tip_counts, vec![0]);
}

#[test]
fn sequences_stay_aligned_and_ordered() {
    let items = vec![
        item(json!({
            "title": "First",
            "tips": ["a", "b", "c"],
            "content": { "introduction": "alpha beta" }
        })),
        item(json!({})),
        item(json!({
            "title": "Third",
            "tips": [],
            "content": { "solution": "gamma" }
        })),
    ];

    let aggregation = aggregate(Some(items.as_slice()), &WhitespaceWordCounter).unwrap();

    assert_eq!(aggregation.len(), items.len());
    assert_eq!(aggregation.labels.len(), aggregation.word_counts.len());
    assert_eq!(aggregation.labels.len(), aggregation.tip_counts.len());
    assert_eq!(
        aggregation.labels,
        vec![
            "First".to_string(),
            UNTITLED_LABEL.to_string(),
            "Third".to_string()
        ]
    );
    assert_eq!(aggregation.word_counts, vec![2, 0, 1]);
    assert_eq!(aggregation.tip_counts, vec![3, 0, 0]);
}
