//! Inverted index tests: token → ordered id lists, per-document dedupe,
//! lenient handling of malformed records, and deterministic iteration.

use std::collections::BTreeMap;

use tfrank::{build_inverted_index, Document};

fn ids(index: &BTreeMap<String, Vec<String>>, token: &str) -> Vec<String> {
    index.get(token).cloned().unwrap_or_default()
}

// ==================== Construction Tests ====================

#[test]
fn test_index_basic() {
    let docs = vec![
        Document::new("doc1", "some text"),
        Document::new("doc2", "some text too"),
    ];
    let index = build_inverted_index(&docs);

    let expected: BTreeMap<String, Vec<String>> = [
        ("some", vec!["doc1", "doc2"]),
        ("text", vec!["doc1", "doc2"]),
        ("too", vec!["doc2"]),
    ]
    .into_iter()
    .map(|(token, ids)| {
        (
            token.to_string(),
            ids.into_iter().map(str::to_string).collect(),
        )
    })
    .collect();

    assert_eq!(index, expected);
}

#[test]
fn test_index_dedupes_ids_per_token() {
    let docs = vec![Document::new("d", "repeat repeat repeat")];
    let index = build_inverted_index(&docs);

    assert_eq!(index.len(), 1);
    assert_eq!(ids(&index, "repeat"), vec!["d"]);
}

#[test]
fn test_index_case_folds_and_keeps_mixed_tokens() {
    let docs = vec![
        Document::new("a", "Alpha ALPHA alpha"),
        Document::new("b", "alpha's $alpha ALPHA"),
    ];
    let index = build_inverted_index(&docs);

    // `$` and apostrophe group into tokens of their own.
    assert_eq!(ids(&index, "alpha"), vec!["a", "b"]);
    assert_eq!(ids(&index, "alpha's"), vec!["b"]);
    assert_eq!(ids(&index, "$alpha"), vec!["b"]);
}

#[test]
fn test_index_preserves_collection_order() {
    let docs = vec![
        Document::new("z", "shared"),
        Document::new("a", "shared"),
        Document::new("m", "shared"),
    ];
    let index = build_inverted_index(&docs);

    // Id lists follow collection order, not id order.
    assert_eq!(ids(&index, "shared"), vec!["z", "a", "m"]);
}

#[test]
fn test_index_empty_collection() {
    let index = build_inverted_index(&[]);
    assert!(index.is_empty());
}

// ==================== Malformed Record Tests ====================

#[test]
fn test_index_skips_records_missing_fields() {
    let docs = vec![
        Document::new("ok", "one two"),
        Document {
            id: Some("bad".to_string()),
            text: None,
        },
        Document {
            id: None,
            text: Some("ignored id type".to_string()),
        },
    ];
    let index = build_inverted_index(&docs);

    assert_eq!(index.len(), 2);
    assert_eq!(ids(&index, "one"), vec!["ok"]);
    assert_eq!(ids(&index, "two"), vec!["ok"]);
}

#[test]
fn test_lenient_deserialization_of_records() {
    // Non-string or missing fields become None instead of failing the batch.
    let raw = r#"[
        {"id": "ok", "text": "one two"},
        {"id": "bad", "text": null},
        {"id": 7, "text": "ignored id type"},
        {"text": "no id at all"}
    ]"#;
    let docs: Vec<Document> = serde_json::from_str(raw).expect("batch should deserialize");

    assert_eq!(docs.len(), 4);
    assert_eq!(docs[1].text, None);
    assert_eq!(docs[2].id, None);
    assert_eq!(docs[3].id, None);

    let index = build_inverted_index(&docs);
    assert_eq!(index.len(), 2);
    assert_eq!(ids(&index, "one"), vec!["ok"]);
    assert_eq!(ids(&index, "two"), vec!["ok"]);
}

// ==================== Determinism Tests ====================

#[test]
fn test_index_iteration_order_is_lexicographic() {
    let docs = vec![Document::new("d", "zebra apple $cash mango a'm")];
    let index = build_inverted_index(&docs);

    let tokens: Vec<&String> = index.keys().collect();
    let mut sorted = tokens.clone();
    sorted.sort();
    assert_eq!(tokens, sorted, "BTreeMap keys iterate in sorted order");
}

#[test]
fn test_index_build_is_deterministic() {
    let docs = vec![
        Document::new("a", "the quick brown fox"),
        Document::new("b", "jumps over the lazy dog"),
        Document::new("c", "the end"),
    ];
    let first = build_inverted_index(&docs);
    for _ in 0..10 {
        assert_eq!(build_inverted_index(&docs), first);
    }
}
