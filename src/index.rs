//! Inverted index construction.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::tokenizer::index_tokens;
use crate::types::Document;

/// Build an inverted index mapping each token to the ids of the documents
/// containing it.
///
/// Each id appears at most once per token, and every id list preserves
/// collection order. Documents missing `id` or `text` are skipped. The
/// `BTreeMap` keeps iteration deterministic (lexicographic by token).
pub fn build_inverted_index(docs: &[Document]) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for doc in docs {
        let Some((id, text)) = doc.fields() else {
            continue;
        };
        // Dedupe per document before appending, so repeated tokens in one
        // document contribute the id once.
        let mut seen: HashSet<String> = HashSet::new();
        for token in index_tokens(text) {
            if seen.insert(token.clone()) {
                index.entry(token).or_default().push(id.to_owned());
            }
        }
    }

    debug!(
        "built inverted index: {} terms over {} records",
        index.len(),
        docs.len()
    );
    index
}
