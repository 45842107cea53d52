//! TF-IDF ranked search.

use std::cmp::Ordering;

use log::debug;

use crate::matcher::count_occurrences;
use crate::types::Document;

/// Per-candidate scoring state, kept with the original slice position for
/// the final tie-break.
struct Candidate<'a> {
    position: usize,
    id: &'a str,
    /// Term frequency per query word, parallel to the query word set.
    tf: Vec<usize>,
    unique_score: f64,
    freq_score: f64,
}

/// Rank documents against a free-text query, most relevant first.
///
/// The query is split on whitespace, lowercased, and deduplicated; every
/// query word is counted as a whole word in every document via
/// [`count_occurrences`]. A document is a candidate when at least one query
/// word occurs in it. Candidates are scored with ln-scaled TF-IDF:
///
/// - `unique_score = Σ idf(w)` over query words present in the document
/// - `freq_score = Σ (1 + ln(tf(w))) · idf(w)` over the same words
///
/// where `idf(w) = ln(N / df(w))` and `N` is the full collection length.
/// Statistics are recomputed from the given slice on every call; nothing is
/// cached. Ordering is `unique_score` descending, then `freq_score`
/// descending, then original collection order. When a query word occurs in
/// every document (`idf = 0`) candidates fall back entirely to collection
/// order.
///
/// Malformed records and empty or whitespace-only queries degrade to empty
/// results, never errors.
pub fn search(docs: &[Document], query: &str) -> Vec<String> {
    let words = query_words(query);
    if words.is_empty() {
        return Vec::new();
    }

    // N counts every record in the slice, including ones skipped below for
    // missing fields.
    let total_docs = docs.len() as f64;

    let mut doc_freq = vec![0usize; words.len()];
    let mut candidates: Vec<Candidate> = Vec::new();

    for (position, doc) in docs.iter().enumerate() {
        let Some((id, text)) = doc.fields() else {
            continue;
        };
        let tf: Vec<usize> = words.iter().map(|w| count_occurrences(text, w)).collect();
        for (df, &count) in doc_freq.iter_mut().zip(&tf) {
            if count > 0 {
                *df += 1;
            }
        }
        if tf.iter().any(|&count| count > 0) {
            candidates.push(Candidate {
                position,
                id,
                tf,
                unique_score: 0.0,
                freq_score: 0.0,
            });
        }
    }

    // Words absent from the whole collection keep idf = 0 and contribute
    // nothing; candidates by definition never pair idf = 0-by-absence with
    // tf > 0.
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| {
            if df > 0 {
                (total_docs / df as f64).ln()
            } else {
                0.0
            }
        })
        .collect();

    for cand in &mut candidates {
        for (&tf, &idf) in cand.tf.iter().zip(&idf) {
            if tf > 0 {
                cand.unique_score += idf;
                cand.freq_score += (1.0 + (tf as f64).ln()) * idf;
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.unique_score
            .partial_cmp(&a.unique_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.freq_score
                    .partial_cmp(&a.freq_score)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.position.cmp(&b.position))
    });

    debug!(
        "query {:?}: {} unique words, {} candidates of {} records",
        query,
        words.len(),
        candidates.len(),
        docs.len()
    );

    candidates.into_iter().map(|c| c.id.to_owned()).collect()
}

/// Case-folded, deduplicated query words in first-occurrence order.
fn query_words(query: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for raw in query.split_whitespace() {
        let word: String = raw.chars().map(|c| c.to_ascii_lowercase()).collect();
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}
