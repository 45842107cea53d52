//! Whole-word TF-IDF ranking over in-memory document collections.
//!
//! `tfrank` ranks a fixed collection of short text documents against a
//! free-text query and returns document ids ordered by relevance. There is
//! no persistence, no network surface, and no state across calls; every
//! invocation computes its statistics fresh from the slice it is given.
//!
//! Two entry points share one matching primitive:
//!
//! - [`count_occurrences`] counts whole-word, case-insensitive occurrences
//!   of a needle in a text, with custom boundary rules (underscore is a word
//!   character; hyphen and apostrophe are not).
//! - [`build_inverted_index`] maps each lowercase token to the ordered list
//!   of document ids containing it.
//! - [`search`] scores candidate documents with ln-scaled TF-IDF and sorts
//!   them by relevance with a stable, deterministic tie-break on collection
//!   order.
//!
//! ```
//! use tfrank::{search, Document};
//!
//! let docs = vec![
//!     Document::new("a", "Shoot me again"),
//!     Document::new("b", "SHOOTING stars"),
//!     Document::new("c", "time to SHOOT."),
//! ];
//! // "SHOOTING" is a different word, so doc "b" does not match.
//! assert_eq!(search(&docs, "shoot"), vec!["a", "c"]);
//! ```
//!
//! Malformed input never raises an error: records missing a string `id` or
//! `text` are skipped, and empty queries return empty results.

pub mod index;
pub mod matcher;
pub mod search;
pub mod tokenizer;
pub mod types;

pub use index::build_inverted_index;
pub use matcher::{count_occurrences, is_word_char};
pub use search::search;
pub use tokenizer::{index_tokens, is_index_char};
pub use types::Document;
