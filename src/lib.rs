//! catecismo - Corpus analytics for the Baptist Catechism with Beddome's expansion
//!
//! Reads the catechism JSON document once and derives the two machine-readable
//! artifacts consumed by the static site: a flat search index and a
//! statistics report (reference rankings, vocabulary, book coverage per
//! testament, question complexity, scripture concordance).
//!
//! # Architecture
//!
//! ```text
//! corpus JSON → Catechism ─┬─▶ build_search_index ─────────────▶ search-index.json
//!                          └─▶ StatisticsBuilder ─▶ report ─────▶ statistics.json
//!                                 ↓         ↓                       ↓
//!                             tokenizer  classifier          SummaryRenderer
//!                           (normalize,  (book name,           (terminal)
//!                            stopwords)   testament)
//! ```
//!
//! Every stage is a pure function of the corpus: the same document always
//! yields byte-identical artifacts.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod indexing;
pub mod rendering;
pub mod scripture;
pub mod stats;
pub mod text;
pub mod types;

// Re-export core types
pub use error::CorpusError;
pub use types::{Catechism, EntryKind, ExpansionGroup, Question, SearchEntry, SubItem, Testament};

// Re-export pipeline entry points
pub use indexing::build_search_index;
pub use scripture::{extract_book_name, BookCatalog, TestamentClassifier};
pub use stats::{ReportLimits, StatisticsBuilder, StatisticsReport};
pub use text::{normalize_text, Lexicon, Tokenizer};
