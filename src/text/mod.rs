//! Text canonicalization and term extraction.
//!
//! - `normalize`: diacritic stripping + case folding for comparisons
//! - `tokenizer`: candidate terms (4+ letters) minus a stopword lexicon
//!
//! No stemming happens here. "salvación" and "salvacion" meet after
//! normalization, "salva" and "salvación" never do.

mod normalize;
mod tokenizer;

pub use normalize::normalize_text;
pub use tokenizer::{Lexicon, Tokenizer, MIN_TERM_LEN, SPANISH_STOPWORDS};
