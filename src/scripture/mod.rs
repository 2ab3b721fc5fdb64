//! Scripture references: book extraction and testament classification.
//!
//! A reference such as "1 Juan 3:16" is kept raw everywhere in the report
//! (top references, concordance). Only book coverage looks inside it:
//!
//! ```text
//! "1 Juan 3:16" ──extract_book_name──▶ "1 Juan" ──classify──▶ New | Old | unknown
//! ```
//!
//! Classification is a loose prefix heuristic; see [`TestamentClassifier`].

mod reference;
mod testament;

pub use reference::extract_book_name;
pub use testament::{BookCatalog, TestamentClassifier, NEW_TESTAMENT_BOOKS, OLD_TESTAMENT_BOOKS};
