//! Book-name extraction from free-form references.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading book number, then one run of (Spanish) letters.
/// Everything from the chapter onward is ignored.
static BOOK_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d?\s*[A-Za-záéíóúÁÉÍÓÚñÑ]+)").expect("Invalid book name regex")
});

/// Extract the book token of a reference.
///
/// `"1 Juan 3:16"` → `Some("1 Juan")`, `"Salmos 23:1"` → `Some("Salmos")`,
/// `""` → `None`. The returned slice borrows from `reference`.
pub fn extract_book_name(reference: &str) -> Option<&str> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }

    BOOK_NAME
        .captures(trimmed)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
}
