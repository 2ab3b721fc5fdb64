//! Testament classification of book tokens.
//!
//! ## Matching Strategy
//!
//! The token is normalized, then compared against each canonical name in
//! list order, Old Testament first:
//! 1. Exact match
//! 2. Numbered canonical ("1 samuel"): token starts with the first word ("1")
//! 3. Single-word canonical ("salmos"): token starts with its first 4 chars ("salm")
//!
//! Rule 2 is loose on purpose. Any numbered token passes it against the first
//! numbered Old Testament book with the same digit, so "1 Juan" lands in the
//! Old Testament. The corpus is fixed and this is the behavior its published
//! coverage tables were built with.

use crate::text::normalize_text;
use crate::types::Testament;

/// Canonical Old Testament names, normalized. "salmo" follows "salmos".
pub const OLD_TESTAMENT_BOOKS: &[&str] = &[
    "genesis", "exodo", "levitico", "numeros", "deuteronomio",
    "josue", "jueces", "rut", "1 samuel", "2 samuel",
    "1 reyes", "2 reyes", "1 cronicas", "2 cronicas", "esdras",
    "nehemias", "ester", "job", "salmos", "salmo",
    "proverbios", "eclesiastes", "cantares", "isaias", "jeremias",
    "lamentaciones", "ezequiel", "daniel", "oseas", "joel",
    "amos", "abdias", "jonas", "miqueas", "nahum",
    "habacuc", "sofonias", "hageo", "zacarias", "malaquias",
];

/// Canonical New Testament names, normalized.
pub const NEW_TESTAMENT_BOOKS: &[&str] = &[
    "mateo", "marcos", "lucas", "juan", "hechos",
    "romanos", "1 corintios", "2 corintios", "galatas", "efesios",
    "filipenses", "colosenses", "1 tesalonicenses", "2 tesalonicenses", "1 timoteo",
    "2 timoteo", "tito", "filemon", "hebreos", "santiago",
    "1 pedro", "2 pedro", "1 juan", "2 juan", "3 juan",
    "judas", "apocalipsis",
];

/// Characters of a single-word canonical name that a token must start with.
const SINGLE_WORD_PREFIX: usize = 4;

/// Ordered canonical book names per testament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCatalog {
    old_testament: Vec<String>,
    new_testament: Vec<String>,
}

impl BookCatalog {
    /// Standard Spanish book names.
    pub fn spanish() -> Self {
        Self::new(OLD_TESTAMENT_BOOKS.iter().copied(), NEW_TESTAMENT_BOOKS.iter().copied())
    }

    /// Custom catalog; names are trimmed and normalized on the way in.
    pub fn new<I, J, S, T>(old_testament: I, new_testament: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            old_testament: normalized_names(old_testament),
            new_testament: normalized_names(new_testament),
        }
    }

    pub fn books(&self, testament: Testament) -> &[String] {
        match testament {
            Testament::Old => &self.old_testament,
            Testament::New => &self.new_testament,
        }
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Blank names are dropped: an empty prefix would match every token.
fn normalized_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| normalize_text(name.as_ref().trim()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Maps book tokens to a testament with the prefix heuristic above.
#[derive(Debug, Clone, Default)]
pub struct TestamentClassifier {
    catalog: BookCatalog,
}

impl TestamentClassifier {
    pub fn new(catalog: BookCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Classify a book token such as "Salmos" or "1 Juan".
    /// `None` means the book could not be categorized.
    pub fn classify(&self, book: &str) -> Option<Testament> {
        if book.is_empty() {
            return None;
        }
        let normalized = normalize_text(book);

        [Testament::Old, Testament::New].into_iter().find(|&testament| {
            self.catalog
                .books(testament)
                .iter()
                .any(|canonical| matches_canonical(&normalized, canonical))
        })
    }
}

/// Exact match, or prefix match on the canonical name's leading part.
fn matches_canonical(token: &str, canonical: &str) -> bool {
    if token == canonical {
        return true;
    }

    let prefix = match canonical.split_once(' ') {
        Some((first_word, _)) => first_word,
        None => leading_chars(canonical, SINGLE_WORD_PREFIX),
    };

    token.starts_with(prefix)
}

/// First `n` characters of `s` (all of it if shorter).
fn leading_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
