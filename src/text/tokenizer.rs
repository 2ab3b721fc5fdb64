//! Term extraction with stopword filtering.
//!
//! Terms are maximal runs of Spanish letters, at least four long, taken from
//! the lowercased, NFC-composed text and then normalized. The stopword lexicon is a value
//! handed to the tokenizer, so tests and `catecismo.toml` can swap it.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::normalize_text;

/// Minimum term length, in characters, both before and after normalization.
pub const MIN_TERM_LEN: usize = 4;

/// Built-in Spanish stopwords, already in normalized form.
///
/// Function words, pronouns and copulas, plus "dios": it appears in nearly
/// every answer and would otherwise top every frequency table.
pub const SPANISH_STOPWORDS: &[&str] = &[
    // Articles and contractions
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al",
    // Prepositions and conjunctions
    "a", "en", "con", "por", "para", "que", "es", "son", "se", "su", "sus",
    "y", "o", "e", "u", "no", "si", "como", "pero", "mas",
    // Demonstratives
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella",
    // Clitics and possessives
    "lo", "le", "les", "me", "te", "nos", "os", "mi", "tu",
    // Auxiliary and common verbs
    "ser", "estar", "haber", "tener", "hacer", "poder", "deber", "hay",
    // Interrogatives and relatives
    "quien", "cual", "donde", "cuando", "porque",
    "sin", "sobre", "entre", "hasta", "desde", "ya", "muy", "bien", "mal",
    // Quantifiers
    "todo", "toda", "todos", "todas", "otro", "otra", "otros", "otras",
    "mismo", "misma", "mismos", "mismas", "tal", "tanto", "tanta", "tantos", "tantas",
    // Connectives
    "asi", "pues", "luego", "aunque", "sino", "tambien", "ademas", "ni", "oh",
    // Pronouns
    "ellos", "ellas", "ello", "ella", "nosotros", "vosotros", "ustedes",
    // Conjugated forms
    "ha", "han", "he", "sido", "fue", "fueron", "era", "eran", "seria", "seran",
    "siendo", "puede", "pueden", "debe", "deben", "tiene", "tienen", "hace", "hacen",
    "esto", "eso",
    "dios",
    "cuales", "cada", "segun", "nuestro", "nuestra", "nuestros", "nuestras",
];

/// Candidate term pattern, applied to lowercased text.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-ZáéíóúñÁÉÍÓÚÑüÜ]{4,}\b").expect("Invalid term regex")
});

/// Closed set of terms excluded from frequency counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// The built-in Spanish stopword set.
    pub fn spanish() -> Self {
        Self::from_words(SPANISH_STOPWORDS.iter().copied())
    }

    /// Build a lexicon from arbitrary words. Words are normalized so that
    /// "también" and "tambien" are the same entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| normalize_text(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Add more stopwords.
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.extend(Self::from_words(words).stopwords);
        self
    }

    /// Check a normalized term.
    pub fn contains(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Extracts normalized, non-stopword terms from free text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Terms of `text` in order of appearance, repeats included.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        // Composed form, so an accent never splits a letter run
        let lowered: String = text.to_lowercase().nfc().collect();
        WORD.find_iter(&lowered)
            .map(|m| normalize_text(m.as_str()))
            .filter(|term| self.keeps(term))
            .collect()
    }

    fn keeps(&self, term: &str) -> bool {
        term.chars().count() >= MIN_TERM_LEN && !self.lexicon.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopword_sentence_yields_nothing() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("Dios es el que es, y lo hace todo").is_empty());
    }

    #[test]
    fn test_dios_is_excluded_but_content_words_kept() {
        let tokenizer = Tokenizer::default();
        // "fiel" and "bueno" are not in the lexicon
        assert_eq!(tokenizer.tokenize("Dios es fiel y bueno"), vec!["fiel", "bueno"]);
    }

    #[test]
    fn test_short_and_stop_terms_dropped() {
        let tokenizer = Tokenizer::default();
        // "Dios", "todos", "nuestro" are stopwords; "es", "el", "mal" are short
        assert_eq!(
            tokenizer.tokenize("Dios es el Señor de todos; nuestro mal"),
            vec!["senor".to_string()]
        );
    }

    #[test]
    fn test_terms_are_normalized_and_repeated() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("Salvación, SALVACIÓN y salvacion por gracia");
        assert_eq!(terms, vec!["salvacion", "salvacion", "salvacion", "gracia"]);
    }

    #[test]
    fn test_accented_stopword_matches_normalized_entry() {
        let tokenizer = Tokenizer::default();
        // "también" and "según" normalize onto stopwords
        assert!(tokenizer.tokenize("También según").is_empty());
    }

    #[test]
    fn test_letter_runs_touching_digits_are_not_terms() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("versiculo2 x_gracia").is_empty());
        assert_eq!(tokenizer.tokenize("versículo 2"), vec!["versiculo"]);
    }

    #[test]
    fn test_decomposed_accents_match_composed() {
        let tokenizer = Tokenizer::default();
        let decomposed = "salvacio\u{301}n y gracia";
        assert_eq!(tokenizer.tokenize(decomposed), vec!["salvacion", "gracia"]);
        assert_eq!(tokenizer.tokenize(decomposed), tokenizer.tokenize("salvación y gracia"));
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = Tokenizer::default();
        let text = "El hombre principal fin es glorificar a Dios y gozar de él para siempre.";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
        assert_eq!(
            tokenizer.tokenize(text),
            vec!["hombre", "principal", "glorificar", "gozar", "siempre"]
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let tokenizer = Tokenizer::new(Lexicon::from_words(["gracia"]));
        assert_eq!(tokenizer.tokenize("Dios da gracia"), vec!["dios"]);

        let extended = Tokenizer::new(Lexicon::spanish().extend(["Señor"]));
        assert!(extended.tokenize("el Señor").is_empty());
    }

    #[test]
    fn test_builtin_lexicon_is_normalized() {
        for word in SPANISH_STOPWORDS {
            assert_eq!(&normalize_text(word), word);
        }
        assert!(Lexicon::spanish().contains("dios"));
    }
}
