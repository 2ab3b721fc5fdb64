//! Unicode-aware comparison form for Spanish text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form: lowercase, canonically decomposed, with every
/// combining mark removed.
///
/// "José" and "JOSE" both become "jose". Digits, punctuation and whitespace
/// pass through untouched. Idempotent.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize_text("José"), "jose");
        assert_eq!(normalize_text("JOSE"), "jose");
        assert_eq!(normalize_text("Éxodo"), "exodo");
        assert_eq!(normalize_text("Nehemías"), "nehemias");
    }

    #[test]
    fn test_enye_loses_tilde() {
        // ñ decomposes to n + U+0303
        assert_eq!(normalize_text("Señor"), "senor");
        assert_eq!(normalize_text("pingüino"), "pinguino");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(normalize_text("1 Juan 3:16"), "1 juan 3:16");
        assert_eq!(normalize_text("¿Qué?  ¡Sí!"), "¿que?  ¡si!");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Génesis", "ÁRBOL de la VIDA", "", "ya normal", "Ñandú 42"] {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn test_ascii_length_preserved() {
        let s = "Salmos 23:1, Proverbios";
        assert_eq!(normalize_text(s).len(), s.len());
    }
}
