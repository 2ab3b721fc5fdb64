//! Core types for catecismo - the catechism corpus and its derived records.
//!
//! The input document is parsed straight into typed records and validated
//! once at the boundary ([`Catechism::from_json_str`]). Everything downstream
//! (indexing, statistics) works on a validated, immutable `Catechism` and
//! never probes for missing fields.
//!
//! Optional subitem fields follow the corpus conventions: a missing or
//! `null` verse/reference is the empty string, a missing expansion is an
//! empty list.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CorpusError;

/// Serde helpers for optional text fields.
mod text_serde {
    use super::*;

    /// Deserialize a string that may be `null`, mapping `null` to "".
    pub fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        Ok(opt.unwrap_or_default())
    }

    /// Deserialize a list that may be `null`, mapping `null` to empty.
    pub fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
        Ok(opt.unwrap_or_default())
    }
}

/// The whole corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catechism {
    pub title: String,
    pub description: String,
    /// Declared question count; must equal `questions.len()`
    pub total_questions: usize,
    pub questions: Vec<Question>,
}

impl Catechism {
    /// Parse and validate a corpus document.
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let catechism: Catechism = serde_json::from_str(json)?;
        catechism.validate()?;
        Ok(catechism)
    }

    /// Parse and validate an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CorpusError> {
        let catechism: Catechism = serde_json::from_value(value)?;
        catechism.validate()?;
        Ok(catechism)
    }

    /// Check the structural invariants the analytics rely on:
    /// non-empty, declared count matches, numbers are 1..=n in order.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.questions.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        if self.total_questions != self.questions.len() {
            return Err(CorpusError::QuestionCountMismatch {
                declared: self.total_questions,
                actual: self.questions.len(),
            });
        }

        for (idx, question) in self.questions.iter().enumerate() {
            let position = idx + 1;
            if question.number as usize != position {
                return Err(CorpusError::QuestionNumbering {
                    position,
                    number: question.number,
                });
            }
        }

        Ok(())
    }

    /// Total subitems across every question and group.
    pub fn subitem_count(&self) -> usize {
        self.questions.iter().map(|q| q.subitems().count()).sum()
    }
}

/// One numbered catechism question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    /// 1-based position in the corpus
    pub number: u32,
    pub question: String,
    pub full_answer: String,
    /// Beddome's expansion, in stored order (group order drives anchors)
    #[serde(default, deserialize_with = "text_serde::nullable_vec")]
    pub beddome_expansion: Vec<ExpansionGroup>,
}

impl Question {
    /// All subitems of all groups, in stored order.
    pub fn subitems(&self) -> impl Iterator<Item = &SubItem> {
        self.beddome_expansion.iter().flat_map(|g| g.items.iter())
    }

    /// Groups paired with their 1-based index.
    pub fn numbered_groups(&self) -> impl Iterator<Item = (usize, &ExpansionGroup)> {
        self.beddome_expansion
            .iter()
            .enumerate()
            .map(|(idx, group)| (idx + 1, group))
    }
}

/// A group of expansion subitems beneath a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpansionGroup {
    #[serde(default, deserialize_with = "text_serde::nullable_vec")]
    pub items: Vec<SubItem>,
}

/// One expansion subquestion with its answer and proof text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubItem {
    #[serde(default, deserialize_with = "text_serde::nullable")]
    pub question: String,
    #[serde(default, deserialize_with = "text_serde::nullable")]
    pub answer: String,
    #[serde(default, deserialize_with = "text_serde::nullable")]
    pub verse: String,
    /// Raw scripture reference, e.g. "1 Juan 3:16"; may be empty
    #[serde(default, deserialize_with = "text_serde::nullable")]
    pub reference: String,
}

impl SubItem {
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}

/// Search entry kind, serialized as the entry's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A top-level catechism question
    Question,
    /// A subquestion from Beddome's expansion
    Beddome,
}

/// One record of the flat search index.
///
/// A derived projection: it copies what it shows and owns nothing of the
/// corpus. `verse`/`reference` are present (possibly empty) on `beddome`
/// entries and absent on `question` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub url: String,
}

/// Bible testament of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Key used in the book-coverage report.
    pub fn key(self) -> &'static str {
        match self {
            Testament::Old => "old_testament",
            Testament::New => "new_testament",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_question_doc() -> serde_json::Value {
        json!({
            "title": "Catecismo",
            "description": "Prueba",
            "total_questions": 2,
            "questions": [
                {
                    "number": 1,
                    "question": "¿Quién es el primero de todos los seres?",
                    "full_answer": "Dios es el primero y el mejor de todos los seres.",
                    "beddome_expansion": [
                        { "items": [
                            { "question": "¿Hay un Dios?", "answer": "Sí.", "verse": "v", "reference": "Juan 3:16" },
                            { "question": "¿Es eterno?", "answer": "Sí." }
                        ] },
                        { "items": [] }
                    ]
                },
                {
                    "number": 2,
                    "question": "¿Debe todo el mundo conocer a Dios?",
                    "full_answer": "Sí."
                }
            ]
        })
    }

    #[test]
    fn test_parse_valid_corpus() {
        let catechism = Catechism::from_value(two_question_doc()).unwrap();
        assert_eq!(catechism.total_questions, 2);
        assert_eq!(catechism.questions[0].beddome_expansion.len(), 2);
        assert!(catechism.questions[1].beddome_expansion.is_empty());
        assert_eq!(catechism.subitem_count(), 2);
    }

    #[test]
    fn test_absent_optional_fields_are_empty() {
        let catechism = Catechism::from_value(two_question_doc()).unwrap();
        let second = &catechism.questions[0].beddome_expansion[0].items[1];
        assert_eq!(second.verse, "");
        assert_eq!(second.reference, "");
        assert!(!second.has_reference());
    }

    #[test]
    fn test_null_reference_is_absent() {
        let mut doc = two_question_doc();
        doc["questions"][0]["beddome_expansion"][0]["items"][0]["reference"] = json!(null);
        let catechism = Catechism::from_value(doc).unwrap();
        assert!(!catechism.questions[0].beddome_expansion[0].items[0].has_reference());
    }

    #[test]
    fn test_missing_total_questions_is_malformed() {
        let mut doc = two_question_doc();
        doc.as_object_mut().unwrap().remove("total_questions");
        let err = Catechism::from_value(doc).unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_missing_full_answer_is_malformed() {
        let mut doc = two_question_doc();
        doc["questions"][1].as_object_mut().unwrap().remove("full_answer");
        assert!(matches!(Catechism::from_value(doc), Err(CorpusError::Json(_))));
    }

    #[test]
    fn test_empty_questions_rejected() {
        let doc = json!({
            "title": "t", "description": "d", "total_questions": 0, "questions": []
        });
        assert!(matches!(Catechism::from_value(doc), Err(CorpusError::EmptyCorpus)));
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let mut doc = two_question_doc();
        doc["total_questions"] = json!(3);
        assert!(matches!(
            Catechism::from_value(doc),
            Err(CorpusError::QuestionCountMismatch { declared: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_numbering_gap_rejected() {
        let mut doc = two_question_doc();
        doc["questions"][1]["number"] = json!(7);
        assert!(matches!(
            Catechism::from_value(doc),
            Err(CorpusError::QuestionNumbering { position: 2, number: 7 })
        ));
    }

    #[test]
    fn test_numbered_groups_are_one_based() {
        let catechism = Catechism::from_value(two_question_doc()).unwrap();
        let indices: Vec<usize> = catechism.questions[0]
            .numbered_groups()
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_search_entry_serialization_shape() {
        let question = SearchEntry {
            number: 1,
            kind: EntryKind::Question,
            question: "q".into(),
            answer: "a".into(),
            verse: None,
            reference: None,
            url: "/pregunta/1.html".into(),
        };
        assert_eq!(
            serde_json::to_string(&question).unwrap(),
            r#"{"number":1,"type":"question","question":"q","answer":"a","url":"/pregunta/1.html"}"#
        );

        let beddome = SearchEntry {
            kind: EntryKind::Beddome,
            verse: Some(String::new()),
            reference: Some("Juan 3:16".into()),
            url: "/pregunta/1.html#grupo-1".into(),
            ..question
        };
        assert_eq!(
            serde_json::to_string(&beddome).unwrap(),
            r#"{"number":1,"type":"beddome","question":"q","answer":"a","verse":"","reference":"Juan 3:16","url":"/pregunta/1.html#grupo-1"}"#
        );
    }

    #[test]
    fn test_testament_keys() {
        assert_eq!(Testament::Old.key(), "old_testament");
        assert_eq!(Testament::New.key(), "new_testament");
    }
}
