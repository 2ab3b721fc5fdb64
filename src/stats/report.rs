//! Statistics report records.
//!
//! Field names and nesting are the `statistics.json` format read by the
//! statistics page. Maps serialize in corpus traversal order.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::counter::OrderedCounter;
use crate::types::Testament;

/// The complete report. Built once per run, never updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub summary: Summary,
    pub top_references: Vec<ReferenceCount>,
    pub questions_by_subquestion_count: Vec<SubquestionRank>,
    pub term_frequency: Vec<TermCount>,
    pub word_cloud_data: Vec<WordCloudEntry>,
    pub book_coverage: BookCoverage,
    pub question_complexity: Vec<QuestionComplexity>,
    pub scripture_concordance: Concordance,
}

/// Corpus-wide counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_questions: usize,
    pub total_subquestions: usize,
    /// Subitems with a non-empty reference
    pub total_references: usize,
    /// Distinct raw reference strings
    pub unique_references: usize,
    /// One decimal place
    pub avg_subquestions_per_question: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceCount {
    pub reference: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubquestionRank {
    pub number: u32,
    pub question: String,
    pub subquestion_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// `[term, weight]`, weight in 10..=110 (110 for the most frequent term).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloudEntry(pub String, pub u32);

impl WordCloudEntry {
    pub fn term(&self) -> &str {
        &self.0
    }

    pub fn weight(&self) -> u32 {
        self.1
    }
}

/// Reference counts per book token, split by testament.
/// Keys are book tokens as written in the corpus ("1 Juan", "Salmos").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookCoverage {
    pub old_testament: OrderedCounter,
    pub new_testament: OrderedCounter,
}

impl BookCoverage {
    pub fn testament(&self, testament: Testament) -> &OrderedCounter {
        match testament {
            Testament::Old => &self.old_testament,
            Testament::New => &self.new_testament,
        }
    }

    pub(crate) fn testament_mut(&mut self, testament: Testament) -> &mut OrderedCounter {
        match testament {
            Testament::Old => &mut self.old_testament,
            Testament::New => &mut self.new_testament,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionComplexity {
    pub number: u32,
    pub question: String,
    pub subquestion_count: usize,
    pub reference_count: usize,
    /// `subquestion_count * 0.6 + reference_count * 0.4`, one decimal
    pub complexity_score: f64,
}

/// One place in the corpus that cites a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Question number
    pub question: u32,
    /// Leading excerpt of the citing subquestion
    pub subquestion: String,
}

/// Raw reference string -> citations, both in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    slots: HashMap<String, usize>,
    entries: Vec<(String, Vec<Citation>)>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `reference` is cited at `citation`.
    pub fn cite(&mut self, reference: &str, citation: Citation) {
        match self.slots.get(reference) {
            Some(&slot) => self.entries[slot].1.push(citation),
            None => {
                self.slots.insert(reference.to_string(), self.entries.len());
                self.entries.push((reference.to_string(), vec![citation]));
            }
        }
    }

    pub fn get(&self, reference: &str) -> Option<&[Citation]> {
        self.slots
            .get(reference)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of distinct references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Citation])> {
        self.entries
            .iter()
            .map(|(reference, citations)| (reference.as_str(), citations.as_slice()))
    }
}

impl Serialize for Concordance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (reference, citations) in &self.entries {
            map.serialize_entry(reference, citations)?;
        }
        map.end()
    }
}
