//! Statistics aggregation over a validated corpus.
//!
//! One traversal in corpus order (questions ascending, groups and items as
//! stored) feeds three counters and the concordance:
//!
//! ```text
//! subitem.reference ─┬─▶ reference counter ─▶ top_references, unique count
//!                    ├─▶ extract_book_name ─▶ book counter ─▶ classify ─▶ book_coverage
//!                    └─▶ concordance
//! question/answer text ─▶ tokenizer ─▶ term counter ─▶ term_frequency, word_cloud_data
//! per-question tallies ─▶ questions_by_subquestion_count, question_complexity
//! ```
//!
//! Rankings are stable sorts over traversal order, so equal scores keep
//! corpus order and the report is identical across runs.

use serde::Deserialize;
use tracing::{debug, info};

use super::counter::OrderedCounter;
use super::report::{
    BookCoverage, Citation, Concordance, QuestionComplexity, ReferenceCount, StatisticsReport,
    SubquestionRank, Summary, TermCount, WordCloudEntry,
};
use crate::error::CorpusError;
use crate::scripture::{extract_book_name, TestamentClassifier};
use crate::text::Tokenizer;
use crate::types::{Catechism, Question};

/// Weight of subquestions in the complexity score.
pub const SUBQUESTION_WEIGHT: f64 = 0.6;
/// Weight of references in the complexity score.
pub const REFERENCE_WEIGHT: f64 = 0.4;
/// Added to every scaled word-cloud weight; the top term always gets 110.
pub const WORD_CLOUD_FLOOR: u32 = 10;

/// Lengths of the ranked sub-reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportLimits {
    pub top_references: usize,
    pub top_subquestions: usize,
    pub top_terms: usize,
    pub word_cloud: usize,
    pub top_complexity: usize,
    /// Characters of subquestion text kept in concordance entries
    pub concordance_excerpt: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_references: 10,
            top_subquestions: 20,
            top_terms: 50,
            word_cloud: 100,
            top_complexity: 20,
            concordance_excerpt: 80,
        }
    }
}

/// Builds a [`StatisticsReport`] with an injected tokenizer and classifier.
#[derive(Debug, Clone, Default)]
pub struct StatisticsBuilder {
    tokenizer: Tokenizer,
    classifier: TestamentClassifier,
    limits: ReportLimits,
}

/// Per-question tallies gathered during traversal.
struct QuestionTally<'a> {
    question: &'a Question,
    subquestions: usize,
    references: usize,
}

impl StatisticsBuilder {
    pub fn new(tokenizer: Tokenizer, classifier: TestamentClassifier) -> Self {
        Self {
            tokenizer,
            classifier,
            limits: ReportLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ReportLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the full report. Fails only if `catechism` is malformed.
    pub fn build(&self, catechism: &Catechism) -> Result<StatisticsReport, CorpusError> {
        catechism.validate()?;

        let mut references = OrderedCounter::new();
        let mut books = OrderedCounter::new();
        let mut terms = OrderedCounter::new();
        let mut concordance = Concordance::new();
        let mut tallies = Vec::with_capacity(catechism.questions.len());

        for question in &catechism.questions {
            let mut tally = QuestionTally {
                question,
                subquestions: 0,
                references: 0,
            };
            let mut texts: Vec<&str> = vec![&question.question, &question.full_answer];

            for item in question.subitems() {
                tally.subquestions += 1;
                texts.push(&item.question);
                texts.push(&item.answer);

                if !item.has_reference() {
                    continue;
                }
                tally.references += 1;
                references.add(&item.reference);

                if let Some(book) = extract_book_name(&item.reference) {
                    books.add(book);
                }

                concordance.cite(
                    &item.reference,
                    Citation {
                        question: question.number,
                        subquestion: excerpt(&item.question, self.limits.concordance_excerpt),
                    },
                );
            }

            for text in texts {
                for term in self.tokenizer.tokenize(text) {
                    terms.add(&term);
                }
            }

            tallies.push(tally);
        }

        let summary = Self::summary(catechism, &tallies, &references);
        debug!(
            subquestions = summary.total_subquestions,
            references = summary.total_references,
            distinct_terms = terms.len(),
            distinct_books = books.len(),
            "corpus traversed"
        );

        let report = StatisticsReport {
            top_references: references
                .most_common(self.limits.top_references)
                .into_iter()
                .map(|(reference, count)| ReferenceCount {
                    reference: reference.to_string(),
                    count,
                })
                .collect(),
            questions_by_subquestion_count: self.rank_by_subquestions(&tallies),
            term_frequency: terms
                .most_common(self.limits.top_terms)
                .into_iter()
                .map(|(term, count)| TermCount {
                    term: term.to_string(),
                    count,
                })
                .collect(),
            word_cloud_data: self.word_cloud(&terms),
            book_coverage: self.book_coverage(&books),
            question_complexity: self.rank_by_complexity(&tallies),
            scripture_concordance: concordance,
            summary,
        };

        info!(
            questions = report.summary.total_questions,
            unique_references = report.summary.unique_references,
            "statistics report built"
        );

        Ok(report)
    }

    fn summary(
        catechism: &Catechism,
        tallies: &[QuestionTally<'_>],
        references: &OrderedCounter,
    ) -> Summary {
        let total_subquestions: usize = tallies.iter().map(|t| t.subquestions).sum();
        let total_references: usize = tallies.iter().map(|t| t.references).sum();

        Summary {
            total_questions: catechism.total_questions,
            total_subquestions,
            total_references,
            unique_references: references.len(),
            avg_subquestions_per_question: round1(
                total_subquestions as f64 / catechism.total_questions as f64,
            ),
        }
    }

    fn rank_by_subquestions(&self, tallies: &[QuestionTally<'_>]) -> Vec<SubquestionRank> {
        let mut ranked: Vec<SubquestionRank> = tallies
            .iter()
            .map(|t| SubquestionRank {
                number: t.question.number,
                question: t.question.question.clone(),
                subquestion_count: t.subquestions,
            })
            .collect();
        ranked.sort_by(|a, b| b.subquestion_count.cmp(&a.subquestion_count));
        ranked.truncate(self.limits.top_subquestions);
        ranked
    }

    fn rank_by_complexity(&self, tallies: &[QuestionTally<'_>]) -> Vec<QuestionComplexity> {
        let mut ranked: Vec<QuestionComplexity> = tallies
            .iter()
            .map(|t| QuestionComplexity {
                number: t.question.number,
                question: t.question.question.clone(),
                subquestion_count: t.subquestions,
                reference_count: t.references,
                complexity_score: complexity_score(t.subquestions, t.references),
            })
            .collect();
        ranked.sort_by(|a, b| b.complexity_score.total_cmp(&a.complexity_score));
        ranked.truncate(self.limits.top_complexity);
        ranked
    }

    fn word_cloud(&self, terms: &OrderedCounter) -> Vec<WordCloudEntry> {
        let Some(max_count) = terms.max_count() else {
            return Vec::new();
        };

        terms
            .most_common(self.limits.word_cloud)
            .into_iter()
            .map(|(term, count)| WordCloudEntry(term.to_string(), word_cloud_weight(count, max_count)))
            .collect()
    }

    fn book_coverage(&self, books: &OrderedCounter) -> BookCoverage {
        let mut coverage = BookCoverage::default();
        for (book, count) in books.iter() {
            match self.classifier.classify(book) {
                Some(testament) => coverage.testament_mut(testament).add_n(book, count),
                None => debug!(book, count, "book not categorized, left out of coverage"),
            }
        }
        coverage
    }
}

/// `subquestions * 0.6 + references * 0.4`, one decimal.
pub fn complexity_score(subquestions: usize, references: usize) -> f64 {
    round1(subquestions as f64 * SUBQUESTION_WEIGHT + references as f64 * REFERENCE_WEIGHT)
}

/// Scale a count against the maximum into 10..=110 (truncating).
pub fn word_cloud_weight(count: usize, max_count: usize) -> u32 {
    ((count as f64 / max_count as f64) * 100.0) as u32 + WORD_CLOUD_FLOOR
}

/// Round to one decimal place, half-to-even on the exact binary value.
///
/// Float formatting rounds the exact decimal expansion of the value, so
/// 0.25 becomes 0.2 and 0.35 (stored as 0.34999...) becomes 0.3.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// First `max_chars` characters of `text`.
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
