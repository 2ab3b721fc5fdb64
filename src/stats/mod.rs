//! Corpus statistics - the report behind the statistics page.
//!
//! The builder walks a validated [`Catechism`](crate::types::Catechism) once
//! and produces every sub-report together:
//! - summary counters and per-question rankings
//! - reference frequency and the scripture concordance
//! - term frequency and word-cloud weights
//! - book coverage by testament
//!
//! All counting goes through [`OrderedCounter`], which ranks equal counts by
//! first occurrence, so reports are reproducible byte for byte.

mod aggregator;
mod counter;
mod report;

pub use aggregator::{
    complexity_score, round1, word_cloud_weight, ReportLimits, StatisticsBuilder,
    REFERENCE_WEIGHT, SUBQUESTION_WEIGHT, WORD_CLOUD_FLOOR,
};
pub use counter::OrderedCounter;
pub use report::{
    BookCoverage, Citation, Concordance, QuestionComplexity, ReferenceCount, StatisticsReport,
    SubquestionRank, Summary, TermCount, WordCloudEntry,
};
