//! Compact terminal summary of a statistics report.
//!
//! ```text
//! Catecismo Bautista
//!   2 questions · 3 subquestions · 2 references (1 unique) · 1.5 avg subquestions
//!
//! Top references
//!    1. Juan 3:16 (2)
//!
//! Top terms
//!   gracia(4) pecado(3) salvacion(2)
//!
//! Book coverage
//!   Nuevo Testamento: 1 books, 2 citations
//!     Juan(2)
//!
//! Most complex questions
//!    1. #1 score 2.6 (3 subquestions, 2 references) ¿Quién es Dios?
//! ```

use super::colors::{testament_label, Colorizer};
use crate::stats::StatisticsReport;
use crate::types::Testament;

/// Rows shown per ranked section by default.
const DEFAULT_ROWS: usize = 5;

pub struct SummaryRenderer {
    colors: Colorizer,
    rows: usize,
}

impl SummaryRenderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            colors: Colorizer::new(use_color),
            rows: DEFAULT_ROWS,
        }
    }

    /// Limit every ranked section to `rows` entries.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Render `report` under the corpus `title`.
    pub fn render(&self, title: &str, report: &StatisticsReport) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.heading(title));
        output.push('\n');
        output.push_str(&self.render_counters(report));
        output.push('\n');

        if !report.top_references.is_empty() {
            output.push('\n');
            output.push_str(&self.render_references(report));
        }

        if !report.term_frequency.is_empty() {
            output.push('\n');
            output.push_str(&self.render_terms(report));
        }

        output.push('\n');
        output.push_str(&self.render_coverage(report));

        if !report.question_complexity.is_empty() {
            output.push('\n');
            output.push_str(&self.render_complexity(report));
        }

        output
    }

    fn render_counters(&self, report: &StatisticsReport) -> String {
        let s = &report.summary;
        let sep = self.colors.dim("·");
        format!(
            "  {} questions {sep} {} subquestions {sep} {} references ({} unique) {sep} {} avg subquestions",
            self.colors.number(&s.total_questions.to_string()),
            self.colors.number(&s.total_subquestions.to_string()),
            self.colors.number(&s.total_references.to_string()),
            s.unique_references,
            self.colors.number(&format!("{:.1}", s.avg_subquestions_per_question)),
        )
    }

    fn render_references(&self, report: &StatisticsReport) -> String {
        let mut output = format!("{}\n", self.colors.heading("Top references"));
        for (rank, entry) in report.top_references.iter().take(self.rows).enumerate() {
            output.push_str(&format!(
                "  {:>2}. {} {}\n",
                rank + 1,
                self.colors.reference(&entry.reference),
                self.colors.dim(&format!("({})", entry.count)),
            ));
        }
        output
    }

    fn render_terms(&self, report: &StatisticsReport) -> String {
        let terms: Vec<String> = report
            .term_frequency
            .iter()
            .take(self.rows)
            .map(|t| format!("{}({})", self.colors.term(&t.term), t.count))
            .collect();
        format!("{}\n  {}\n", self.colors.heading("Top terms"), terms.join(" "))
    }

    fn render_coverage(&self, report: &StatisticsReport) -> String {
        let mut output = format!("{}\n", self.colors.heading("Book coverage"));

        for testament in [Testament::Old, Testament::New] {
            let books = report.book_coverage.testament(testament);
            if books.is_empty() {
                continue;
            }

            output.push_str(&format!(
                "  {}: {} books, {} citations\n",
                self.colors.testament(testament, testament_label(testament)),
                books.len(),
                books.total(),
            ));

            let top: Vec<String> = books
                .most_common(self.rows)
                .into_iter()
                .map(|(book, count)| format!("{}({})", self.colors.testament(testament, book), count))
                .collect();
            output.push_str(&format!("    {}\n", top.join(" ")));
        }

        if report.book_coverage.old_testament.is_empty()
            && report.book_coverage.new_testament.is_empty()
        {
            output.push_str(&format!("  {}\n", self.colors.dim("(no classified references)")));
        }

        output
    }

    fn render_complexity(&self, report: &StatisticsReport) -> String {
        let mut output = format!("{}\n", self.colors.heading("Most complex questions"));
        for (rank, q) in report.question_complexity.iter().take(self.rows).enumerate() {
            output.push_str(&format!(
                "  {:>2}. #{} score {} {} {}\n",
                rank + 1,
                q.number,
                self.colors.number(&format!("{:.1}", q.complexity_score)),
                self.colors.dim(&format!(
                    "({} subquestions, {} references)",
                    q.subquestion_count, q.reference_count
                )),
                q.question,
            ));
        }
        output
    }
}
