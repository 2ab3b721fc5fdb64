//! Configuration loading from catecismo.toml.
//!
//! The file is looked up in the given directory first, then in each parent,
//! the way cargo finds Cargo.toml. Relative paths inside it are
//! resolved against the file's own directory.
//!
//! ## Example
//!
//! ```toml
//! data = "catecismo-bautista-con-beddome-es.json"
//! output = "docs"
//! extend-stopwords = ["cristo", "señor"]
//!
//! [limits]
//! top-terms = 40
//! word-cloud = 80
//!
//! [books]
//! old-testament = ["genesis", "exodo"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::scripture::{BookCatalog, TestamentClassifier};
use crate::stats::{ReportLimits, StatisticsBuilder};
use crate::text::{Lexicon, Tokenizer};
use crate::types::Testament;

/// Config file name.
pub const CONFIG_FILE: &str = "catecismo.toml";

/// Corpus document used when the config names none.
pub const DEFAULT_DATA_FILE: &str = "catecismo-bautista-con-beddome-es.json";

/// Site output directory used when the config names none.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Catecismo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// Corpus JSON document.
    pub data: PathBuf,

    /// Output directory; artifacts go to `<output>/data/`.
    pub output: PathBuf,

    /// Replaces the built-in stopword list when non-empty.
    pub stopwords: Vec<String>,

    /// Added to the effective stopword list.
    pub extend_stopwords: Vec<String>,

    /// Replace the built-in canonical book lists when non-empty.
    pub old_testament_books: Vec<String>,
    pub new_testament_books: Vec<String>,

    /// Ranked sub-report sizes.
    pub limits: ReportLimits,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    data: Option<String>,
    output: Option<String>,
    stopwords: Option<Vec<String>>,
    extend_stopwords: Option<Vec<String>>,
    limits: Option<ReportLimits>,
    books: Option<RawBooks>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawBooks {
    old_testament: Option<Vec<String>>,
    new_testament: Option<Vec<String>>,
}

impl Config {
    /// Defaults with paths relative to `base`.
    pub fn defaults(base: &Path) -> Self {
        Self {
            source: None,
            data: base.join(DEFAULT_DATA_FILE),
            output: base.join(DEFAULT_OUTPUT_DIR),
            stopwords: Vec::new(),
            extend_stopwords: Vec::new(),
            old_testament_books: Vec::new(),
            new_testament_books: Vec::new(),
            limits: ReportLimits::default(),
        }
    }

    /// Load configuration for the given directory.
    ///
    /// Search order:
    /// 1. catecismo.toml in directory
    /// 2. catecismo.toml in each parent, nearest first
    /// 3. Defaults relative to `directory` if nothing found
    ///
    /// A file that exists but does not parse is an error, not a fallback.
    pub fn load(directory: &Path) -> Result<Self> {
        let mut current = Some(directory);
        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
            current = dir.parent();
        }

        Ok(Self::defaults(directory))
    }

    /// Load a specific config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let raw: RawConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        let base = source.parent().map(Path::to_path_buf).unwrap_or_default();
        let books = raw.books.unwrap_or_default();

        Self {
            data: base.join(raw.data.as_deref().unwrap_or(DEFAULT_DATA_FILE)),
            output: base.join(raw.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)),
            stopwords: raw.stopwords.unwrap_or_default(),
            extend_stopwords: raw.extend_stopwords.unwrap_or_default(),
            old_testament_books: books.old_testament.unwrap_or_default(),
            new_testament_books: books.new_testament.unwrap_or_default(),
            limits: raw.limits.unwrap_or_default(),
            source: Some(source),
        }
    }

    /// Effective stopword lexicon (built-in or custom, plus extensions).
    pub fn lexicon(&self) -> Lexicon {
        let base = if self.stopwords.is_empty() {
            Lexicon::spanish()
        } else {
            Lexicon::from_words(&self.stopwords)
        };
        base.extend(&self.extend_stopwords)
    }

    /// Effective book catalog. Each testament falls back independently.
    pub fn book_catalog(&self) -> BookCatalog {
        let builtin = BookCatalog::spanish();
        BookCatalog::new(
            books_or_builtin(&self.old_testament_books, &builtin, Testament::Old),
            books_or_builtin(&self.new_testament_books, &builtin, Testament::New),
        )
    }

    /// Statistics builder wired with this config's lexicon, catalog and limits.
    pub fn statistics_builder(&self) -> StatisticsBuilder {
        StatisticsBuilder::new(
            Tokenizer::new(self.lexicon()),
            TestamentClassifier::new(self.book_catalog()),
        )
        .with_limits(self.limits)
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref source) = self.source {
            lines.push(format!("   Config: {}", source.display()));
        } else {
            lines.push("   Config: (defaults)".to_string());
        }

        lines.push(format!("   Data: {}", self.data.display()));
        lines.push(format!("   Output: {}", self.output.display()));

        if !self.stopwords.is_empty() || !self.extend_stopwords.is_empty() {
            lines.push(format!("   Stopwords: {} terms", self.lexicon().len()));
        }

        if !self.old_testament_books.is_empty() || !self.new_testament_books.is_empty() {
            lines.push("   Books: custom catalog".to_string());
        }

        if self.limits != ReportLimits::default() {
            let l = &self.limits;
            lines.push(format!(
                "   Limits: refs={} subq={} terms={} cloud={} complexity={} excerpt={}",
                l.top_references, l.top_subquestions, l.top_terms, l.word_cloud,
                l.top_complexity, l.concordance_excerpt
            ));
        }

        lines.join("\n")
    }
}

fn books_or_builtin<'a>(
    custom: &'a [String],
    builtin: &'a BookCatalog,
    testament: Testament,
) -> &'a [String] {
    if custom.is_empty() {
        builtin.books(testament)
    } else {
        custom
    }
}
