//! Corpus loading and artifact output.
//!
//! Artifacts land under `<output>/data/`:
//! - `search-index.json`: compact array of search entries
//! - `statistics.json`: the statistics report, 2-space indented
//!
//! Non-ASCII text is written as-is (UTF-8), never `\u` escaped. Neither file
//! carries a timestamp, so rebuilding an unchanged corpus rewrites identical
//! bytes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::CorpusError;
use crate::stats::StatisticsReport;
use crate::types::{Catechism, SearchEntry};

/// Subdirectory of the output directory holding JSON artifacts.
pub const DATA_DIR: &str = "data";
pub const SEARCH_INDEX_FILE: &str = "search-index.json";
pub const STATISTICS_FILE: &str = "statistics.json";

/// Paths of the artifacts written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub search_index: PathBuf,
    pub statistics: PathBuf,
}

/// Read and validate the corpus document at `path`.
pub fn load_catechism(path: &Path) -> Result<Catechism, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Catechism::from_json_str(&content)
}

/// Serialize the search index as a compact JSON array.
pub fn render_search_index(index: &[SearchEntry]) -> Result<String> {
    serde_json::to_string(index).context("Failed to serialize search index")
}

/// Serialize the statistics report, pretty-printed.
pub fn render_statistics(report: &StatisticsReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize statistics report")
}

/// Write both artifacts, creating `<output>/data/` as needed.
pub fn write_artifacts(
    output_dir: &Path,
    index: &[SearchEntry],
    report: &StatisticsReport,
) -> Result<ArtifactPaths> {
    let data_dir = output_dir.join(DATA_DIR);
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let paths = ArtifactPaths {
        search_index: data_dir.join(SEARCH_INDEX_FILE),
        statistics: data_dir.join(STATISTICS_FILE),
    };

    write_file(&paths.search_index, &render_search_index(index)?)?;
    write_file(&paths.statistics, &render_statistics(report)?)?;

    Ok(paths)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexing::build_search_index;
    use crate::stats::StatisticsBuilder;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn corpus_json() -> Value {
        json!({
            "title": "Catecismo Bautista",
            "description": "Con la ampliación de Beddome",
            "total_questions": 2,
            "questions": [
                {
                    "number": 1,
                    "question": "¿Quién es el primero y el mejor de todos los seres?",
                    "full_answer": "Dios es el primero y el mejor de todos los seres.",
                    "beddome_expansion": [ { "items": [
                        {
                            "question": "¿Hay un Dios?",
                            "answer": "Sí, hay un Dios.",
                            "verse": "Porque de tal manera amó Dios al mundo",
                            "reference": "Juan 3:16"
                        }
                    ] } ]
                },
                {
                    "number": 2,
                    "question": "¿Debe todo el mundo creer en Dios?",
                    "full_answer": "Todo el mundo debe creer en Dios."
                }
            ]
        })
    }

    #[test]
    fn test_load_catechism() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("catecismo.json");
        fs::write(&path, corpus_json().to_string())?;

        let catechism = load_catechism(&path)?;
        assert_eq!(catechism.questions.len(), 2);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catechism(Path::new("/nonexistent/catecismo.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_load_malformed_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("catecismo.json");
        fs::write(&path, r#"{"title": "t", "questions": []}"#)?;

        let err = load_catechism(&path).unwrap_err();
        assert!(err.is_malformed_input());
        Ok(())
    }

    #[test]
    fn test_write_artifacts_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let catechism = Catechism::from_value(corpus_json())?;
        let index = build_search_index(&catechism);
        let report = StatisticsBuilder::default().build(&catechism)?;

        let paths = write_artifacts(dir.path(), &index, &report)?;
        assert_eq!(paths.search_index, dir.path().join("data/search-index.json"));

        let written_index: Value = serde_json::from_str(&fs::read_to_string(&paths.search_index)?)?;
        assert_eq!(written_index.as_array().map(Vec::len), Some(3));
        assert_eq!(written_index[1]["type"], "beddome");
        assert_eq!(written_index[1]["url"], "/pregunta/1.html#grupo-1");
        assert!(written_index[0].get("verse").is_none());

        let written_stats: Value = serde_json::from_str(&fs::read_to_string(&paths.statistics)?)?;
        let keys: Vec<&str> = written_stats
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        for key in [
            "summary",
            "top_references",
            "questions_by_subquestion_count",
            "term_frequency",
            "word_cloud_data",
            "book_coverage",
            "question_complexity",
            "scripture_concordance",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(written_stats["book_coverage"]["new_testament"]["Juan"], 1);
        assert_eq!(
            written_stats["scripture_concordance"]["Juan 3:16"][0]["subquestion"],
            "¿Hay un Dios?"
        );
        Ok(())
    }

    #[test]
    fn test_utf8_is_not_escaped() -> Result<()> {
        let catechism = Catechism::from_value(corpus_json())?;
        let rendered = render_search_index(&build_search_index(&catechism))?;
        assert!(rendered.contains("¿Quién es el primero"));
        assert!(!rendered.contains("\\u00"));
        Ok(())
    }

    #[test]
    fn test_rebuild_is_byte_identical() -> Result<()> {
        let dir = TempDir::new()?;
        let catechism = Catechism::from_value(corpus_json())?;
        let builder = StatisticsBuilder::default();

        let first = write_artifacts(dir.path(), &build_search_index(&catechism), &builder.build(&catechism)?)?;
        let stats_before = fs::read(&first.statistics)?;
        let index_before = fs::read(&first.search_index)?;

        let second = write_artifacts(dir.path(), &build_search_index(&catechism), &builder.build(&catechism)?)?;
        assert_eq!(fs::read(&second.statistics)?, stats_before);
        assert_eq!(fs::read(&second.search_index)?, index_before);
        Ok(())
    }
}
