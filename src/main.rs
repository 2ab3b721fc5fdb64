//! catecismo CLI - corpus analytics for the Baptist Catechism
//!
//! Command-line entry point. Orchestrates the pipeline:
//!
//! 1. Config: find catecismo.toml (walking up from --root), apply CLI overrides
//! 2. Load: read and validate the corpus JSON document
//! 3. Index: flatten questions and expansion groups into search entries
//! 4. Statistics: one traversal, every sub-report
//! 5. Write: `<output>/data/search-index.json` and `statistics.json`
//!
//! Any malformed corpus aborts before anything is written.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Search index and statistics for the Baptist Catechism
///
/// Reads the catechism JSON (questions, answers and Beddome's expansion with
/// scripture references) and writes the artifacts the static site loads:
/// a flat search index and a statistics report.
///
/// Examples:
///   catecismo                          # Use catecismo.toml or defaults
///   catecismo --summary                # Also print a terminal summary
///   catecismo --check -v               # Validate and build, write nothing
///   catecismo --data corpus.json --output site
#[derive(Parser, Debug)]
#[command(name = "catecismo")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Project root directory
    ///
    /// Where the catecismo.toml lookup starts. Relative paths in the
    /// config resolve against the config file's directory.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Corpus JSON document (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output directory (overrides config)
    ///
    /// Artifacts are written to <OUTPUT>/data/.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print a summary of the statistics report to stdout
    #[arg(short, long)]
    pub summary: bool,

    /// Build everything but write no files
    ///
    /// Exits non-zero if the corpus is malformed. Useful in CI.
    #[arg(long)]
    pub check: bool,

    /// Verbose output
    ///
    /// Shows progress messages with timings on stderr:
    ///   "Loaded 114 questions"
    ///   "Built search index: 1026 entries"
    ///   "Built statistics report"
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable diagnostic output
    ///
    /// Installs a tracing subscriber on stderr. Shows traversal counts and
    /// every reference whose book could not be assigned to a testament.
    /// Filter with RUST_LOG (default: catecismo=debug).
    #[arg(long)]
    pub diagnose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.diagnose {
        init_tracing();
    }

    if let Some(summary) = run(&cli)? {
        println!("{}", summary);
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catecismo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Execute the full pipeline. Returns the rendered summary when requested.
fn run(cli: &Cli) -> Result<Option<String>> {
    use catecismo::artifacts::{load_catechism, render_search_index, render_statistics, write_artifacts};
    use catecismo::config::Config;
    use catecismo::indexing::build_search_index;
    use catecismo::rendering::SummaryRenderer;
    use std::time::Instant;

    let start = Instant::now();

    let root = cli.root.canonicalize().map_err(|e| {
        anyhow::anyhow!(
            "Failed to resolve root path '{}': {}",
            cli.root.display(),
            e
        )
    })?;

    let mut config = Config::load(&root)?;
    if let Some(ref data) = cli.data {
        config.data = data.clone();
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }

    if cli.verbose {
        eprintln!("📖 catecismo v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Root: {}", root.display());
        eprintln!("{}", config.display_summary());
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 1: Load and validate
    // ══════════════════════════════════════════════════════════════════════════
    let catechism = load_catechism(&config.data)
        .with_context(|| format!("Cannot build artifacts from {}", config.data.display()))?;

    if cli.verbose {
        eprintln!(
            "✓ Loaded {} questions, {} subquestions ({:.2?})",
            catechism.questions.len(),
            catechism.subitem_count(),
            start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 2: Search index
    // ══════════════════════════════════════════════════════════════════════════
    let index_start = Instant::now();
    let index = build_search_index(&catechism);

    if cli.verbose {
        eprintln!(
            "✓ Built search index: {} entries ({:.2?})",
            index.len(),
            index_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 3: Statistics
    // ══════════════════════════════════════════════════════════════════════════
    let stats_start = Instant::now();
    let report = config.statistics_builder().build(&catechism)?;

    if cli.verbose {
        eprintln!(
            "✓ Built statistics report: {} unique references, {} terms ({:.2?})",
            report.summary.unique_references,
            report.term_frequency.len(),
            stats_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 4: Write
    // ══════════════════════════════════════════════════════════════════════════
    if cli.check {
        // Serialize anyway so a report that cannot be encoded still fails
        let index_json = render_search_index(&index)?;
        let stats_json = render_statistics(&report)?;
        if cli.verbose {
            eprintln!(
                "✓ Check passed, nothing written ({}B index, {}B statistics)",
                index_json.len(),
                stats_json.len()
            );
        }
    } else {
        let paths = write_artifacts(&config.output, &index, &report)?;
        if cli.verbose {
            eprintln!("✓ Wrote {}", paths.search_index.display());
            eprintln!("✓ Wrote {}", paths.statistics.display());
        }
    }

    if cli.verbose {
        eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        eprintln!("Total time: {:.2?}", start.elapsed());
    }

    Ok(cli.summary.then(|| {
        SummaryRenderer::new(!cli.no_color).render(&catechism.title, &report)
    }))
}
