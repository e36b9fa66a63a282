//! textmetrics CLI
//!
//! Scores a directory of plain-text documents against stop-word and
//! sentiment word lists and writes one CSV row per document.
//!
//! ```bash
//! textmetrics --docs TitleText --stop-words StopWords \
//!     --master-dictionary MasterDictionary --output Output.csv \
//!     --failures skipped.csv
//! ```
//!
//! Logging goes to stderr; `RUST_LOG` overrides the level chosen by
//! `--verbose`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use textmetrics_cli::{load_documents, load_lexicon, write_csv, write_failures};
use textmetrics_core::{EngineConfig, MetricsEngine};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textmetrics")]
#[command(version)]
#[command(about = "Readability and sentiment metrics for plain-text documents", long_about = None)]
struct Cli {
    /// Directory of <id>.txt documents
    #[arg(short, long)]
    docs: PathBuf,

    /// Directory of stop-word lists
    #[arg(short, long)]
    stop_words: PathBuf,

    /// Directory holding positive-words.txt and the negative word lists
    #[arg(short, long)]
    master_dictionary: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "Output.csv")]
    output: PathBuf,

    /// Also write the ids of skipped documents to this CSV file
    #[arg(short, long)]
    failures: Option<PathBuf>,

    /// Score documents on a single thread
    #[arg(long)]
    sequential: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = load_lexicon(&cli.stop_words, &cli.master_dictionary)
        .context("failed to load lexicon")?;
    info!(
        stop_words = lexicon.stop_words().len(),
        positive = lexicon.positive_words().len(),
        negative = lexicon.negative_words().len(),
        "lexicon loaded"
    );

    let documents = load_documents(&cli.docs)
        .with_context(|| format!("failed to load documents from {}", cli.docs.display()))?;
    info!(count = documents.len(), "documents loaded");

    let config = if cli.sequential {
        EngineConfig::sequential()
    } else {
        EngineConfig::default()
    };
    let engine = MetricsEngine::with_config(lexicon, config);
    let report = engine.process_all(&documents);

    for record in &report.records {
        debug!(%record, "scored");
    }
    for failed in &report.failed {
        warn!(id = %failed.id, error = %failed.error, "document skipped");
    }
    info!(stats = %report.stats(), "batch finished");

    write_to(&cli.output, |out| write_csv(out, &report.records).map_err(Into::into))?;
    info!(path = %cli.output.display(), rows = report.records.len(), "metrics written");

    if let Some(path) = &cli.failures {
        write_to(path, |out| write_failures(out, &report.failed).map_err(Into::into))?;
        info!(path = %path.display(), rows = report.failed.len(), "skipped documents written");
    }

    Ok(())
}

fn write_to<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write(BufWriter::new(file)).with_context(|| format!("failed to write {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
