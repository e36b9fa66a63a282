//! Batch processing.

use rayon::prelude::*;
use textmetrics_types::{AnalysisError, Document, EngineConfig, MetricRecord};
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::pipeline::document::process;
use crate::pipeline::stats::BatchStats;

/// A document that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    /// Identifier of the rejected document.
    pub id: String,
    /// Why it was rejected.
    pub error: AnalysisError,
}

/// Result of scoring a batch.
///
/// `records` holds one entry per successful document, in input order;
/// documents that failed are left out of it entirely and listed in
/// `failed` instead, also in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Records of the documents that were scored.
    pub records: Vec<MetricRecord>,
    /// Documents that were skipped.
    pub failed: Vec<FailedDocument>,
}

impl BatchReport {
    /// Ids of the skipped documents.
    pub fn failed_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.failed.iter().map(|f| f.id.as_str())
    }

    /// Counts for logging.
    pub fn stats(&self) -> BatchStats {
        BatchStats::from_report(self)
    }

    fn push(&mut self, document: &Document, outcome: Result<MetricRecord, AnalysisError>) {
        match outcome {
            Ok(record) => self.records.push(record),
            Err(error) => {
                debug!(id = %document.id, %error, "document skipped");
                self.failed.push(FailedDocument {
                    id: document.id.clone(),
                    error,
                });
            }
        }
    }
}

/// Scores every document with the default [`EngineConfig`].
///
/// Never fails as a whole: documents that cannot be scored end up in
/// [`BatchReport::failed`].
pub fn process_all(documents: &[Document], lexicon: &Lexicon) -> BatchReport {
    process_all_with(documents, lexicon, EngineConfig::default())
}

/// Scores every document, in parallel when `config` allows it.
///
/// Output order matches input order either way.
pub fn process_all_with(
    documents: &[Document],
    lexicon: &Lexicon,
    config: EngineConfig,
) -> BatchReport {
    let outcomes: Vec<Result<MetricRecord, AnalysisError>> =
        if config.runs_parallel(documents.len()) {
            documents.par_iter().map(|doc| process(doc, lexicon)).collect()
        } else {
            documents.iter().map(|doc| process(doc, lexicon)).collect()
        };

    let mut report = BatchReport {
        records: Vec::with_capacity(outcomes.len()),
        failed: Vec::new(),
    };

    for (document, outcome) in documents.iter().zip(outcomes) {
        report.push(document, outcome);
    }

    report
}
