//! Lexicon-owning engine.

use textmetrics_types::{AnalysisError, Document, EngineConfig, MetricRecord};

use crate::lexicon::Lexicon;
use crate::pipeline::batch::{process_all_with, BatchReport};
use crate::pipeline::document::process;

/// Owns a frozen lexicon together with batch options.
///
/// `MetricsEngine` is `Send + Sync`; share one behind an `Arc` (or a plain
/// reference) across as many threads as needed.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    lexicon: Lexicon,
    config: EngineConfig,
}

impl MetricsEngine {
    /// Creates an engine with the default configuration.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, EngineConfig::default())
    }

    /// Creates an engine with a custom configuration.
    pub fn with_config(lexicon: Lexicon, config: EngineConfig) -> Self {
        Self { lexicon, config }
    }

    /// Scores one document.
    #[inline]
    pub fn process(&self, document: &Document) -> Result<MetricRecord, AnalysisError> {
        process(document, &self.lexicon)
    }

    /// Scores a batch; see [`process_all_with`].
    pub fn process_all(&self, documents: &[Document]) -> BatchReport {
        process_all_with(documents, &self.lexicon, self.config)
    }

    /// The lexicon every document is scored against.
    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Batch options.
    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }
}
