//! Lexical, readability and sentiment metrics for plain-text documents.
//!
//! Given a [`Lexicon`] of stop words and positive/negative words, the engine
//! turns each [`Document`] into one [`MetricRecord`], or reports why it
//! could not.
//!
//! ```
//! use textmetrics_core::{process, Document, Lexicon, WordSet};
//!
//! let lexicon = Lexicon::new(
//!     WordSet::new(["the", "it", "was"]),
//!     WordSet::new(["happy"]),
//!     WordSet::new(["sad"]),
//! );
//!
//! let record = process(&Document::new("1", "The cat sat. It was happy."), &lexicon).unwrap();
//! assert_eq!(record.word_count, 3);
//! assert_eq!(record.positive_score, 1);
//! ```
//!
//! Loading lexicons from disk and exporting records are left to the caller.

pub mod analyzer;
pub mod lexicon;
pub mod pipeline;

pub use lexicon::{Lexicon, WordSet};
pub use pipeline::{
    process, process_all, process_all_with, BatchReport, BatchStats, FailedDocument,
    MetricsEngine,
};
pub use textmetrics_types::{
    AnalysisError, Document, EngineConfig, LexiconSet, LexiconWarning, MetricRecord, Readability,
    SentimentScores, Stage,
};
