//! Document metrics aggregation.
//!
//! Runs the analyzer stages over each document and merges their outputs into
//! one [`MetricRecord`](textmetrics_types::MetricRecord). A document either
//! yields a complete record or none at all.
//!
//! Threading:
//! - Documents share nothing but the read-only [`Lexicon`](crate::lexicon::Lexicon),
//!   so batches are split across the rayon pool without any locking.

mod batch;
mod document;
mod engine;
mod stats;

pub use batch::{process_all, process_all_with, BatchReport, FailedDocument};
pub use document::process;
pub use engine::MetricsEngine;
pub use stats::BatchStats;
