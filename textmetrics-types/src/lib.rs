//! Core types shared across the textmetrics workspace.
//!
//! The engine, the loaders and the exporters all speak in terms of the
//! values defined here. Keeping them in a separate crate means:
//!
//! - **No engine dependency for consumers**: an exporter only needs to know
//!   what a [`MetricRecord`] looks like, not how it was computed
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use thiserror::Error;

/// A plain-text document awaiting analysis.
///
/// Created by whatever supplies raw text (a fetcher, a directory walk, a
/// test) and consumed read-only by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Caller-chosen identifier, carried through to the [`MetricRecord`].
    pub id: String,
    /// Raw document text.
    pub raw_text: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// Output of the readability stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    /// Period-delimited segments containing any text (at least 1).
    pub num_sentences: usize,
    /// Whitespace-delimited words left after stop-word removal.
    pub num_words: usize,
    /// `num_words / num_sentences`.
    pub avg_sentence_length: f64,
    /// Fraction (0.0-1.0) of words with more than two syllables.
    pub percent_complex_words: f64,
    /// `0.4 * (avg_sentence_length + percent_complex_words)`.
    pub fog_index: f64,
    /// Number of words with more than two syllables.
    pub complex_word_count: usize,
    /// Mean syllables per word.
    pub avg_syllable_word_count: f64,
}

/// Output of the sentiment stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    /// Tokens found in the positive lexicon.
    pub positive_score: usize,
    /// Tokens found in the negative lexicon.
    pub negative_score: usize,
    /// Balance of positive over negative words, in `[-1, 1]`.
    pub polarity_score: f64,
    /// Share of tokens that carry sentiment, in `[0, 1]` when the positive
    /// and negative sets are disjoint.
    pub subjectivity_score: f64,
}

/// All metrics computed for a single document.
///
/// Every field is finite: documents for which a ratio would be undefined
/// never produce a record.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    /// Identifier of the source [`Document`].
    pub id: String,
    /// Tokens found in the positive lexicon.
    pub positive_score: usize,
    /// Tokens found in the negative lexicon.
    pub negative_score: usize,
    /// Balance of positive over negative words, in `[-1, 1]`.
    pub polarity_score: f64,
    /// Share of tokens that carry sentiment, in `[0, 1]` when the positive
    /// and negative sets are disjoint.
    pub subjectivity_score: f64,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Fraction of complex words.
    pub percent_complex_words: f64,
    /// Gunning fog index.
    pub fog_index: f64,
    /// Number of complex words.
    pub complex_word_count: usize,
    /// Number of tokens after stop-word removal.
    pub word_count: usize,
    /// Mean syllables per word.
    pub avg_syllable_word_count: f64,
    /// First-person pronoun occurrences.
    pub personal_pronoun_count: usize,
    /// Mean token length in characters.
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Assembles a record from the outputs of the individual stages.
    pub fn from_parts(
        id: impl Into<String>,
        sentiment: SentimentScores,
        readability: Readability,
        word_count: usize,
        avg_word_length: f64,
        personal_pronoun_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            positive_score: sentiment.positive_score,
            negative_score: sentiment.negative_score,
            polarity_score: sentiment.polarity_score,
            subjectivity_score: sentiment.subjectivity_score,
            avg_sentence_length: readability.avg_sentence_length,
            percent_complex_words: readability.percent_complex_words,
            fog_index: readability.fog_index,
            complex_word_count: readability.complex_word_count,
            word_count,
            avg_syllable_word_count: readability.avg_syllable_word_count,
            personal_pronoun_count,
            avg_word_length,
        }
    }
}

impl fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "doc={} words={} polarity={:.3} subjectivity={:.3} fog={:.3}",
            self.id, self.word_count, self.polarity_score, self.subjectivity_score, self.fog_index
        )
    }
}

/// Pipeline stage that rejected a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Whitespace-split words used for readability.
    Readability,
    /// Tokenizer output used for word count and word length.
    Tokens,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Readability => f.write_str("readability"),
            Stage::Tokens => f.write_str("tokens"),
        }
    }
}

/// Errors that can occur while analyzing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No countable words survive stop-word filtering.
    #[error("empty document: no words left after stop-word filtering ({stage})")]
    EmptyDocument {
        /// Stage that found nothing to count.
        stage: Stage,
    },
}

/// One of the three word sets that make up a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconSet {
    /// Words ignored by every metric.
    StopWords,
    /// Words counted towards the positive score.
    PositiveWords,
    /// Words counted towards the negative score.
    NegativeWords,
}

impl fmt::Display for LexiconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconSet::StopWords => f.write_str("stop words"),
            LexiconSet::PositiveWords => f.write_str("positive words"),
            LexiconSet::NegativeWords => f.write_str("negative words"),
        }
    }
}

/// Non-fatal problems found while building a lexicon.
///
/// An empty set is a valid configuration; the scores that depend on it
/// are simply always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexiconWarning {
    /// The set has no entries.
    #[error("malformed lexicon: {0} set is empty")]
    EmptySet(LexiconSet),
}

/// Batch processing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Spread documents across the rayon thread pool.
    pub parallel: bool,
    /// Batches smaller than this run sequentially even when `parallel` is set.
    pub min_parallel_batch: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::parallel()
    }
}

impl EngineConfig {
    /// Processes every batch on the calling thread.
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            min_parallel_batch: usize::MAX,
        }
    }

    /// Processes batches of 16 or more documents in parallel.
    pub const fn parallel() -> Self {
        Self {
            parallel: true,
            min_parallel_batch: 16,
        }
    }

    /// Returns true if a batch of `len` documents should be split across threads.
    #[inline]
    pub const fn runs_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.min_parallel_batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MetricRecord {
        MetricRecord::from_parts(
            "42",
            SentimentScores {
                positive_score: 2,
                negative_score: 1,
                polarity_score: 0.333,
                subjectivity_score: 0.5,
            },
            Readability {
                num_sentences: 2,
                num_words: 6,
                avg_sentence_length: 3.0,
                percent_complex_words: 0.5,
                fog_index: 1.4,
                complex_word_count: 3,
                avg_syllable_word_count: 2.5,
            },
            6,
            5.5,
            1,
        )
    }

    #[test]
    fn record_from_parts_copies_every_stage() {
        let r = sample_record();
        assert_eq!(r.id, "42");
        assert_eq!(r.positive_score, 2);
        assert_eq!(r.negative_score, 1);
        assert_eq!(r.avg_sentence_length, 3.0);
        assert_eq!(r.complex_word_count, 3);
        assert_eq!(r.word_count, 6);
        assert_eq!(r.personal_pronoun_count, 1);
        assert_eq!(r.avg_word_length, 5.5);
    }

    #[test]
    fn record_display() {
        let shown = format!("{}", sample_record());
        assert!(shown.starts_with("doc=42 words=6"));
        assert!(shown.contains("fog=1.400"));
    }

    #[test]
    fn empty_document_names_stage() {
        let err = AnalysisError::EmptyDocument {
            stage: Stage::Readability,
        };
        assert!(err.to_string().contains("readability"));
    }

    #[test]
    fn lexicon_warning_display() {
        let w = LexiconWarning::EmptySet(LexiconSet::PositiveWords);
        assert_eq!(w.to_string(), "malformed lexicon: positive words set is empty");
    }

    #[test]
    fn config_thresholds() {
        let seq = EngineConfig::sequential();
        assert!(!seq.runs_parallel(1_000_000));

        let par = EngineConfig::default();
        assert_eq!(par, EngineConfig::parallel());
        assert!(!par.runs_parallel(15));
        assert!(par.runs_parallel(16));
    }
}
