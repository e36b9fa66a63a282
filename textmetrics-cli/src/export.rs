//! CSV export of metric records.

use std::io;

use serde::Serialize;
use textmetrics_core::{FailedDocument, MetricRecord};
use thiserror::Error;

/// Column headers, in output order.
///
/// `AVG NUMBER OF WORDS PER SENTENCE` repeats `AVG SENTENCE LENGTH`; both
/// columns are part of the established output layout.
pub const METRIC_HEADERS: [&str; 14] = [
    "URL_ID",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Column headers of the skipped-documents file.
pub const FAILURE_HEADERS: [&str; 2] = ["URL_ID", "ERROR"];

/// Errors raised while writing CSV output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV encoding or the underlying writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Serialize)]
struct MetricRow<'a> {
    id: &'a str,
    positive_score: usize,
    negative_score: usize,
    polarity_score: f64,
    subjectivity_score: f64,
    avg_sentence_length: f64,
    percent_complex_words: f64,
    fog_index: f64,
    avg_words_per_sentence: f64,
    complex_word_count: usize,
    word_count: usize,
    avg_syllable_word_count: f64,
    personal_pronoun_count: usize,
    avg_word_length: f64,
}

impl<'a> From<&'a MetricRecord> for MetricRow<'a> {
    fn from(r: &'a MetricRecord) -> Self {
        Self {
            id: &r.id,
            positive_score: r.positive_score,
            negative_score: r.negative_score,
            polarity_score: r.polarity_score,
            subjectivity_score: r.subjectivity_score,
            avg_sentence_length: r.avg_sentence_length,
            percent_complex_words: r.percent_complex_words,
            fog_index: r.fog_index,
            avg_words_per_sentence: r.avg_sentence_length,
            complex_word_count: r.complex_word_count,
            word_count: r.word_count,
            avg_syllable_word_count: r.avg_syllable_word_count,
            personal_pronoun_count: r.personal_pronoun_count,
            avg_word_length: r.avg_word_length,
        }
    }
}

#[derive(Serialize)]
struct FailureRow<'a> {
    id: &'a str,
    error: String,
}

fn writer<W: io::Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

/// Writes one row per record under [`METRIC_HEADERS`].
///
/// The header row is written even when `records` is empty.
pub fn write_csv<W: io::Write>(out: W, records: &[MetricRecord]) -> Result<(), ExportError> {
    let mut wtr = writer(out);
    wtr.write_record(METRIC_HEADERS)?;
    for record in records {
        wtr.serialize(MetricRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the id and reason of every skipped document.
pub fn write_failures<W: io::Write>(out: W, failed: &[FailedDocument]) -> Result<(), ExportError> {
    let mut wtr = writer(out);
    wtr.write_record(FAILURE_HEADERS)?;
    for f in failed {
        wtr.serialize(FailureRow {
            id: &f.id,
            error: f.error.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
