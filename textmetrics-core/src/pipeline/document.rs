//! Per-document aggregation.

use textmetrics_types::{AnalysisError, Document, MetricRecord};

use crate::analyzer::pronoun::count_personal_pronouns;
use crate::analyzer::readability::analyze;
use crate::analyzer::sentiment::score;
use crate::analyzer::tokenizer::tokenize;
use crate::lexicon::Lexicon;

/// Computes every metric for one document.
///
/// Tokenizer, readability analyzer and pronoun counter each read the raw
/// text; the sentiment scorer reads the tokenizer's output.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyDocument` if either the readability words
/// or the tokens are empty after stop-word removal. No partial record is
/// produced.
pub fn process(document: &Document, lexicon: &Lexicon) -> Result<MetricRecord, AnalysisError> {
    let text = document.raw_text.as_str();

    let tokens = tokenize(text, lexicon.stop_words());
    let readability = analyze(text, lexicon.stop_words())?;
    let avg_word_length = tokens.avg_word_length()?;
    let personal_pronoun_count = count_personal_pronouns(text);
    let sentiment = score(
        tokens.as_slice(),
        lexicon.positive_words(),
        lexicon.negative_words(),
    );

    Ok(MetricRecord::from_parts(
        document.id.as_str(),
        sentiment,
        readability,
        tokens.len(),
        avg_word_length,
        personal_pronoun_count,
    ))
}
