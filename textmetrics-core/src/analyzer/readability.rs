//! Readability metrics.
//!
//! Works on the raw document text rather than tokenizer output, because
//! sentence boundaries come from the periods the tokenizer throws away.
//!
//! Sentence detection is deliberately crude: every character that is not a
//! word character, whitespace or `.` is deleted, and the remaining text is cut
//! at each period. Question and exclamation marks therefore do not end
//! sentences, and words keep any period glued to them (`"sat."`).

use std::sync::LazyLock;

use memchr::memchr_iter;
use regex::Regex;
use textmetrics_types::{AnalysisError, Readability, Stage};

use crate::analyzer::syllable::{syllable_count, COMPLEX_WORD_SYLLABLES};
use crate::lexicon::WordSet;

static NON_SENTENCE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.]").expect("static pattern"));

/// Weight applied to the fog index sum.
pub const FOG_WEIGHT: f64 = 0.4;

/// Counts period-delimited segments that contain any non-whitespace text.
///
/// Never returns less than 1, so text without periods is one sentence.
///
/// Whitespace is judged by Unicode rules, matching the `\s` class kept by
/// the punctuation filter, so a segment holding only `U+00A0` is empty.
fn count_sentences(text: &str) -> usize {
    let mut start = 0usize;
    let mut count = 0usize;

    let mut close = |segment: &str| {
        if segment.chars().any(|c| !c.is_whitespace()) {
            count += 1;
        }
    };

    // `.` is ASCII, so every offset is a char boundary.
    for i in memchr_iter(b'.', text.as_bytes()) {
        close(&text[start..i]);
        start = i + 1;
    }
    close(&text[start..]);

    count.max(1)
}

/// Computes readability metrics for `text`.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyDocument` if no word survives stop-word
/// filtering.
///
/// # Example
///
/// ```
/// use textmetrics_core::analyzer::readability::analyze;
/// use textmetrics_core::lexicon::WordSet;
///
/// let stop_words = WordSet::new(["the", "it", "was"]);
/// let r = analyze("The cat sat. It was happy.", &stop_words).unwrap();
///
/// assert_eq!(r.num_sentences, 2);
/// assert_eq!(r.num_words, 3);
/// assert_eq!(r.avg_sentence_length, 1.5);
/// ```
pub fn analyze(text: &str, stop_words: &WordSet) -> Result<Readability, AnalysisError> {
    let stripped = NON_SENTENCE_CHARS.replace_all(text, "");
    let num_sentences = count_sentences(&stripped);

    let mut key = String::new();
    let mut num_words = 0usize;
    let mut complex_word_count = 0usize;
    let mut total_syllables = 0usize;

    for word in stripped.split_whitespace() {
        if stop_words.contains_word(word, &mut key) {
            continue;
        }
        let syllables = syllable_count(word);
        num_words += 1;
        total_syllables += syllables;
        if syllables > COMPLEX_WORD_SYLLABLES {
            complex_word_count += 1;
        }
    }

    if num_words == 0 {
        return Err(AnalysisError::EmptyDocument {
            stage: Stage::Readability,
        });
    }

    let words = num_words as f64;
    let avg_sentence_length = words / num_sentences as f64;
    let percent_complex_words = complex_word_count as f64 / words;

    Ok(Readability {
        num_sentences,
        num_words,
        avg_sentence_length,
        percent_complex_words,
        fog_index: FOG_WEIGHT * (avg_sentence_length + percent_complex_words),
        complex_word_count,
        avg_syllable_word_count: total_syllables as f64 / words,
    })
}
