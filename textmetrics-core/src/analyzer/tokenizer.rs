//! Word Tokenizer Module
//!
//! Splits raw document text into word tokens and drops stop words. The
//! surviving tokens feed the sentiment scorer and the word-length metrics.
//!
//! ## What It Does
//!
//! A token is a maximal run of alphanumeric characters. Everything else
//! (punctuation, whitespace, symbols) separates tokens and never becomes one.
//! Given `"The cat sat. It was happy."` and the stop words `{the, it, was}`:
//!
//! ```ignore
//! ("cat", 1)
//! ("sat", 2)
//! ("happy", 5)
//! ```
//!
//! The number is the token's position among *all* words of the text,
//! stop words included.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: tokens are slices of the input, not copies
//! - **Case Preserving**: the stop-word test lowercases a scratch copy only;
//!   emitted tokens keep their original casing
//! - **Streaming**: [`Tokenizer::tokenize`] emits through a callback;
//!   [`tokenize`] collects into a [`TokenSequence`] when one is needed
//!
//! ## Usage
//!
//! ```rust
//! use textmetrics_core::analyzer::tokenizer::tokenize;
//! use textmetrics_core::lexicon::WordSet;
//!
//! let stop_words = WordSet::new(["the", "it", "was"]);
//! let tokens = tokenize("The cat sat. It was happy.", &stop_words);
//!
//! assert_eq!(tokens.as_slice(), &["cat", "sat", "happy"]);
//! ```

use textmetrics_types::{AnalysisError, Stage};

use crate::lexicon::WordSet;

/// Splits `text` into maximal alphanumeric runs, emitting `(word, position)`.
///
/// No filtering happens here; see [`Tokenizer`] for stop-word removal.
#[inline]
pub fn split_words<'t, F>(text: &'t str, mut emit: F)
where
    F: FnMut(&'t str, usize),
{
    let mut start: Option<usize> = None;
    let mut pos = 0usize;

    for (i, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            emit(&text[s..i], pos);
            pos += 1;
        }
    }

    if let Some(s) = start {
        emit(&text[s..], pos);
    }
}

/// Stop-word filtering tokenizer.
///
/// Borrows the stop-word set for its lifetime; cheap to copy and reusable
/// across any number of documents.
///
/// ## Example
///
/// ```
/// use textmetrics_core::analyzer::tokenizer::Tokenizer;
/// use textmetrics_core::lexicon::WordSet;
///
/// let stop_words = WordSet::new(["a"]);
/// let tokenizer = Tokenizer::new(&stop_words);
/// let mut count = 0;
///
/// tokenizer.tokenize("A quick test", |_text, _pos| count += 1);
///
/// assert_eq!(count, 2);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Tokenizer<'s> {
    stop_words: &'s WordSet,
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer that drops every word in `stop_words`.
    #[inline]
    pub const fn new(stop_words: &'s WordSet) -> Self {
        Self { stop_words }
    }

    /// Tokenizes `text` and emits `(token, position)` for each non-stop word.
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, usize),
    {
        let mut key = String::new();
        split_words(text, |word, pos| {
            if !self.stop_words.contains_word(word, &mut key) {
                emit(word, pos);
            }
        });
    }

    /// Tokenizes `text` into an owned-by-caller sequence of slices.
    pub fn collect<'t>(&self, text: &'t str) -> TokenSequence<'t> {
        let mut tokens = Vec::new();
        self.tokenize(text, |word, _| tokens.push(word));
        TokenSequence { tokens }
    }
}

/// Tokenizes `text`, dropping stop words, and returns the survivors in order.
///
/// Empty input yields an empty sequence.
pub fn tokenize<'t>(text: &'t str, stop_words: &WordSet) -> TokenSequence<'t> {
    Tokenizer::new(stop_words).collect(text)
}

/// Ordered tokens left after stop-word removal.
///
/// Borrows from the document text it was produced from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'t> {
    tokens: Vec<&'t str>,
}

impl<'t> TokenSequence<'t> {
    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens as a slice, in document order.
    #[inline]
    pub fn as_slice(&self) -> &[&'t str] {
        &self.tokens
    }

    /// Iterates tokens in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.tokens.iter().copied()
    }

    /// Sum of token lengths in characters.
    pub fn total_chars(&self) -> usize {
        self.tokens.iter().map(|t| t.chars().count()).sum()
    }

    /// Mean token length in characters.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyDocument` if the sequence is empty.
    pub fn avg_word_length(&self) -> Result<f64, AnalysisError> {
        if self.tokens.is_empty() {
            return Err(AnalysisError::EmptyDocument {
                stage: Stage::Tokens,
            });
        }
        Ok(self.total_chars() as f64 / self.tokens.len() as f64)
    }
}

impl<'t> IntoIterator for TokenSequence<'t> {
    type Item = &'t str;
    type IntoIter = std::vec::IntoIter<&'t str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
