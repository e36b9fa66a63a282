//! Stop-word and sentiment word sets.
//!
//! A [`Lexicon`] is built once, before any document is processed, and then
//! shared read-only by every worker. Entries are lowercased on the way in so
//! lookups only need to lowercase the word being tested.

use rustc_hash::FxHashSet;
use textmetrics_types::{LexiconSet, LexiconWarning};
use tracing::warn;

use crate::analyzer::normalizer::CaseFolder;

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<Box<str>>,
}

impl WordSet {
    /// Builds a set from arbitrary-case entries.
    ///
    /// Entries are lowercased; empty entries are ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(entries);
        set
    }

    /// Adds more entries, lowercasing each.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folder = CaseFolder;
        for entry in entries {
            let entry = entry.as_ref();
            if entry.is_empty() {
                continue;
            }
            self.words.insert(folder.fold(entry).into_boxed_str());
        }
    }

    /// Tests an already-lowercased key.
    #[inline]
    pub fn contains(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    /// Tests `word` case-insensitively, using `key` as scratch space.
    #[inline]
    pub fn contains_word(&self, word: &str, key: &mut String) -> bool {
        if self.words.is_empty() {
            return false;
        }
        CaseFolder.fold_into(word, key);
        self.words.contains(key.as_str())
    }

    /// Number of distinct entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The three word sets every metric is computed against.
///
/// A word may appear in both the positive and the negative set; it then
/// counts towards both scores.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: WordSet,
    positive_words: WordSet,
    negative_words: WordSet,
    warnings: Vec<LexiconWarning>,
}

impl Lexicon {
    /// Freezes the three sets into a lexicon.
    ///
    /// Empty sets are accepted. Each one is logged and recorded in
    /// [`Lexicon::warnings`].
    pub fn new(stop_words: WordSet, positive_words: WordSet, negative_words: WordSet) -> Self {
        let warnings: Vec<LexiconWarning> = [
            (LexiconSet::StopWords, &stop_words),
            (LexiconSet::PositiveWords, &positive_words),
            (LexiconSet::NegativeWords, &negative_words),
        ]
        .into_iter()
        .filter(|(_, set)| set.is_empty())
        .map(|(which, _)| LexiconWarning::EmptySet(which))
        .collect();

        for warning in &warnings {
            warn!(%warning, "lexicon set is empty; dependent scores will be zero");
        }

        Self {
            stop_words,
            positive_words,
            negative_words,
            warnings,
        }
    }

    /// Words ignored by every metric.
    #[inline]
    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }

    /// Words counted towards the positive score.
    #[inline]
    pub fn positive_words(&self) -> &WordSet {
        &self.positive_words
    }

    /// Words counted towards the negative score.
    #[inline]
    pub fn negative_words(&self) -> &WordSet {
        &self.negative_words
    }

    /// Non-fatal problems found at construction.
    pub fn warnings(&self) -> &[LexiconWarning] {
        &self.warnings
    }
}
