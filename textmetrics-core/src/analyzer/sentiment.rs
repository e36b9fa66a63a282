//! Lexicon-based sentiment scoring.
//!
//! Classifies tokens against positive and negative word sets and turns the
//! two counts into polarity and subjectivity ratios.

use textmetrics_types::SentimentScores;

use crate::lexicon::WordSet;

/// Added to every denominator so an all-neutral or empty input scores 0
/// instead of dividing by zero.
pub const EPSILON: f64 = 1e-6;

/// Scores `tokens` against the positive and negative lexicons.
///
/// Membership is tested on each token's lowercase form. A token present in
/// both sets increments both counts.
///
/// # Example
///
/// ```
/// use textmetrics_core::analyzer::sentiment::score;
/// use textmetrics_core::lexicon::WordSet;
///
/// let positive = WordSet::new(["good", "great"]);
/// let negative = WordSet::new(["bad"]);
/// let s = score(&["Good", "great", "bad", "plain"], &positive, &negative);
///
/// assert_eq!(s.positive_score, 2);
/// assert_eq!(s.negative_score, 1);
/// ```
pub fn score<S: AsRef<str>>(tokens: &[S], positive: &WordSet, negative: &WordSet) -> SentimentScores {
    let mut key = String::new();
    let mut positive_score = 0usize;
    let mut negative_score = 0usize;

    for token in tokens {
        let token = token.as_ref();
        if positive.contains_word(token, &mut key) {
            positive_score += 1;
        }
        if negative.contains_word(token, &mut key) {
            negative_score += 1;
        }
    }

    let pos = positive_score as f64;
    let neg = negative_score as f64;

    SentimentScores {
        positive_score,
        negative_score,
        polarity_score: (pos - neg) / (pos + neg + EPSILON),
        subjectivity_score: (pos + neg) / (tokens.len() as f64 + EPSILON),
    }
}
