//! Approximate syllable counting.
//!
//! Counts vowel letters rather than doing phonetic analysis: `"ou"` is two
//! syllables and `"rhythm"` is none. Readability numbers depend on these
//! exact counts, so the heuristic stays as it is.

/// Words with more syllables than this are complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 2;

/// Returns the approximate number of syllables in `word`.
///
/// A trailing `"es"` or `"ed"` is removed first, then every `a`, `e`, `i`,
/// `o` or `u` (either case) counts once.
///
/// # Example
///
/// ```
/// use textmetrics_core::analyzer::syllable::syllable_count;
///
/// assert_eq!(syllable_count("code"), 2);
/// assert_eq!(syllable_count("tested"), 1);
/// assert_eq!(syllable_count("rhythm"), 0);
/// ```
#[inline]
pub fn syllable_count(word: &str) -> usize {
    let stem = word
        .strip_suffix("es")
        .or_else(|| word.strip_suffix("ed"))
        .unwrap_or(word);

    // Multi-byte UTF-8 sequences only contain bytes >= 0x80, so a byte scan
    // never mistakes part of a non-ASCII character for a vowel.
    stem.bytes()
        .filter(|b| matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u'))
        .count()
}

/// Returns true if `word` has more than two syllables.
#[inline]
pub fn is_complex(word: &str) -> bool {
    syllable_count(word) > COMPLEX_WORD_SYLLABLES
}
