//! First-person pronoun counting.

use std::sync::LazyLock;

use regex::Regex;

/// Pronouns counted, matched with exactly this spelling.
///
/// Matching is case-sensitive so the country abbreviation `US` is not
/// mistaken for `us`.
pub const PERSONAL_PRONOUNS: [&str; 5] = ["I", "we", "my", "ours", "us"];

static PRONOUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", PERSONAL_PRONOUNS.join("|"))).expect("static pattern")
});

/// Counts whole-word occurrences of [`PERSONAL_PRONOUNS`] in raw text.
///
/// # Example
///
/// ```
/// use textmetrics_core::analyzer::pronoun::count_personal_pronouns;
///
/// let text = "I think we should go; business is different from us.";
/// assert_eq!(count_personal_pronouns(text), 3);
/// ```
pub fn count_personal_pronouns(text: &str) -> usize {
    PRONOUN_PATTERN.find_iter(text).count()
}
