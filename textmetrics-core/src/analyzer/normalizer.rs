//! Case folding for lexicon lookups.
//!
//! Every membership test in the engine compares the lowercase form of a word
//! against lowercase lexicon entries, while the word itself keeps its
//! original casing everywhere else. This module produces those lookup keys.

use std::str;

#[inline(always)]
const fn fold_ascii(b: u8) -> u8 {
    if b.is_ascii_uppercase() {
        b | 0x20
    } else {
        b
    }
}

/// Lowercases words into reusable buffers.
///
/// Pure-ASCII input takes a byte-wise path; anything else goes through
/// Unicode-aware `str::to_lowercase`.
///
/// # Examples
///
/// ```
/// use textmetrics_core::analyzer::normalizer::CaseFolder;
///
/// let folder = CaseFolder;
/// assert_eq!(folder.fold("HeLLo"), "hello");
/// assert_eq!(folder.fold("ÜBER"), "über");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseFolder;

impl CaseFolder {
    /// Lowercases `input` into `out`, clearing it first.
    ///
    /// Reuses the buffer's capacity, so a single buffer can serve every
    /// lookup in a document.
    #[inline]
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();

        if input.is_ascii() {
            out.reserve(input.len());
            out.extend(input.bytes().map(|b| fold_ascii(b) as char));
            return;
        }

        out.push_str(&input.to_lowercase());
    }

    /// Lowercases `input` into a new String.
    #[inline]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.fold_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(input: &str) -> String {
        CaseFolder.fold(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(fold("HELLO"), "hello");
        assert_eq!(fold("HeLlO"), "hello");
        assert_eq!(fold("123 ABC!"), "123 abc!");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(fold(&upper), lower);
    }

    #[test]
    fn punctuation_and_whitespace_untouched() {
        assert_eq!(fold("foo-bar_baz."), "foo-bar_baz.");
        assert_eq!(fold("a  b\tc"), "a  b\tc");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(fold("ПРИВЕТ"), "привет");
        assert_eq!(fold("ÜNITED"), "ünited");
        assert_eq!(fold("Café"), "café");
    }

    #[test]
    fn expanding_lowercase_stays_valid_utf8() {
        let result = fold("İstanbul");
        assert!(str::from_utf8(result.as_bytes()).is_ok());
        assert!(result.ends_with("stanbul"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(fold(""), "");
    }

    #[test]
    fn fold_into_reuses_capacity() {
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        CaseFolder.fold_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        CaseFolder.fold_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn fold_into_clears_previous_contents() {
        let mut buf = String::from("leftover text");
        CaseFolder.fold_into("Hi", &mut buf);
        assert_eq!(buf, "hi");
    }

    #[test]
    fn idempotent() {
        for s in ["hello world", "ÜBER Café", "MiXeD 42"] {
            let once = fold(s);
            assert_eq!(fold(&once), once);
        }
    }
}
