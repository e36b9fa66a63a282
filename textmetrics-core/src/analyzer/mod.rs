//! Text analysis stages.
//!
//! Each stage reads a document's raw text (or the tokenizer's output) and
//! produces one group of metrics:
//! - **Normalizer**: Lowercases words for lexicon lookups
//! - **Tokenizer**: Splits text into words and drops stop words
//! - **Syllable**: Approximate syllable counts
//! - **Readability**: Sentence length, complex words, fog index
//! - **Pronoun**: First-person pronoun counts
//! - **Sentiment**: Positive/negative counts, polarity, subjectivity

pub mod normalizer;
pub mod pronoun;
pub mod readability;
pub mod sentiment;
pub mod syllable;
pub mod tokenizer;

pub use normalizer::CaseFolder;
pub use pronoun::count_personal_pronouns;
pub use readability::analyze;
pub use sentiment::score;
pub use syllable::syllable_count;
pub use tokenizer::{tokenize, TokenSequence, Tokenizer};
