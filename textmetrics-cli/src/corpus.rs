//! Directory-based lexicon and document loading.
//!
//! Layout expected on disk:
//!
//! ```text
//! StopWords/            any number of word lists, one entry per line
//! MasterDictionary/     positive-words.txt, plus negative word lists
//! TitleText/            one <id>.txt per document
//! ```
//!
//! Word lists are decoded as ISO-8859-1, documents as UTF-8.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use textmetrics_core::{Document, Lexicon, WordSet};
use thiserror::Error;
use tracing::{debug, warn};

/// The master-dictionary file whose words are positive; every other file in
/// that directory holds negative words.
pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";

/// Extension of document files.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Errors raised while reading corpora from disk.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type alias for corpus loading.
pub type Result<T> = std::result::Result<T, CorpusError>;

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> CorpusError + '_ {
    move |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Regular files directly inside `dir`, sorted by name.
fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads one word list: ISO-8859-1, one entry per line, blank lines skipped.
pub fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(io_err(path))?;
    let text = decode_latin1(&bytes);

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Merges every word list in `dir` into one set.
pub fn load_word_dir(dir: &Path) -> Result<WordSet> {
    let mut words = WordSet::default();
    for path in sorted_files(dir)? {
        let entries = read_word_file(&path)?;
        debug!(path = %path.display(), entries = entries.len(), "word list loaded");
        words.extend(entries);
    }
    Ok(words)
}

/// Positive and negative word sets read from a master-dictionary directory.
#[derive(Debug, Default)]
pub struct SentimentWords {
    /// Contents of [`POSITIVE_WORDS_FILE`].
    pub positive: WordSet,
    /// Contents of every other file.
    pub negative: WordSet,
}

/// Splits a master-dictionary directory into positive and negative sets.
pub fn load_sentiment_dir(dir: &Path) -> Result<SentimentWords> {
    let mut words = SentimentWords::default();

    for path in sorted_files(dir)? {
        let entries = read_word_file(&path)?;
        let is_positive = path
            .file_name()
            .is_some_and(|name| name == POSITIVE_WORDS_FILE);

        debug!(path = %path.display(), entries = entries.len(), is_positive, "sentiment list loaded");

        if is_positive {
            words.positive.extend(entries);
        } else {
            words.negative.extend(entries);
        }
    }

    Ok(words)
}

/// Builds the full lexicon from a stop-word directory and a master dictionary.
pub fn load_lexicon(stop_words_dir: &Path, sentiment_dir: &Path) -> Result<Lexicon> {
    let stop_words = load_word_dir(stop_words_dir)?;
    let SentimentWords { positive, negative } = load_sentiment_dir(sentiment_dir)?;
    Ok(Lexicon::new(stop_words, positive, negative))
}

/// Reads every `*.txt` file in `dir` as a document, sorted by file name.
///
/// The file stem becomes the document id. Invalid UTF-8 sequences are
/// replaced rather than rejected.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for path in sorted_files(dir)? {
        if path.extension().is_none_or(|ext| ext != DOCUMENT_EXTENSION) {
            continue;
        }
        let Some(id) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };

        let bytes = fs::read(&path).map_err(io_err(&path))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), "document is not valid UTF-8; replacing bad bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        documents.push(Document::new(id, text));
    }

    Ok(documents)
}
