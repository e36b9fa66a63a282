//! Collaborators around the textmetrics engine: corpus loading from
//! directories and CSV export of the resulting records.

pub mod corpus;
pub mod export;

pub use corpus::{load_documents, load_lexicon, CorpusError};
pub use export::{write_csv, write_failures, ExportError};
