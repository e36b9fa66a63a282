//! Directory in, CSV out.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use textmetrics_cli::corpus::POSITIVE_WORDS_FILE;
use textmetrics_cli::{load_documents, load_lexicon, write_csv, write_failures};
use textmetrics_core::process_all;

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

#[test]
fn scores_directory_and_writes_rows() {
    let root = TempDir::new().unwrap();
    let stop = root.path().join("StopWords");
    let dict = root.path().join("MasterDictionary");
    let docs = root.path().join("TitleText");
    for d in [&stop, &dict, &docs] {
        fs::create_dir(d).unwrap();
    }

    write(&stop, "StopWords_Generic.txt", b"THE\nIT\nWAS\nAND\n");
    write(&dict, POSITIVE_WORDS_FILE, b"happy\ngood\n");
    write(&dict, "negative-words.txt", b"sad\n");

    write(&docs, "37.txt", b"The cat sat. It was happy.");
    write(&docs, "38.txt", b"the and it was");
    write(&docs, "39.txt", b"I was sad, but we are good now.");

    let lexicon = load_lexicon(&stop, &dict).unwrap();
    let documents = load_documents(&docs).unwrap();
    assert_eq!(documents.len(), 3);

    let report = process_all(&documents, &lexicon);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.failed_ids().collect::<Vec<_>>(), vec!["38"]);

    let mut csv = Vec::new();
    write_csv(&mut csv, &report.records).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("37,1,0,"));
    assert!(rows[2].starts_with("39,1,1,"));

    let mut skipped = Vec::new();
    write_failures(&mut skipped, &report.failed).unwrap();
    let skipped = String::from_utf8(skipped).unwrap();
    assert_eq!(skipped.lines().count(), 2);
    assert!(skipped.contains("38,"));
}
