//! End-to-end properties of the metrics pipeline.

use textmetrics_core::analyzer::{count_personal_pronouns, syllable_count, tokenize};
use textmetrics_core::{
    process, process_all, AnalysisError, Document, Lexicon, MetricRecord, WordSet,
};

fn lexicon() -> Lexicon {
    Lexicon::new(
        WordSet::new([
            "the", "a", "an", "and", "or", "it", "was", "is", "of", "to", "in", "on", "for",
        ]),
        WordSet::new(["good", "great", "excellent", "happy", "growth", "profit"]),
        WordSet::new(["bad", "loss", "decline", "sad", "poor", "risk"]),
    )
}

const CORPUS: &[(&str, &str)] = &[
    ("37", "The company reported excellent growth. Profit was up and risk was low."),
    ("38", "Losses mounted. The decline was bad, the outlook poor, and morale sad."),
    ("39", "A neutral sentence about tables and chairs."),
    ("40", "the and it was of to in"),
    ("41", "!!! ??? ,,, ;;;"),
    ("42", "We believe our strategy is sound. I expect growth; my team agrees with us."),
    ("43", ""),
    ("44", "Good good good. Bad."),
];

fn documents() -> Vec<Document> {
    CORPUS.iter().map(|(id, text)| Document::new(*id, *text)).collect()
}

fn all_ratios(r: &MetricRecord) -> [f64; 7] {
    [
        r.polarity_score,
        r.subjectivity_score,
        r.avg_sentence_length,
        r.percent_complex_words,
        r.fog_index,
        r.avg_syllable_word_count,
        r.avg_word_length,
    ]
}

#[test]
fn reference_document() {
    let stop = WordSet::new(["the", "it", "was"]);
    let text = "The cat sat. It was happy.";

    assert_eq!(tokenize(text, &stop).as_slice(), &["cat", "sat", "happy"]);

    let lex = Lexicon::new(stop, WordSet::default(), WordSet::default());
    let record = process(&Document::new("ref", text), &lex).unwrap();
    assert_eq!(record.word_count, 3);
    assert_eq!(record.avg_sentence_length, 1.5);
    assert!((record.fog_index - 0.6).abs() < 1e-12);
    assert_eq!(record.avg_syllable_word_count, 1.0);
}

#[test]
fn reference_syllables_and_pronouns() {
    assert_eq!(syllable_count("code"), 2);
    assert_eq!(syllable_count("tested"), 1);
    assert_eq!(syllable_count("rhythm"), 0);
    assert_eq!(
        count_personal_pronouns("I think we should go; business is different from us."),
        3
    );
}

#[test]
fn scores_bounded_by_word_count() {
    let report = process_all(&documents(), &lexicon());
    assert!(!report.records.is_empty());

    for r in &report.records {
        assert!(r.positive_score <= r.word_count, "{r}");
        assert!(r.negative_score <= r.word_count, "{r}");
    }
}

#[test]
fn polarity_and_subjectivity_ranges() {
    let report = process_all(&documents(), &lexicon());

    for r in &report.records {
        assert!((-1.0..=1.0).contains(&r.polarity_score), "{r}");
        assert!((0.0..=1.0).contains(&r.subjectivity_score), "{r}");
    }
}

#[test]
fn no_record_has_nan_or_infinite_fields() {
    let report = process_all(&documents(), &lexicon());

    for r in &report.records {
        for v in all_ratios(r) {
            assert!(v.is_finite(), "{r}");
        }
    }
}

#[test]
fn stop_words_and_punctuation_only_are_empty_documents() {
    let lex = lexicon();
    for text in ["the and it was of to in", "!!! ??? ,,, ;;;", ""] {
        let result = process(&Document::new("e", text), &lex);
        assert!(
            matches!(result, Err(AnalysisError::EmptyDocument { .. })),
            "{text:?} -> {result:?}"
        );
    }
}

#[test]
fn failed_documents_are_omitted_and_listed() {
    let docs = documents();
    let report = process_all(&docs, &lexicon());

    let kept: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
    let failed: Vec<&str> = report.failed_ids().collect();

    assert_eq!(kept, vec!["37", "38", "39", "42", "44"]);
    assert_eq!(failed, vec!["40", "41", "43"]);
    assert_eq!(kept.len() + failed.len(), docs.len());
}

#[test]
fn sentiment_direction() {
    let report = process_all(&documents(), &lexicon());
    let by_id = |id: &str| report.records.iter().find(|r| r.id == id).unwrap().clone();

    assert!(by_id("37").polarity_score > 0.0);
    assert!(by_id("38").polarity_score < 0.0);
    assert_eq!(by_id("39").polarity_score, 0.0);
    assert_eq!(by_id("39").subjectivity_score, 0.0);

    let mixed = by_id("44");
    assert_eq!(mixed.positive_score, 3);
    assert_eq!(mixed.negative_score, 1);
    assert!((mixed.polarity_score - 2.0 / (4.0 + 1e-6)).abs() < 1e-12);
}

#[test]
fn pronouns_in_batch() {
    let report = process_all(&documents(), &lexicon());
    let r = report.records.iter().find(|r| r.id == "42").unwrap();
    // I, my, us; "We" and "our" are not counted
    assert_eq!(r.personal_pronoun_count, 3);
}

#[test]
fn processing_is_idempotent() {
    let lex = lexicon();
    for doc in documents() {
        assert_eq!(process(&doc, &lex), process(&doc, &lex));
    }
    assert_eq!(process_all(&documents(), &lex), process_all(&documents(), &lex));
}
