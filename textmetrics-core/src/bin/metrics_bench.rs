//! Metrics Throughput Benchmark
//!
//! Measures how fast the engine scores large plain-text inputs, such as a
//! concatenated dump of scraped articles. Each stage is timed on its own and
//! then as part of the full per-document pipeline.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: word splitting plus stop-word filtering
//! 2. **Readability**: punctuation stripping, sentence and syllable counting
//! 3. **Pipeline**: `process` on the whole file as one document
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark with no stop words
//! ./target/release/metrics_bench /path/to/articles.txt
//!
//! # Benchmark with a stop-word list (one word per line)
//! ./target/release/metrics_bench /path/to/articles.txt /path/to/stopwords.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Pipeline ===
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 0.452 s
//! Throughput  : 223.4 MiB/s
//! Words       : 15_489_234
//! Words/sec   : 34_265_478
//! --------------------------------
//! ```
//!
//! Build in release mode and use an input of 100MB or more for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use textmetrics_core::analyzer::readability::analyze;
use textmetrics_core::analyzer::tokenizer::Tokenizer;
use textmetrics_core::{process, Document, Lexicon, WordSet};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: metrics_bench <path> [stopwords]");
        std::process::exit(1);
    }

    println!("Loading file...");
    let bytes = fs::read(&args[1])?;
    let input =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let stop_words = match args.get(2) {
        Some(path) => WordSet::new(fs::read_to_string(path)?.lines().map(str::trim)),
        None => WordSet::default(),
    };

    println!("File size:  {}", fmt_bytes(input.len() as u64));
    println!("Stop words: {}\n", stop_words.len());

    bench_tokenize(&input, &stop_words);
    bench_readability(&input, &stop_words);

    let lexicon = Lexicon::new(stop_words, WordSet::default(), WordSet::default());
    bench_pipeline(input, &lexicon);

    Ok(())
}

fn bench_tokenize(input: &str, stop_words: &WordSet) {
    let tokenizer = Tokenizer::new(stop_words);

    println!("=== Tokenize ===");

    let (elapsed, tokens) = time_runs(|| {
        let mut count = 0u64;
        tokenizer.tokenize(input, |_t, _p| count += 1);
        count
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_readability(input: &str, stop_words: &WordSet) {
    println!("=== Readability ===");

    let (elapsed, words) = time_runs(|| {
        analyze(input, stop_words).map_or(0, |r| r.num_words as u64)
    });

    print_perf("Readability", input.len(), elapsed, words);
}

fn bench_pipeline(input: String, lexicon: &Lexicon) {
    let len = input.len();
    let document = Document::new("bench", input);

    println!("=== Pipeline ===");

    let (elapsed, words) = time_runs(|| {
        process(&document, lexicon).map_or(0, |r| r.word_count as u64)
    });

    print_perf("Pipeline", len, elapsed, words);
}

/// Runs `run` untimed `WARMUP_RUNS` times, then returns the mean duration of
/// `MEASURE_RUNS` timed calls and the count reported by the last one.
fn time_runs<F: FnMut() -> u64>(mut run: F) -> (Duration, u64) {
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(run());
    }

    let mut last = 0u64;
    let total: Duration = (0..MEASURE_RUNS)
        .map(|_| {
            let started = Instant::now();
            last = std::hint::black_box(run());
            started.elapsed()
        })
        .sum();

    (total / MEASURE_RUNS as u32, last)
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, words: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if words > 0 {
        println!("Words       : {}", fmt_count(words));
        println!("Words/sec   : {}", fmt_count((words as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

const SIZE_UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

fn fmt_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", SIZE_UNITS[unit])
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sizes_pick_largest_unit() {
        assert_eq!(fmt_bytes(512), "512 B");
        assert_eq!(fmt_bytes(1536), "1.50 KiB");
        assert_eq!(fmt_bytes(3 * 1024 * 1024), "3.00 MiB");
        assert_eq!(fmt_bytes(5 * 1024 * 1024 * 1024), "5.00 GiB");
        assert_eq!(fmt_bytes(2048 * 1024 * 1024 * 1024), "2048.00 GiB");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(fmt_count(7), "7");
        assert_eq!(fmt_count(123), "123");
        assert_eq!(fmt_count(1234), "1_234");
        assert_eq!(fmt_count(1_234_567), "1_234_567");
    }

    #[test]
    fn time_runs_reports_last_count() {
        let mut calls = 0u64;
        let (_, last) = time_runs(|| {
            calls += 1;
            calls
        });
        assert_eq!(calls, (WARMUP_RUNS + MEASURE_RUNS) as u64);
        assert_eq!(last, calls);
    }
}
