//! Text Statistics Reporter
//!
//! Reads a UTF-8 text file, loads it into a [`Document`] and prints its
//! statistics.
//!
//! ## Usage
//!
//! ```bash
//! # Human-readable report (default)
//! ./target/release/text_stats /path/to/book.txt
//!
//! # Summary as JSON
//! ./target/release/text_stats /path/to/book.txt json
//!
//! # Ten most frequent words, case-insensitive
//! ./target/release/text_stats /path/to/book.txt top 10
//! ```
//!
//! Set `RUST_LOG=debug` to see pipeline logs on stderr.
//!
//! ## Example Output
//!
//! ```text
//! === Summary ===
//! --------------------------------
//! File        : 1.20 MiB
//! Characters  : 1_236_870
//! Words       : 214_532
//! Unique      : 18_204 (8.5%)
//! Lines       : 21_046
//! Sentences   : 9_873
//! Word length : 1..23 (avg 7.61)
//! Words/line  : 10.19
//! Words/sent. : 21.73
//! Folding     : unicode
//! Elapsed     : 0.412 s
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use textstat_core::{Document, FrequencyOptions, TextError, TextSummary};

const DEFAULT_TOP: usize = 10;

fn main() -> std::io::Result<()> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter.as_str())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: text_stats <path> [summary|json|top] [count]");
        process::exit(1);
    }

    let path = &args[1];
    let input = fs::read_to_string(path)?;

    let start = Instant::now();
    let mut doc = Document::new();
    doc.set_text(&input);

    let outcome = match args.get(2).map(String::as_str) {
        Some("json") => print_json(&doc),
        Some("top") => {
            let count = args
                .get(3)
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_TOP);
            print_top(&doc, count)
        }
        _ => doc.summary().map(|s| print_summary(&s, input.len(), start)),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        process::exit(1);
    }

    Ok(())
}

fn print_json(doc: &Document) -> Result<(), TextError> {
    let summary = doc.summary()?;
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to encode summary: {err}"),
    }
    Ok(())
}

fn print_top(doc: &Document, count: usize) -> Result<(), TextError> {
    let options = FrequencyOptions::default()
        .sorted(true)
        .limit(count)
        .case_sensitive(false);
    let table = doc.unique_words(options)?;

    println!("=== Top {} words ({}) ===", count, doc.case_folding());
    for (rank, (word, n)) in table.iter().enumerate() {
        println!("{:>4}. {:<24} {}", rank + 1, word, fmt_count(*n as u64));
    }
    Ok(())
}

fn print_summary(s: &TextSummary, input_bytes: usize, start: Instant) {
    let secs = start.elapsed().as_secs_f64();

    println!("=== Summary ===");
    println!("--------------------------------");
    println!("File        : {}", fmt_bytes(input_bytes as u64));
    println!("Characters  : {}", fmt_count(s.characters as u64));
    println!("Words       : {}", fmt_count(s.words as u64));
    println!(
        "Unique      : {} ({:.1}%)",
        fmt_count(s.unique_words as u64),
        s.unique_word_percentage
    );
    println!("Lines       : {}", fmt_count(s.lines as u64));
    println!("Sentences   : {}", fmt_count(s.sentences as u64));
    println!(
        "Word length : {}..{} (avg {:.2})",
        s.shortest_word_length, s.longest_word_length, s.average_word_length
    );
    println!("Words/line  : {:.2}", s.average_words_per_line);
    println!("Words/sent. : {:.2}", s.average_words_per_sentence);
    println!("Folding     : {}", s.case_folding);
    println!("Elapsed     : {:.3} s", secs);
    println!("--------------------------------");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
