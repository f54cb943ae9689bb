//! Phonics-highlighting text scanner.
//!
//! Splits paragraph text into alternating whitespace / word runs, classifies
//! each word against the fixed target-pattern table and produces (a) the
//! paragraph with matched words wrapped in `<u>` emphasis and (b) per-pattern
//! buckets of matched words in first-seen order. Pure and synchronous: one
//! call computes one complete result, nothing is carried between calls.

/// Target letter sequences, in matching-priority order. A word contributes to
/// at most one bucket; the earliest-declared matching pattern wins.
pub const PATTERNS: [&str; 5] = ["ck", "ch", "wh", "th", "sh"];

/// Words matched to one pattern, deduplicated, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub pattern: &'static str,
    pub words: Vec<String>,
}

/// Output of one scan: annotated paragraphs plus one bucket per pattern
/// (empty buckets are kept so the consumer can render a placeholder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub paragraphs: Vec<String>,
    pub buckets: Vec<Bucket>,
}

/// Scans `paragraphs` against [`PATTERNS`]. Reassembling the annotated
/// output with emphasis markers stripped reproduces the input exactly.
pub fn scan(paragraphs: &[&str]) -> ScanResult {
    let mut buckets: Vec<Bucket> = PATTERNS
        .iter()
        .map(|&pattern| Bucket { pattern, words: Vec::new() })
        .collect();

    let annotated = paragraphs
        .iter()
        .map(|p| annotate_paragraph(p, &mut buckets))
        .collect();

    ScanResult { paragraphs: annotated, buckets }
}

fn annotate_paragraph(text: &str, buckets: &mut [Bucket]) -> String {
    let mut out = String::with_capacity(text.len());
    for run in split_runs(text) {
        if run.chars().next().is_some_and(|c| c.is_whitespace()) {
            out.push_str(run);
            continue;
        }
        out.push_str(&classify_run(run, buckets));
    }
    out
}

/// Classifies one word run. On a match the pure word's first occurrence in
/// the raw run is wrapped in `<u>`; runs that cannot be classified (no
/// alphabetic content, no pattern hit) pass through unmodified.
fn classify_run(raw: &str, buckets: &mut [Bucket]) -> String {
    let pure: String = raw.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if pure.is_empty() {
        return raw.to_string();
    }
    let lower = pure.to_lowercase();
    for bucket in buckets.iter_mut() {
        if lower.contains(bucket.pattern) {
            if !bucket.words.iter().any(|w| w == &pure) {
                bucket.words.push(pure.clone());
            }
            // If the raw run interleaves non-letters, the pure word has no
            // contiguous occurrence and the run stays unmarked.
            return raw.replacen(&pure, &format!("<u>{pure}</u>"), 1);
        }
    }
    raw.to_string()
}

/// Splits into alternating whitespace / non-whitespace runs so that
/// concatenating the runs reproduces `text` byte for byte.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_ws: Option<bool> = None;
    for (idx, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match in_ws {
            Some(prev) if prev == ws => {}
            Some(_) => {
                runs.push(&text[start..idx]);
                start = idx;
                in_ws = Some(ws);
            }
            None => in_ws = Some(ws),
        }
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

/// Strips `<u>` / `</u>` emphasis markers, recovering the raw paragraph.
pub fn strip_emphasis(annotated: &str) -> String {
    annotated.replace("<u>", "").replace("</u>", "")
}
