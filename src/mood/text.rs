//! Input normalization, sentence splitting and sanitization.

use super::AnalysisError;

/// Characters beyond this count are dropped before analysis
pub const MAX_INPUT_CHARS: usize = 5000;

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Characters removed by [`sanitize`]
const STRIPPED_CHARS: &[char] = &['<', '>', '"', '\'', '&', '{', '}', '[', ']', '\\'];

/// Punctuation whose long runs are collapsed by [`sanitize`]
const RUN_PUNCTUATION: &[char] = &['!', '?', '.', ','];

/// Runs at least this long collapse to an ellipsis
const PUNCTUATION_RUN_LIMIT: usize = 4;

/// Prepare raw text for analysis.
///
/// Rejects empty input, truncates to [`MAX_INPUT_CHARS`] characters, trims, and
/// lowercases. Text without a single alphanumeric character is unusable.
pub fn normalize(text: &str) -> Result<String, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let truncated = truncate_chars(text, MAX_INPUT_CHARS).trim();
    if !truncated.chars().any(char::is_alphanumeric) {
        return Err(AnalysisError::UnusableInput);
    }

    Ok(truncated.to_lowercase())
}

/// Borrow at most `max_chars` characters from the start of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Split text into trimmed, non-empty sentences on runs of `.`, `!` and `?`
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Clean user-supplied text before it reaches the engine.
///
/// Strips markup-like characters, collapses whitespace to single spaces,
/// replaces runs of four or more `! ? . ,` with `...`, and trims.
pub fn sanitize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let spaced = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(spaced.len());
    let mut run = String::new();
    for c in spaced.chars() {
        if RUN_PUNCTUATION.contains(&c) {
            run.push(c);
        } else {
            flush_run(&mut out, &mut run);
            out.push(c);
        }
    }
    flush_run(&mut out, &mut run);

    out.trim().to_string()
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.chars().count() >= PUNCTUATION_RUN_LIMIT {
        out.push_str("...");
    } else {
        out.push_str(run);
    }
    run.clear();
}
