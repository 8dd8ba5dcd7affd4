//! Turns raw model output into discrete study items.

/// Characters stripped from both ends of every candidate line.
const LINE_TRIM_CHARS: &[char] = &[' ', '-', ')', '\t', '.'];

/// Header some models echo back before the list ("Questions:").
const HEADER_PREFIX: &str = "questions";

/// Splits a generated blob into at most `max_count` questions.
///
/// A blob that collapses to a single line is returned whole (trimmed): the
/// model answered with a paragraph rather than a list. Header lines are
/// skipped. If nothing survives, the trimmed blob is returned as the only item.
pub fn extract_questions(raw_text: &str, max_count: usize) -> Vec<String> {
    let max_count = max_count.max(1);

    let lines: Vec<&str> = raw_text
        .lines()
        .map(|line| line.trim().trim_matches(LINE_TRIM_CHARS))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() <= 1 {
        return vec![raw_text.trim().to_string()];
    }

    let questions: Vec<String> = lines
        .into_iter()
        .filter(|line| !line.to_lowercase().starts_with(HEADER_PREFIX))
        .take(max_count)
        .map(str::to_string)
        .collect();

    if questions.is_empty() {
        return vec![raw_text.trim().to_string()];
    }
    questions
}

/// Normalizes paraphrase sequences: trims each, drops blanks and repeats.
///
/// Order of first occurrence is kept.
pub fn clean_sequences<I, S>(sequences: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for sequence in sequences {
        let trimmed = sequence.as_ref().trim();
        if trimmed.is_empty() || cleaned.iter().any(|seen| seen == trimmed) {
            continue;
        }
        cleaned.push(trimmed.to_string());
    }
    cleaned
}
