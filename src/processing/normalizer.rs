//! Raw extracted text to ordered, trimmed, non-empty lines

/// Strip carriage returns, split on line breaks, trim, and drop blanks.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.replace('\r', "")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
