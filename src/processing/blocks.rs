//! Blank-line block splitting shared by the experience and education parsers

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid block break regex"));

/// Join `lines` with newlines and split wherever two or more newlines meet.
///
/// Each block comes back as its trimmed, non-empty lines.
pub fn split_blocks(lines: &[String]) -> Vec<Vec<String>> {
    let joined = lines.join("\n");

    BLOCK_BREAK_RE
        .split(&joined)
        .map(|block| {
            block
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}
