//! Section segmentation by header detection

use serde::{Deserialize, Serialize};

/// Title given to the lines that precede the first detected header.
pub const INTRO: &str = "INTRO";

/// Header candidates at or above this many characters are body text.
const MAX_HEADER_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }
}

/// Why a line was (or was not) taken as a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVerdict {
    AllCaps,
    TrailingColon,
    TooLong,
    Body,
}

impl HeaderVerdict {
    pub fn is_header(self) -> bool {
        matches!(self, HeaderVerdict::AllCaps | HeaderVerdict::TrailingColon)
    }
}

/// Classify a single line. Pure: the verdict depends only on the text.
pub fn classify_line(line: &str) -> HeaderVerdict {
    if line.is_empty() {
        return HeaderVerdict::Body;
    }

    let letters: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ':' || *c == ' ')
        .collect();
    let all_caps = !letters.trim().is_empty() && letters == letters.to_uppercase();
    let colon = line.trim_end().ends_with(':');

    if !all_caps && !colon {
        HeaderVerdict::Body
    } else if line.chars().count() >= MAX_HEADER_CHARS {
        HeaderVerdict::TooLong
    } else if all_caps {
        HeaderVerdict::AllCaps
    } else {
        HeaderVerdict::TrailingColon
    }
}

pub fn is_section_header(line: &str) -> bool {
    classify_line(line).is_header()
}

fn header_title(line: &str) -> String {
    line.strip_suffix(':').unwrap_or(line).trim().to_string()
}

/// Partition `lines` into sections. Every line lands in exactly one section,
/// except header lines, which become titles.
pub fn split_sections(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(INTRO);

    for line in lines {
        if is_section_header(line) {
            let finished = std::mem::replace(&mut current, Section::new(header_title(line)));
            if !finished.lines.is_empty() {
                sections.push(finished);
            }
        } else {
            current.lines.push(line.clone());
        }
    }

    if !current.lines.is_empty() {
        sections.push(current);
    }

    sections
}

/// First section whose lowercased title contains any of `keywords`.
pub fn pick_section<'a>(sections: &'a [Section], keywords: &[&str]) -> Option<&'a Section> {
    sections.iter().find(|section| {
        let title = section.title.to_lowercase();
        keywords.iter().any(|keyword| title.contains(keyword))
    })
}
