//! Work experience blocks: header attribution, dates, location, bullets

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::blocks::split_blocks;
use super::sections::Section;

const MAX_RESPONSIBILITIES: usize = 12;

/// How many lines after the header may carry an overriding job title.
const ROLE_LOOKAHEAD: usize = 3;

pub(crate) static DASH_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)[\x{2014}\x{2013}-]{1,2}\s*(.*)$").expect("Invalid dash split regex")
});

static COMPANY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(LLC|Inc\.?|Incorporated|Corporation|Company|Co\.?|Ltd\.?)\b")
        .expect("Invalid company suffix regex")
});

static ROLE_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(Director|Manager|Owner|Engineer|Strategist|Consultant|Lead|Developer|Designer|Producer|Founder|CEO|CTO|Specialist)",
    )
    .expect("Invalid role keyword regex")
});

static DATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d{4}\b|Present").expect("Invalid dated regex"));

static MONTH_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t)?(?:ember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{4}\s*[-\x{2013}\x{2014}]\s*(Present|\d{4})",
    )
    .expect("Invalid month range regex")
});

static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{4}\b\s*[-\x{2013}\x{2014}]\s*(Present|\d{4})")
        .expect("Invalid year range regex")
});

static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Remote|Philadelphia|New York|San Francisco|USA|United States|PA|NY|CA)")
        .expect("Invalid place regex")
});

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{2212}\x{2022}\x{25CF}-]\s*").expect("Invalid bullet regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub responsibilities: Vec<String>,
}

/// Whether the header halves were taken as written or swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    AsWritten,
    /// The first half carried a legal-entity suffix.
    SwappedCompanySuffix,
    /// No second half and the fragment was short.
    SwappedShortFragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSplit {
    pub role: String,
    pub company: String,
    pub attribution: Attribution,
}

/// Split `header` on a dash run into its two halves, trimmed.
pub(crate) fn split_on_dash(header: &str) -> (String, String) {
    match DASH_SPLIT_RE.captures(header) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (header.to_string(), String::new()),
    }
}

pub fn looks_like_company(text: &str) -> bool {
    COMPANY_SUFFIX_RE.is_match(text)
}

/// Attribute the halves of a "Role — Company" style header.
pub fn classify_header(header: &str) -> HeaderSplit {
    let (role, company) = split_on_dash(header);

    let attribution = if looks_like_company(&role) {
        Attribution::SwappedCompanySuffix
    } else if company.is_empty() && role.split(' ').count() <= 4 {
        Attribution::SwappedShortFragment
    } else {
        Attribution::AsWritten
    };

    match attribution {
        Attribution::AsWritten => HeaderSplit {
            role,
            company,
            attribution,
        },
        _ => {
            let new_role = if company.is_empty() { role.clone() } else { company };
            HeaderSplit {
                role: new_role,
                company: role,
                attribution,
            }
        }
    }
}

/// A job-title line shortly after the header, skipping dated lines.
fn role_override(lines: &[String]) -> Option<&String> {
    lines
        .iter()
        .skip(1)
        .take(ROLE_LOOKAHEAD)
        .find(|line| ROLE_KEYWORD_RE.is_match(line) && !DATED_RE.is_match(line))
}

/// First date range in reading order. Within a line the month form is tried
/// before the bare-year form, but an earlier line always beats a later one.
pub fn find_duration(lines: &[String]) -> Option<String> {
    lines.iter().find_map(|line| {
        MONTH_RANGE_RE
            .find(line)
            .or_else(|| YEAR_RANGE_RE.find(line))
            .map(|m| m.as_str().to_string())
    })
}

pub fn strip_bullet(line: &str) -> String {
    BULLET_RE.replace(line, "").into_owned()
}

fn parse_block(lines: &[String]) -> Option<ExperienceEntry> {
    let header = &lines[0];
    let HeaderSplit {
        mut role,
        company,
        attribution,
    } = classify_header(header);

    if let Some(line) = role_override(lines) {
        debug!("Role override from '{}' (header attribution {:?})", line, attribution);
        role = line.trim().to_string();
    }

    let duration = find_duration(lines).unwrap_or_default();
    let location = lines
        .iter()
        .find(|line| PLACE_RE.is_match(line))
        .cloned()
        .unwrap_or_default();

    let responsibilities: Vec<String> = lines[1..]
        .iter()
        .filter(|line| *line != header)
        .filter(|line| duration.is_empty() || !line.contains(&duration))
        .filter(|line| **line != location)
        .map(|line| strip_bullet(line))
        .take(MAX_RESPONSIBILITIES)
        .collect();

    if role.is_empty() && company.is_empty() && responsibilities.is_empty() {
        return None;
    }

    Some(ExperienceEntry {
        role,
        company,
        duration,
        location,
        responsibilities,
    })
}

pub fn parse_experience(section: Option<&Section>) -> Vec<ExperienceEntry> {
    let Some(section) = section else {
        return Vec::new();
    };

    split_blocks(&section.lines)
        .iter()
        .filter(|block| block.len() >= 2)
        .filter_map(|block| parse_block(block))
        .collect()
}
