//! Whole-document contact field heuristics: email, phone, location

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("Invalid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?[0-9]{1,3}[\s.-]?)?(\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4})")
        .expect("Invalid phone regex")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Philadelphia|PA|Pennsylvania|Remote|USA|United States)")
        .expect("Invalid place regex")
});

/// First email-shaped token, scanning lines in order.
pub fn extract_email(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| EMAIL_RE.find(line))
        .map(|m| m.as_str().to_string())
}

/// First phone-shaped match, with internal whitespace runs collapsed.
pub fn extract_phone(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| PHONE_RE.find(line))
        .map(|m| WHITESPACE_RE.replace_all(m.as_str(), " ").trim().to_string())
}

/// First line mentioning a known place token, or empty.
pub fn guess_location(lines: &[String]) -> String {
    lines
        .iter()
        .find(|line| PLACE_RE.is_match(line))
        .cloned()
        .unwrap_or_default()
}
