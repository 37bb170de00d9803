//! Education blocks

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::blocks::split_blocks;
use super::experience::split_on_dash;
use super::sections::Section;

static YEAR_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}).*(\d{4}|Present)").expect("Invalid year span regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub description: String,
}

fn parse_block(lines: &[String]) -> EducationEntry {
    let (degree, institution) = split_on_dash(&lines[0]);

    let duration = lines
        .iter()
        .find(|line| YEAR_SPAN_RE.is_match(line))
        .cloned()
        .unwrap_or_default();

    let description = lines[1..]
        .iter()
        .filter(|line| **line != duration)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    EducationEntry {
        degree,
        institution,
        duration,
        description,
    }
}

pub fn parse_education(section: Option<&Section>) -> Vec<EducationEntry> {
    let Some(section) = section else {
        return Vec::new();
    };

    split_blocks(&section.lines)
        .iter()
        .filter(|block| !block.is_empty())
        .map(|block| parse_block(block))
        .collect()
}
