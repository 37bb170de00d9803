//! Portfolio titles to placeholder case studies

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::PortfolioConfig;

use super::model::{CaseStudyStub, Image, Links};

const MAX_TITLE_CHARS: usize = 70;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9 .,&-]+$").expect("Invalid title regex"));

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Lowercase, collapse non-alphanumeric runs to `-`, trim hyphens at the ends.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_SLUG_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Short, capitalised line made of title-ish characters.
pub fn is_title_candidate(line: &str) -> bool {
    line.chars().count() < MAX_TITLE_CHARS && TITLE_RE.is_match(line)
}

/// Candidate titles in reading order, exact duplicates removed.
pub fn collect_titles(lines: &[String], limit: usize) -> Vec<&str> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| is_title_candidate(line))
        .filter(|line| seen.insert(*line))
        .take(limit)
        .collect()
}

pub fn extract_case_studies(
    lines: &[String],
    config: &PortfolioConfig,
    year: i32,
) -> Vec<CaseStudyStub> {
    collect_titles(lines, config.max_case_studies)
        .into_iter()
        .enumerate()
        .map(|(idx, title)| {
            let slug = slugify(title);
            CaseStudyStub {
                mdx: format!("{}/{}.mdx", config.mdx_dir, slug),
                slug,
                title: title.to_string(),
                year: year.to_string(),
                cover: Image {
                    src: format!("{}/{}.png", config.cover_dir, idx + 1),
                    alt: format!("{} cover", title),
                },
                summary: config.summary.clone(),
                role: config.role.clone(),
                stack: config.stack.clone(),
                metrics: Vec::new(),
                why_it_works: Vec::new(),
                responsibilities: Vec::new(),
                media: Vec::new(),
                links: Links::default(),
            }
        })
        .collect()
}
