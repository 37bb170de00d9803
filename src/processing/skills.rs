//! Skill token bucketing into a fixed, ordered category table

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::sections::Section;

pub const OTHER_CATEGORY: &str = "Other";

/// Category table; order decides both precedence and output order.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("Strategy", &["strategy", "planning", "growth"]),
    ("Content", &["script", "video", "ugc", "short"]),
    (
        "Engineering",
        &["python", "api", "fastapi", "ffmpeg", "next", "typescript", "automation"],
    ),
    (
        "Tools",
        &["notion", "figma", "adobe", "premiere", "after effects", "canva"],
    ),
];

static CLASSIFIER: LazyLock<SkillClassifier> = LazyLock::new(SkillClassifier::default_table);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// Which bucket a token fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Known(usize),
    Other,
}

pub struct SkillClassifier {
    categories: Vec<(&'static str, AhoCorasick)>,
}

impl SkillClassifier {
    fn default_table() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|(name, keywords)| {
                let matcher = AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(*keywords)
                    .expect("Invalid skill keyword table");
                (*name, matcher)
            })
            .collect();
        Self { categories }
    }

    /// First category with a keyword occurring anywhere in `token`.
    pub fn classify(&self, token: &str) -> SkillCategory {
        self.categories
            .iter()
            .position(|(_, matcher)| matcher.is_match(token))
            .map(SkillCategory::Known)
            .unwrap_or(SkillCategory::Other)
    }

    pub fn category_name(&self, category: SkillCategory) -> &'static str {
        match category {
            SkillCategory::Known(idx) => self.categories[idx].0,
            SkillCategory::Other => OTHER_CATEGORY,
        }
    }

    /// Bucket every token; empty buckets are dropped and Other comes last.
    pub fn group(&self, tokens: &[String]) -> Vec<SkillGroup> {
        let other_slot = self.categories.len();
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); other_slot + 1];

        for token in tokens {
            let slot = match self.classify(token) {
                SkillCategory::Known(idx) => idx,
                SkillCategory::Other => other_slot,
            };
            buckets[slot].push(token.clone());
        }

        (0..other_slot)
            .map(SkillCategory::Known)
            .chain([SkillCategory::Other])
            .zip(buckets)
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, items)| SkillGroup {
                category: self.category_name(category).to_string(),
                items,
            })
            .collect()
    }
}

/// Split joined section text on commas and bullets.
pub fn tokenize_skills(lines: &[String]) -> Vec<String> {
    lines
        .join(" ")
        .split(|c: char| c == ',' || c == '\u{2022}' || c == '\n')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_skills(section: Option<&Section>) -> Vec<SkillGroup> {
    let Some(section) = section else {
        return Vec::new();
    };
    CLASSIFIER.group(&tokenize_skills(&section.lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &[&str]) -> Section {
        Section {
            title: "SKILLS".to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_groups_follow_category_table_order() {
        let groups = parse_skills(Some(&section(&["Python, Figma, Growth Strategy"])));
        assert_eq!(
            groups,
            vec![
                SkillGroup { category: "Strategy".into(), items: vec!["Growth Strategy".into()] },
                SkillGroup { category: "Engineering".into(), items: vec!["Python".into()] },
                SkillGroup { category: "Tools".into(), items: vec!["Figma".into()] },
            ]
        );
    }

    #[test]
    fn test_bullets_and_other_bucket() {
        let groups = parse_skills(Some(&section(&["• UGC Video • Negotiation,", "Canva, Public Speaking"])));
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Content", "Tools", "Other"]);
        assert_eq!(groups[2].items, vec!["Negotiation", "Public Speaking"]);
    }

    #[test]
    fn test_first_match_wins() {
        // "script" (Content) precedes "typescript" (Engineering)
        let classifier = &*CLASSIFIER;
        let category = classifier.classify("TypeScript");
        assert_eq!(classifier.category_name(category), "Content");
    }

    #[test]
    fn test_every_token_lands_in_exactly_one_group() {
        let tokens = tokenize_skills(&["Python, Notion, Growth, Knitting, FFmpeg, Short-form".to_string()]);
        let groups = CLASSIFIER.group(&tokens);
        let mut flattened: Vec<String> = groups.into_iter().flat_map(|g| g.items).collect();
        let mut expected = tokens.clone();
        flattened.sort();
        expected.sort();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_missing_section_yields_nothing() {
        assert!(parse_skills(None).is_empty());
        assert!(parse_skills(Some(&section(&[" , • "]))).is_empty());
    }
}
