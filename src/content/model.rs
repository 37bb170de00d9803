//! Persisted content document and the records the extractor produces

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::processing::education::EducationEntry;
use crate::processing::experience::ExperienceEntry;
use crate::processing::skills::SkillGroup;

pub const SITE_KEY: &str = "site";
pub const ABOUT_KEY: &str = "about";
pub const CASE_STUDIES_KEY: &str = "caseStudies";

/// The site's content JSON, held as the ordered object it was read as.
///
/// Only `site`, `about` and `caseStudies` are edited, in place. Every key
/// keeps its position and all other keys pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument {
    fields: Map<String, Value>,
}

impl ContentDocument {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for ContentDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    /// HTML
    pub answer: String,
}

/// Everything the resume contributes to `about`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutDocument {
    pub title: String,
    /// HTML paragraphs
    pub summary: String,
    pub headshot: Image,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// Placeholder case study derived from a portfolio title, to be completed by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyStub {
    pub slug: String,
    pub title: String,
    pub year: String,
    pub cover: Image,
    pub summary: String,
    pub role: Vec<String>,
    pub stack: Vec<String>,
    pub metrics: Vec<Metric>,
    pub why_it_works: Vec<String>,
    pub responsibilities: Vec<String>,
    pub media: Vec<Media>,
    pub links: Links,
    pub mdx: String,
}
