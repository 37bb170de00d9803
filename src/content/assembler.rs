//! Combines extractor outputs into the about record and site fields

use log::{debug, warn};

use crate::config::AboutConfig;
use crate::processing::contact::{extract_email, extract_phone, guess_location};
use crate::processing::education::parse_education;
use crate::processing::experience::parse_experience;
use crate::processing::sections::{pick_section, split_sections, Section, INTRO};
use crate::processing::skills::parse_skills;
use crate::processing::summary::to_html_paragraphs;

use super::merge::{Patch, SitePatch};
use super::model::{AboutDocument, Faq, Image};

const SKILL_KEYWORDS: &[&str] = &["skill", "tools"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "study"];
const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile"];

/// Content defaults, not derived from the document.
fn default_faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "What do you focus on?".to_string(),
            answer: "<p>I ship MVPs fast, then iterate. I pick the simplest path that scales.</p>"
                .to_string(),
        },
        Faq {
            question: "How do you work?".to_string(),
            answer: "<p>Small scopes, tight loops, visible results. I document as I build.</p>"
                .to_string(),
        },
    ]
}

/// Everything pulled out of one resume.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeExtraction {
    pub sections: Vec<Section>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Empty when no known place was mentioned.
    pub location: String,
    pub about: AboutDocument,
}

impl ResumeExtraction {
    /// Site fields this resume contributes; `resume_url` is always set.
    pub fn site_patch(&self, resume_url: &str) -> SitePatch {
        SitePatch {
            email: Patch::from_option(self.email.clone()),
            location: Patch::non_empty(self.location.clone()),
            resume: Patch::Set(resume_url.to_string()),
            phone: Patch::from_option(self.phone.clone()),
        }
    }
}

fn summary_lines<'a>(sections: &'a [Section], lines: &'a [String]) -> &'a [String] {
    pick_section(sections, SUMMARY_KEYWORDS)
        .or_else(|| sections.iter().find(|s| s.title == INTRO))
        .map(|s| s.lines.as_slice())
        .unwrap_or(lines)
}

pub fn assemble_resume(lines: &[String], config: &AboutConfig) -> ResumeExtraction {
    let sections = split_sections(lines);
    debug!(
        "Detected sections: {:?}",
        sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>()
    );

    let skills_section = pick_section(&sections, SKILL_KEYWORDS);
    let experience_section = pick_section(&sections, EXPERIENCE_KEYWORDS);
    let education_section = pick_section(&sections, EDUCATION_KEYWORDS);

    for (name, found) in [
        ("skills", skills_section.is_some()),
        ("experience", experience_section.is_some()),
        ("education", education_section.is_some()),
    ] {
        if !found {
            warn!("No {} section found in resume", name);
        }
    }

    let about = AboutDocument {
        title: config.title.clone(),
        summary: to_html_paragraphs(summary_lines(&sections, lines)),
        headshot: Image {
            src: config.headshot_src.clone(),
            alt: config.headshot_alt.clone(),
        },
        skills: parse_skills(skills_section),
        experience: parse_experience(experience_section),
        education: parse_education(education_section),
        faqs: default_faqs(),
    };

    ResumeExtraction {
        email: extract_email(lines),
        phone: extract_phone(lines),
        location: guess_location(lines),
        sections,
        about,
    }
}
