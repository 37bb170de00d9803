//! Typed partial updates applied onto the persisted content document

use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::{FolioError, Result};

use super::model::{
    AboutDocument, CaseStudyStub, ContentDocument, ABOUT_KEY, CASE_STUDIES_KEY, SITE_KEY,
};

/// A field update: either a new value or "leave whatever is there".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Set(T),
    Keep,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Patch::Keep, Patch::Set)
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

impl Patch<String> {
    /// Empty strings count as "nothing extracted".
    pub fn non_empty(value: String) -> Self {
        if value.is_empty() {
            Patch::Keep
        } else {
            Patch::Set(value)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePatch {
    pub email: Patch<String>,
    pub location: Patch<String>,
    pub resume: Patch<String>,
    pub phone: Patch<String>,
}

impl SitePatch {
    pub fn is_noop(&self) -> bool {
        self.email.is_keep() && self.location.is_keep() && self.resume.is_keep() && self.phone.is_keep()
    }

    /// Overwrite set fields in place; new fields are appended.
    fn apply(self, site: &mut Map<String, Value>) {
        let fields = [
            ("email", self.email),
            ("location", self.location),
            ("resume", self.resume),
            ("phone", self.phone),
        ];
        for (key, patch) in fields {
            if let Patch::Set(value) = patch {
                site.insert(key.to_string(), Value::String(value));
            }
        }
    }
}

/// Everything one run wants to change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPatch {
    pub site: SitePatch,
    pub about: Patch<AboutDocument>,
    pub case_studies: Vec<CaseStudyStub>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub document: ContentDocument,
    /// Slugs appended to `caseStudies`, in order.
    pub added_case_studies: Vec<String>,
}

/// Take the object stored under `key`, leaving a placeholder that keeps the
/// key's position. Anything that is not an object starts over empty.
fn take_object(fields: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match fields.get_mut(key).map(Value::take) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn take_array(fields: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match fields.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn slug_of(case_study: &Value) -> Option<&str> {
    case_study.get("slug").and_then(Value::as_str)
}

/// Apply `patch` onto `existing`.
///
/// `site` and `about` are shallow-merged: set fields overwrite, kept fields
/// retain their existing values. Case studies merge by slug; existing entries
/// are never replaced and unseen slugs are appended in order. Keys are edited
/// in place, so the document's key order survives.
pub fn merge(existing: ContentDocument, patch: ContentPatch) -> Result<MergeOutcome> {
    let mut fields = existing.into_fields();

    if !patch.site.is_noop() {
        let mut site = take_object(&mut fields, SITE_KEY);
        patch.site.apply(&mut site);
        fields.insert(SITE_KEY.to_string(), Value::Object(site));
    }

    if let Patch::Set(document) = patch.about {
        let mut about = take_object(&mut fields, ABOUT_KEY);
        match serde_json::to_value(document)? {
            Value::Object(update) => about.extend(update),
            other => {
                return Err(FolioError::Processing(format!(
                    "about document serialized to a non-object: {}",
                    other
                )))
            }
        }
        fields.insert(ABOUT_KEY.to_string(), Value::Object(about));
    }

    let mut added_case_studies = Vec::new();
    if !patch.case_studies.is_empty() {
        let mut studies = take_array(&mut fields, CASE_STUDIES_KEY);
        let mut seen: HashSet<String> = studies
            .iter()
            .filter_map(slug_of)
            .map(str::to_string)
            .collect();

        for stub in patch.case_studies {
            if !seen.insert(stub.slug.clone()) {
                debug!("Case study '{}' already present, keeping existing entry", stub.slug);
                continue;
            }
            studies.push(serde_json::to_value(&stub)?);
            added_case_studies.push(stub.slug);
        }
        fields.insert(CASE_STUDIES_KEY.to_string(), Value::Array(studies));
    }

    info!(
        "Merged content: {} new case studies",
        added_case_studies.len()
    );

    Ok(MergeOutcome {
        document: ContentDocument::from(fields),
        added_case_studies,
    })
}
