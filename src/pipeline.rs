//! One extraction run: resolve inputs, extract, merge, back up, write

use chrono::{Datelike, Local};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::{Config, ProjectPaths};
use crate::content::assembler::{assemble_resume, ResumeExtraction};
use crate::content::model::{CaseStudyStub, ContentDocument};
use crate::content::portfolio::extract_case_studies;
use crate::content::{merge, ContentPatch, ContentStore, Patch};
use crate::error::{FolioError, Result};
use crate::input::InputManager;
use crate::processing::normalizer::normalize_lines;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Extract and merge, but write nothing.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub resume: Option<PathBuf>,
    pub portfolio: Option<PathBuf>,
    pub content: PathBuf,
    /// `None` on a dry run.
    pub backup: Option<PathBuf>,
    pub resume_extraction: Option<ResumeExtraction>,
    pub added_case_studies: Vec<String>,
    pub document: ContentDocument,
}

pub struct Pipeline {
    config: Config,
    paths: ProjectPaths,
}

/// Read and normalize a document, or nothing if it was not found.
async fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = InputManager.extract_text(path).await?;
    Ok(normalize_lines(&text))
}

impl Pipeline {
    pub fn new(config: Config, root: &Path) -> Self {
        let paths = config.resolve(root);
        Self { config, paths }
    }

    pub async fn run(&self, options: RunOptions) -> Result<RunReport> {
        let resume = InputManager::find_first_existing(&self.paths.resume_candidates).await;
        let portfolio = InputManager::find_first_existing(&self.paths.portfolio_candidates).await;

        if resume.is_none() && portfolio.is_none() {
            let checked = self
                .paths
                .resume_candidates
                .iter()
                .chain(&self.paths.portfolio_candidates)
                .cloned()
                .collect();
            return Err(FolioError::MissingInput(checked));
        }

        match &resume {
            Some(path) => info!("Resume: {}", path.display()),
            None => warn!("Resume: not found"),
        }
        match &portfolio {
            Some(path) => info!("Portfolio: {}", path.display()),
            None => warn!("Portfolio: not found"),
        }

        // Disjoint outputs, so both documents are read concurrently.
        let (resume_lines, portfolio_lines) = tokio::try_join!(
            read_lines(resume.as_deref()),
            read_lines(portfolio.as_deref())
        )?;

        let resume_extraction = resume
            .as_ref()
            .map(|_| assemble_resume(&resume_lines, &self.config.about));
        let case_studies = self.case_studies(&portfolio_lines);

        let patch = self.build_patch(resume_extraction.as_ref(), case_studies);

        let store = ContentStore::new(&self.paths.content);
        let loaded = store.load().await?;
        let outcome = merge(loaded.document, patch)?;

        let backup = if options.dry_run {
            info!("Dry run: leaving {} untouched", store.path().display());
            None
        } else {
            let backup = store.backup(&loaded.raw).await?;
            store.save(&outcome.document).await?;
            Some(backup)
        };

        Ok(RunReport {
            resume,
            portfolio,
            content: self.paths.content.clone(),
            backup,
            resume_extraction,
            added_case_studies: outcome.added_case_studies,
            document: outcome.document,
        })
    }

    fn case_studies(&self, lines: &[String]) -> Vec<CaseStudyStub> {
        if lines.is_empty() {
            return Vec::new();
        }
        extract_case_studies(lines, &self.config.portfolio, Local::now().year())
    }

    fn build_patch(
        &self,
        resume: Option<&ResumeExtraction>,
        case_studies: Vec<CaseStudyStub>,
    ) -> ContentPatch {
        match resume {
            Some(extraction) => ContentPatch {
                site: extraction.site_patch(&self.config.site.resume_url),
                about: Patch::Set(extraction.about.clone()),
                case_studies,
            },
            None => ContentPatch {
                case_studies,
                ..Default::default()
            },
        }
    }
}
