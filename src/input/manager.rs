//! Input manager: resolves candidate documents and routes extraction by type

use crate::error::{FolioError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    /// First candidate that exists on disk, in list order.
    pub async fn find_first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
        for candidate in candidates {
            match fs::metadata(candidate).await {
                Ok(meta) if meta.is_file() => return Some(candidate.clone()),
                _ => debug!("Candidate not found: {}", candidate.display()),
            }
        }
        None
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FolioError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(FolioError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text)
    }
}
