//! CLI interface for the content extractor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-extract")]
#[command(about = "Scrape resume and portfolio PDFs into a site's content.json")]
#[command(long_about = "Segment a resume into sections, parse skills, experience and education, \
derive case-study stubs from a portfolio, and merge the result into the persisted content document \
after taking a timestamped backup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the resume/portfolio and merge into content.json
    Extract {
        /// Project root the configured paths are relative to
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Print the merged document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the sections detected in a document (PDF, TXT, MD)
    Sections {
        /// Document to segment
        file: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the default configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &std::path::Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::parse_from(["folio-extract", "extract", "--root", "/site", "--dry-run"]);
        match cli.command {
            Commands::Extract { root, dry_run } => {
                assert_eq!(root, PathBuf::from("/site"));
                assert!(dry_run);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(std::path::Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(std::path::Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(std::path::Path::new("cv"), &allowed).is_err());
    }
}
