//! Configuration management for the content extractor

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub site: SiteConfig,
    pub about: AboutConfig,
    pub portfolio: PortfolioConfig,
}

/// Locations of the input documents and the persisted content, relative to
/// the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub content: PathBuf,
    pub resume_candidates: Vec<PathBuf>,
    pub portfolio_candidates: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public URL written to `site.resume`.
    pub resume_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    pub title: String,
    pub headshot_src: String,
    pub headshot_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub max_case_studies: usize,
    pub cover_dir: String,
    pub mdx_dir: String,
    pub summary: String,
    pub role: Vec<String>,
    pub stack: Vec<String>,
}

/// Absolute locations for one run, resolved against a project root.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPaths {
    pub content: PathBuf,
    pub resume_candidates: Vec<PathBuf>,
    pub portfolio_candidates: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                content: PathBuf::from("public/content/content.json"),
                resume_candidates: vec![
                    PathBuf::from("src/app/resume.pdf"),
                    PathBuf::from("public/images/resume.pdf"),
                    PathBuf::from("public/resume.pdf"),
                ],
                portfolio_candidates: vec![
                    PathBuf::from("src/app/portfolio.pdf"),
                    PathBuf::from("public/portfolio.pdf"),
                ],
            },
            site: SiteConfig {
                resume_url: "/resume.pdf".to_string(),
            },
            about: AboutConfig {
                title: "About".to_string(),
                headshot_src: "/images/about/headshot.jpg".to_string(),
                headshot_alt: "Headshot".to_string(),
            },
            portfolio: PortfolioConfig {
                max_case_studies: 8,
                cover_dir: "/images/work".to_string(),
                mdx_dir: "/content/case-studies".to_string(),
                summary: "Project from portfolio PDF (details TBD).".to_string(),
                role: vec![
                    "Product".to_string(),
                    "Engineering".to_string(),
                    "Design".to_string(),
                ],
                stack: vec![
                    "Next.js".to_string(),
                    "TypeScript".to_string(),
                    "Tailwind".to_string(),
                ],
            },
        }
    }
}

impl Config {
    /// Load from an explicit file, or from the per-user default location.
    ///
    /// An explicit path must exist. When the default file is missing the
    /// defaults are written there and returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::read_from(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::read_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save_to(&config_path)?;
                    Ok(config)
                }
            }
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FolioError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("folio-extract")
            .join("config.toml")
    }

    /// Resolve every configured path against `root`.
    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        let join_all = |paths: &[PathBuf]| paths.iter().map(|p| root.join(p)).collect();

        ProjectPaths {
            content: root.join(&self.paths.content),
            resume_candidates: join_all(&self.paths.resume_candidates),
            portfolio_candidates: join_all(&self.paths.portfolio_candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_resolve_joins_root() {
        let config = Config::default();
        let paths = config.resolve(Path::new("/site"));

        assert_eq!(paths.content, PathBuf::from("/site/public/content/content.json"));
        assert_eq!(paths.resume_candidates[0], PathBuf::from("/site/src/app/resume.pdf"));
        assert_eq!(paths.portfolio_candidates.len(), 2);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(FolioError::Configuration(_))));
    }
}
