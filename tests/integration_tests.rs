//! Integration tests for folio-extract

use folio_extract::input::InputManager;
use folio_extract::{Config, FolioError, Pipeline, RunOptions};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A site root with text inputs where the config expects them.
struct Site {
    dir: TempDir,
    config: Config,
}

impl Site {
    fn new(with_resume: bool, with_portfolio: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        std::fs::create_dir_all(root.join("content")).unwrap();
        std::fs::copy(fixture("content.json"), root.join("content/content.json")).unwrap();
        if with_resume {
            std::fs::copy(fixture("sample_resume.txt"), root.join("resume.txt")).unwrap();
        }
        if with_portfolio {
            std::fs::copy(fixture("sample_portfolio.txt"), root.join("portfolio.txt")).unwrap();
        }

        let mut config = Config::default();
        config.paths.content = PathBuf::from("content/content.json");
        config.paths.resume_candidates =
            vec![PathBuf::from("missing/resume.pdf"), PathBuf::from("resume.txt")];
        config.paths.portfolio_candidates = vec![PathBuf::from("portfolio.txt")];

        Self { dir, config }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.config.clone(), self.root())
    }

    fn content_path(&self) -> PathBuf {
        self.root().join("content/content.json")
    }

    fn content_raw(&self) -> String {
        std::fs::read_to_string(self.content_path()).unwrap()
    }

    fn content_json(&self) -> Value {
        serde_json::from_str(&self.content_raw()).unwrap()
    }

    fn backups(&self) -> Vec<PathBuf> {
        let mut backups: Vec<PathBuf> = std::fs::read_dir(self.root().join("content"))
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().starts_with("content.backup."))
                    .unwrap_or(false)
            })
            .collect();
        backups.sort();
        backups
    }
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager;
    let path = fixture("sample_resume.txt");

    let result = manager.extract_text(&path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("JANE DOE"));
    assert!(text.contains("jane.doe@example.com"));
    assert!(text.contains("Brightline Studios LLC"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager;
    let path = fixture("sample_resume.md");

    let result = manager.extract_text(&path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("SKILLS"));
    assert!(text.contains("Python, Figma"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager;
    let result = manager.extract_text(&fixture("unsupported.xyz")).await;
    assert!(matches!(result, Err(FolioError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager;
    let result = manager.extract_text(&fixture("nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_first_existing_candidate_wins() {
    let candidates = vec![
        fixture("nonexistent.pdf"),
        fixture("sample_resume.md"),
        fixture("sample_resume.txt"),
    ];

    let found = InputManager::find_first_existing(&candidates).await;
    assert_eq!(found, Some(fixture("sample_resume.md")));

    let none = InputManager::find_first_existing(&[fixture("nonexistent.pdf")]).await;
    assert!(none.is_none());
}

#[tokio::test]
async fn test_full_run_updates_content() {
    let site = Site::new(true, true);
    let original = site.content_raw();

    let report = site.pipeline().run(RunOptions::default()).await.unwrap();

    assert_eq!(report.resume, Some(site.root().join("resume.txt")));
    assert_eq!(report.portfolio, Some(site.root().join("portfolio.txt")));
    assert_eq!(
        report.added_case_studies,
        vec!["creator-reels-engine", "brand-refresh-phase-2"]
    );

    let backup = report.backup.expect("backup written");
    assert_eq!(std::fs::read_to_string(&backup).unwrap(), original);
    assert_eq!(site.backups(), vec![backup]);

    let content = site.content_json();

    let site_record = &content["site"];
    assert_eq!(site_record["email"], "jane.doe@example.com");
    assert_eq!(site_record["phone"], "(215) 555-0142");
    assert_eq!(site_record["location"], "Philadelphia, PA");
    assert_eq!(site_record["resume"], "/resume.pdf");
    assert_eq!(site_record["owner"], "Jane Doe");
    assert_eq!(site_record["socials"]["linkedin"], "https://linkedin.com/in/jane");

    let about = &content["about"];
    assert_eq!(about["title"], "About");
    assert_eq!(
        about["summary"],
        "<p>I build content engines that compound. Strategy first, then systems. \
         Shipped 40+ campaigns across short-form video and paid social.</p>"
    );
    assert_eq!(about["bullets"][0], "Keeps shipping");
    assert_eq!(about["headshot"]["src"], "/images/about/headshot.jpg");
    assert_eq!(about["faqs"].as_array().unwrap().len(), 2);

    let categories: Vec<&str> = about["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Strategy", "Content", "Engineering", "Tools", "Other"]);
    assert_eq!(about["skills"][4]["items"][0], "Public Speaking");

    let job = &about["experience"][0];
    assert_eq!(job["role"], "Creative Director");
    assert_eq!(job["company"], "Brightline Studios LLC");
    assert_eq!(job["duration"], "Mar 2021 - Present");
    assert_eq!(job["location"], "Remote");
    assert_eq!(
        job["responsibilities"],
        serde_json::json!([
            "Creative Director",
            "Built a short-form pipeline producing 30 videos a week",
            "Grew owned channels from 0 to 250k followers"
        ])
    );

    let school = &about["education"][0];
    assert_eq!(school["degree"], "B.A. Communications");
    assert_eq!(school["institution"], "Temple University");
    assert_eq!(school["duration"], "2012 - 2016");
    assert_eq!(school["description"], "Minor in Film.");

    let case_studies = content["caseStudies"].as_array().unwrap();
    let slugs: Vec<&str> = case_studies
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["launch-kit", "creator-reels-engine", "brand-refresh-phase-2"]);
    assert_eq!(case_studies[0]["summary"], "Hand-written.");
    assert_eq!(case_studies[0]["metrics"][0]["value"], "12k");
    assert_eq!(case_studies[1]["cover"]["src"], "/images/work/1.png");
    assert_eq!(case_studies[1]["mdx"], "/content/case-studies/creator-reels-engine.mdx");
    assert_eq!(case_studies[2]["cover"]["src"], "/images/work/3.png");

    assert_eq!(content["hero"]["tagline"], "Systems that ship.");

    // keys keep the positions they had in the file
    let top_keys: Vec<&str> = content.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        top_keys,
        vec![
            "site", "hero", "about", "highlights", "workedWith", "caseStudies", "systems",
            "testimonials", "contact"
        ]
    );
    let site_keys: Vec<&str> = site_record.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(site_keys, vec!["owner", "location", "email", "socials", "resume", "phone"]);
    assert_eq!(content["contact"]["note"], "Say hi");
}

#[tokio::test]
async fn test_repeated_runs_are_stable() {
    let site = Site::new(true, true);

    let first = site.pipeline().run(RunOptions::default()).await.unwrap();
    let after_first = site.content_raw();

    let second = site.pipeline().run(RunOptions::default()).await.unwrap();
    let after_second = site.content_raw();

    assert_eq!(after_first, after_second);
    assert!(second.added_case_studies.is_empty());

    let first_backup = first.backup.unwrap();
    let second_backup = second.backup.unwrap();
    assert_ne!(first_backup, second_backup);
    assert_eq!(std::fs::read_to_string(&second_backup).unwrap(), after_first);
    assert_eq!(site.backups().len(), 2);
}

#[tokio::test]
async fn test_missing_inputs_write_nothing() {
    let site = Site::new(false, false);
    let original = site.content_raw();

    let result = site.pipeline().run(RunOptions::default()).await;

    match result {
        Err(FolioError::MissingInput(checked)) => assert_eq!(checked.len(), 3),
        other => panic!("expected MissingInput, got {:?}", other.map(|r| r.content)),
    }
    assert_eq!(site.content_raw(), original);
    assert!(site.backups().is_empty());
}

#[tokio::test]
async fn test_corrupt_content_is_left_alone() {
    let site = Site::new(true, true);
    std::fs::write(site.content_path(), "{ \"site\": ").unwrap();

    let result = site.pipeline().run(RunOptions::default()).await;

    assert!(matches!(result, Err(FolioError::ContentParse { .. })));
    assert_eq!(site.content_raw(), "{ \"site\": ");
    assert!(site.backups().is_empty());
}

#[tokio::test]
async fn test_missing_content_is_fatal() {
    let site = Site::new(true, false);
    std::fs::remove_file(site.content_path()).unwrap();

    let result = site.pipeline().run(RunOptions::default()).await;

    assert!(matches!(result, Err(FolioError::ContentNotFound(_))));
    assert!(!site.content_path().exists());
    assert!(site.backups().is_empty());
}

#[tokio::test]
async fn test_portfolio_only_keeps_site_and_about() {
    let site = Site::new(false, true);
    let before = site.content_json();

    let report = site.pipeline().run(RunOptions::default()).await.unwrap();

    assert!(report.resume.is_none());
    assert!(report.resume_extraction.is_none());

    let after = site.content_json();
    assert_eq!(after["site"], before["site"]);
    assert_eq!(after["about"], before["about"]);
    assert_eq!(after["caseStudies"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_resume_only_leaves_case_studies() {
    let site = Site::new(true, false);
    let before = site.content_json();

    let report = site.pipeline().run(RunOptions::default()).await.unwrap();

    assert!(report.portfolio.is_none());
    assert!(report.added_case_studies.is_empty());
    assert_eq!(site.content_json()["caseStudies"], before["caseStudies"]);
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let site = Site::new(true, true);
    let original = site.content_raw();

    let report = site
        .pipeline()
        .run(RunOptions { dry_run: true })
        .await
        .unwrap();

    assert!(report.backup.is_none());
    assert_eq!(site.content_raw(), original);
    assert!(site.backups().is_empty());

    let site_record = report.document.get("site").unwrap();
    assert_eq!(site_record["email"], "jane.doe@example.com");
}
