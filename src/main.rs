//! folio-extract: resume/portfolio PDFs to a portfolio site's content document

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use folio_extract::cli::{self, Cli, Commands, ConfigAction};
use folio_extract::input::InputManager;
use folio_extract::processing::normalizer::normalize_lines;
use folio_extract::processing::sections::split_sections;
use folio_extract::{Config, Pipeline, RunOptions, RunReport};
use log::error;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Extract { root, dry_run } => {
            println!("🔎 Looking for documents under {}", root.display());

            let pipeline = Pipeline::new(config, &root);
            let report = pipeline
                .run(RunOptions { dry_run })
                .await
                .context("Extraction run failed")?;

            print_report(&report);

            if dry_run {
                println!("\n{}", serde_json::to_string_pretty(&report.document)?);
            }
        }

        Commands::Sections { file } => {
            cli::validate_file_extension(&file, &["pdf", "txt", "md"])
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Cannot segment {}", file.display()))?;

            let text = InputManager
                .extract_text(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let lines = normalize_lines(&text);
            let sections = split_sections(&lines);

            println!("📄 {} lines, {} sections\n", lines.len(), sections.len());
            for section in &sections {
                println!("{} ({} lines)", section.title.bold(), section.lines.len());
                for line in &section.lines {
                    println!("  {}", line);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config)?);
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn display_or_missing(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "not found".yellow().to_string(),
    }
}

fn print_report(report: &RunReport) {
    println!("• Resume: {}", display_or_missing(report.resume.as_deref()));
    println!("• Portfolio: {}", display_or_missing(report.portfolio.as_deref()));

    if let Some(extraction) = &report.resume_extraction {
        let about = &extraction.about;
        println!("\n📊 Resume:");
        println!("  • Sections detected: {}", extraction.sections.len());
        println!("  • Email: {}", extraction.email.as_deref().unwrap_or("-"));
        println!("  • Phone: {}", extraction.phone.as_deref().unwrap_or("-"));
        println!("  • Skill groups: {}", about.skills.len());
        println!("  • Experience entries: {}", about.experience.len());
        println!("  • Education entries: {}", about.education.len());
    }

    if !report.added_case_studies.is_empty() {
        println!("\n🗂  New case studies:");
        for slug in &report.added_case_studies {
            println!("  • {}", slug);
        }
    }

    match &report.backup {
        Some(backup) => {
            println!("\n{} {}", "✅ Updated".green(), report.content.display());
            println!("   Backup saved at: {}", backup.display());
        }
        None => println!("\n{}", "Dry run: nothing written".yellow()),
    }
}
