mod cli;
mod config;
mod error;
mod prd;
mod report;
mod scoring;
mod types;

use crate::error::{PrdError, Result};
use crate::types::config::PrdToolConfig;
use crate::types::document::{Document, Person};
use crate::types::scoring::Decision;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::ERROR
    } else {
        match verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_path(path: Option<PathBuf>, config: &PrdToolConfig) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(config.default_file()))
}

fn load_settings() -> Result<PrdToolConfig> {
    match config::load_config(Path::new("."))? {
        Some(cfg) => Ok(cfg),
        None => {
            tracing::debug!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
            Ok(PrdToolConfig::default())
        }
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let settings = load_settings()?;

    match cli.command {
        cli::Commands::Init(cmd) => {
            let path = resolve_path(cmd.path, &settings);
            if path.exists() {
                return Err(PrdError::DocumentExists(path.display().to_string()));
            }
            let id = cmd
                .id
                .unwrap_or_else(|| prd::generate_id(settings.id_prefix()));
            let owner = Person {
                name: cmd.owner.clone(),
                ..Person::default()
            };
            let mut document = Document::new(&id, &cmd.title, owner);
            prd::save(&mut document, &path)?;
            tracing::info!(path = %path.display(), id = %id, "created PRD");

            if !cli.quiet {
                println!("Created new PRD: {}", path.display());
                println!("  ID:    {id}");
                println!("  Title: {}", cmd.title);
                println!("  Owner: {}", cmd.owner);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let path = resolve_path(cmd.path, &settings);
            let document = prd::load(&path)?;
            let result = prd::validate::validate(&document);
            let exit = if !result.valid {
                exit_code::BLOCKING
            } else if !result.warnings.is_empty() {
                exit_code::WARNINGS
            } else {
                exit_code::SUCCESS
            };

            if cli.quiet {
                for issue in &result.errors {
                    eprintln!("[ERROR] {}: {}", issue.field, issue.message);
                }
                return Ok(exit);
            }

            println!("Validating: {}", path.display());
            if result.valid {
                println!("PRD is valid");
            } else {
                println!("PRD has validation errors");
            }
            if !result.errors.is_empty() {
                println!("\nErrors ({}):", result.errors.len());
                for issue in &result.errors {
                    println!("  [ERROR] {}: {}", issue.field, issue.message);
                }
            }
            if !result.warnings.is_empty() {
                println!("\nWarnings ({}):", result.warnings.len());
                for issue in &result.warnings {
                    println!("  [WARN] {}: {}", issue.field, issue.message);
                }
            }

            let metadata = &document.metadata;
            println!("\nSummary:");
            println!("  PRD ID:  {}", metadata.id);
            println!("  Title:   {}", metadata.title);
            println!(
                "  Status:  {}",
                metadata.status.map(|status| status.as_str()).unwrap_or("")
            );
            println!("  Version: {}", metadata.version);
            Ok(exit)
        }
        cli::Commands::Show(cmd) => {
            let path = resolve_path(cmd.path, &settings);
            let document = prd::load(&path)?;
            let rendered = match (cmd.json, cmd.section) {
                (true, section) => prd::show::to_json(&document, section)?,
                (false, Some(section)) => prd::show::render_section(&document, section),
                (false, None) => prd::show::render_overview(&document),
            };
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let path = resolve_path(cmd.path, &settings);
            let document = prd::load(&path)?;
            let result = if settings.has_weight_overrides() {
                scoring::score_with_weights(&document, &settings.weights()?)
            } else {
                scoring::score(&document)
            };

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&result, &document.metadata.title, output_format)?;
            println!("{rendered}");

            Ok(match result.decision {
                Decision::Approve => exit_code::SUCCESS,
                Decision::Revise | Decision::HumanReview => exit_code::WARNINGS,
                Decision::Reject => exit_code::BLOCKING,
            })
        }
        cli::Commands::Weights => {
            let weights = settings.weights()?;
            for entry in weights.entries() {
                println!("{:<24} {:.2}", entry.category.key(), entry.weight);
            }
            println!("{:<24} {:.2}", "total", weights.total());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
