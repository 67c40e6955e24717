//! searchapi-check: validate JSON fixtures against the search API wire shapes.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use searchapi_cli::{check_path, default_target};
use searchapi_core::config::Config;
use searchapi_core::Shape;

#[derive(Parser)]
#[command(name = "searchapi-check")]
#[command(about = "Check JSON payloads against the search API schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding config.toml
    #[arg(short, long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known shape
    Shapes,
    /// Decode a file or directory of fixtures as one shape
    Check {
        /// Shape name, e.g. ArticleResult or IArticleResult
        shape: String,
        /// File or directory (defaults to check.fixtures_dir)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Shapes => {
            for shape in Shape::ALL {
                println!("{}", shape);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { shape, path } => {
            let config = match &cli.config_dir {
                Some(dir) => Config::load_from(dir),
                None => Config::load(),
            }
            .context("Error loading config")?;
            let settings = config.check_settings()?;
            let shape: Shape = shape.parse()?;
            let path = path.unwrap_or_else(|| default_target(shape, &settings.fixtures_dir));

            let outcomes = check_path(shape, &path).with_context(|| format!("Failed to read {}", path.display()))?;
            let mut failed = 0usize;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(value) => {
                        let rendered = if settings.pretty { serde_json::to_string_pretty(value)? } else { value.to_string() };
                        println!("✅ {}\n{}", outcome.path.display(), rendered);
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("❌ {}: {}", outcome.path.display(), e);
                    }
                }
            }
            println!("{} checked, {} failed", outcomes.len(), failed);
            Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
