use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use npmsweep::{
    config::Config,
    output::{render_npm_missing, render_summary},
    run_audit, AuditRequest, AuditStatus, NpmCli,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "npmsweep")]
#[command(
    author,
    version,
    about = "Compare installed npm packages to a list of compromised packages"
)]
struct Cli {
    /// Path to the compromised packages CSV (must include a 'package_name' or 'name' column)
    #[arg(long, value_name = "PATH")]
    csv: PathBuf,

    /// Directories to search recursively for local projects (package.json)
    #[arg(long, num_args = 0.., value_name = "PATH")]
    roots: Vec<PathBuf>,

    /// Write the findings report here instead of the default location
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug details, including package listings that failed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("[!] {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let roots = if cli.roots.is_empty() {
        config.default_roots
    } else {
        cli.roots
    };

    let request = AuditRequest {
        compromised_list: cli.csv,
        roots,
        report_path: cli.report.unwrap_or(config.report_path),
    };

    let npm = NpmCli::new(config.npm_command);
    let progress = project_progress();
    let outcome = run_audit(&request, &npm, &progress)?;

    match outcome.status {
        AuditStatus::PackageManagerMissing => {
            print!("{}", render_npm_missing(&outcome.report_path));
        }
        AuditStatus::Completed => {
            print!(
                "{}",
                render_summary(&outcome.findings, &outcome.report_path, outcome.completed_at)
            );
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Progress bar over scanned projects. Drawn to stderr, hidden when stderr
/// is not a terminal.
fn project_progress() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
