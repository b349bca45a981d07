//! RBAC Shell
//!
//! An in-memory role-based access control engine driven by a command shell.

use clap::Parser;
use rbac_shell::{
    Shell,
    config::{LogFormat, LoggingConfig, load_config, validate_log_level},
};
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// RBAC Shell - declare roles and permissions, then check access
#[derive(Parser, Debug)]
#[command(name = "rbac-shell")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "RBAC_SHELL_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RBAC_SHELL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Read commands from a file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Prompt shown in interactive mode
    #[arg(long)]
    prompt: Option<String>,

    /// Do not print the banner
    #[arg(long)]
    no_banner: bool,
}

fn init_logging(logging: &LoggingConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout carries only shell output
    match logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging, which depends on it
    let mut config = load_config(args.config.as_deref())?;
    if let Some(level) = args.log_level.as_deref() {
        validate_log_level(level)?;
    }

    init_logging(&config.logging, args.log_level.as_deref());

    info!(version = env!("CARGO_PKG_VERSION"), "Starting RBAC shell");

    if let Some(prompt) = args.prompt {
        config.shell.prompt = prompt;
    }
    if args.no_banner {
        config.shell.banner = false;
    }

    if let Some(path) = args.script {
        let file = File::open(&path)
            .inspect_err(|e| error!(error = %e, path = %path.display(), "Failed to open script"))?;
        // Script output stays free of the banner
        config.shell.banner = false;
        let mut shell = Shell::new(config.shell);
        shell.run(BufReader::new(file), std::io::stdout().lock())?;
        return Ok(());
    }

    let mut shell = Shell::new(config.shell);
    if std::io::stdin().is_terminal() {
        shell
            .run_interactive()
            .inspect_err(|e| error!(error = %e, "Interactive session failed"))?;
    } else {
        shell.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    }

    Ok(())
}
