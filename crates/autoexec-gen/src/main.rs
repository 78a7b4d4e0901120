//! Dota 2 autoexec generator: entry point.
//!
//! Walks the user through the setting catalog and writes `autoexec.cfg`
//! into the game's `cfg` directory, keeping the previous file as
//! `old-autoexec.cfg`.
//!
//! # Usage
//!
//! ```text
//! autoexec-gen [OPTIONS]
//!
//! Options:
//!   --cfg-dir <DIR>     Write into DIR instead of auto-detecting [env: DOTA2_CFG_DIR]
//!   --catalog <FILE>    Load settings from a TOML catalog       [env: AUTOEXEC_CATALOG]
//!   --defaults          Accept every default without prompting
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (default `warn`, so it stays out of the way of the prompts).

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use autoexec_core::{Catalog, PROJECT_URL};
use autoexec_gen::application::collect_answers::{Prompt, Tone};
use autoexec_gen::application::generate::{GenerateAutoexecUseCase, BACKUP_FILE_NAME, CONFIG_FILE_NAME};
use autoexec_gen::infrastructure::locator::SteamLocator;
use autoexec_gen::infrastructure::prompt::{paint, DefaultsPrompt, TerminalPrompt};
use autoexec_gen::infrastructure::storage::catalog::load_catalog;
use autoexec_gen::infrastructure::writer::FsConfigWriter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Dota 2 autoexec generator.
///
/// Prompts for each setting, validates it against its range, and writes
/// autoexec.cfg into the detected (or chosen) Dota 2 cfg directory.
#[derive(Debug, Parser)]
#[command(
    name = "autoexec-gen",
    about = "Professional autoexec settings the easy way",
    version
)]
struct Cli {
    /// Directory to write autoexec.cfg into.
    ///
    /// Skips installation detection and the manual directory question.
    #[arg(long, env = "DOTA2_CFG_DIR")]
    cfg_dir: Option<PathBuf>,

    /// TOML file to read the setting catalog from instead of the built-in one.
    #[arg(long, env = "AUTOEXEC_CATALOG")]
    catalog: Option<PathBuf>,

    /// Accept every default without reading from stdin.
    #[arg(long)]
    defaults: bool,
}

impl Cli {
    /// Loads the catalog named by `--catalog`, or the built-in one.
    fn catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => load_catalog(path)
                .with_context(|| format!("could not load catalog from {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let catalog = cli.catalog()?;
    let cwd = std::env::current_dir().context("could not determine current directory")?;

    let color = std::io::stdout().is_terminal();
    println!("Dota 2 Autoexec Generator");
    println!("Professional autoexec settings the easy way\n");

    let mut prompt: Box<dyn Prompt> = if cli.defaults {
        Box::new(DefaultsPrompt::stdout())
    } else {
        Box::new(TerminalPrompt::stdio())
    };

    let locator = SteamLocator::for_current_platform();
    let writer = FsConfigWriter::new();
    let outcome = GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
        .run(prompt.as_mut(), cli.cfg_dir, &cwd)
        .context("autoexec generation failed")?;

    let report = outcome.report;
    if report.backup.is_some() {
        let notice = format!("Existing {CONFIG_FILE_NAME} renamed to {BACKUP_FILE_NAME}");
        println!("\n{}", paint(&notice, Tone::Warning, color));
    }
    let done = format!("✓ {CONFIG_FILE_NAME} generated successfully!");
    println!("{}", paint(&done, Tone::Success, color));
    println!("Location: {}", report.path.display());
    println!("Size: {} bytes", report.bytes);
    println!("{}", PROJECT_URL.trim_start_matches("https://"));
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
