mod commands;
mod error;
mod session;
mod util;
mod view;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use crate::view::ConsoleView;
use phonebook_config as config;
use phonebook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Contact book assistant")]
struct Cli {
    /// Snapshot file holding the contacts
    #[arg(long)]
    data_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = data_path.or_else(|| app_config.data_path.clone());
    let data_path =
        paths::resolve_snapshot_path(data_path).with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let store = Store::open(&data_path);
    let mut book = store
        .load(app_config.duplicate_names)
        .with_context(|| format!("load contacts from {}", data_path.display()))?;
    debug!(contacts = book.len(), "contacts loaded");

    let ctx = Context::new(&app_config);
    let mut view = ConsoleView::stdio();
    let outcome = session::run(&mut view, &ctx, &mut book);

    let saved = store.save(&book);
    match &saved {
        Ok(()) => debug!(contacts = book.len(), path = %data_path.display(), "contacts saved"),
        Err(err) => warn!(error = %err, "failed to save contacts"),
    }
    outcome.with_context(|| "read commands")?;
    saved.with_context(|| format!("save contacts to {}", data_path.display()))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
