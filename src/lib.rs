//! rTimeTracker library root.
//! Exposes the session tracker, the log store, the prompt front end and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logstore;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands;
use crate::cli::parser::{Action, Cli, Prompt};
use crate::config::Config;
use crate::core::{Clock, TimeTracker};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::logstore::LogStore;
use crate::ui::messages::{error, header, warning};
use crate::utils::formatting::state_colour;
use crate::utils::path::{expand_tilde, resolve_save_location};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration shared by the prompt handlers.
pub struct AppContext {
    pub cfg: Config,
    /// File `cfg` was loaded from and is saved back to.
    pub config_path: PathBuf,
}

/// Whether the prompt keeps reading after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Central action dispatcher
pub fn dispatch<C: Clock>(
    action: &Action,
    app: &mut TimeTracker<C>,
    ctx: &mut AppContext,
) -> AppResult<Flow> {
    match action {
        Action::CheckIn => commands::checkin::handle(app)?,
        Action::Pause => commands::pause::handle(app)?,
        Action::Resume => commands::resume::handle(app)?,
        Action::End => commands::end::handle(app)?,
        Action::Location { path } => commands::location::handle(app, ctx, path)?,
        Action::Status => commands::status::handle(app)?,
        Action::Show => commands::show::handle(app)?,
        Action::Log => commands::log::handle(app)?,
        Action::Save => commands::save::handle(app)?,
        Action::Quit => {
            commands::quit::handle(app);
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn print_prompt<C: Clock>(app: &TimeTracker<C>) -> AppResult<()> {
    let state = app.state();
    let badge = state_colour(state.is_idle(), state.is_paused()).paint(format!("[{}]", state));
    print!("{} > ", badge);
    io::stdout().flush()?;
    Ok(())
}

/// Read actions from `input` until `quit` or end of input.
///
/// Errors from a single action are reported and the prompt goes on;
/// only I/O errors on `input` itself end the loop early.
pub fn run_prompt<R: BufRead, C: Clock>(
    input: R,
    app: &mut TimeTracker<C>,
    ctx: &mut AppContext,
) -> AppResult<()> {
    print_prompt(app)?;

    for line in input.lines() {
        let line = line?;

        match Prompt::parse_line(&line) {
            Ok(Some(action)) => match dispatch(&action, app, ctx) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            },
            Ok(None) => {}
            Err(e) => {
                // clap renders both help and usage errors
                if let Err(io_err) = e.print() {
                    error(io_err);
                }
            }
        }

        print_prompt(app)?;
    }

    println!();
    commands::quit::handle(app);
    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ --file overrides the configured location for this run only
    let save_location = cli.file.clone().unwrap_or_else(|| cfg.save_location.clone());
    let store = LogStore::new(resolve_save_location(&save_location));

    if cfg.startup_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(cfg.startup_delay_ms));
    }

    let mut app = TimeTracker::new(store);
    match DbPool::new(expand_tilde(&cfg.database)) {
        Ok(pool) => app = app.with_audit(pool),
        Err(e) => warning(format!("Internal log unavailable: {}", e)),
    }

    let mut ctx = AppContext { cfg, config_path };

    header("rTimeTracker");
    commands::status::handle(&app)?;
    println!("Type 'help' for the list of actions.\n");

    let stdin = io::stdin();
    run_prompt(stdin.lock(), &mut app, &mut ctx)
}
