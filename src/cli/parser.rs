use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeTracker
#[derive(Parser, Debug)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in, pause, check out: every session is appended to a spreadsheet log",
    long_about = None
)]
pub struct Cli {
    /// Save sessions to this file for this run (overrides the configured location)
    #[arg(long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Use an alternative configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Prompt {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Start a new session
    #[command(name = "checkin", visible_aliases = ["in", "check-in"])]
    CheckIn,

    /// Pause the running session, or resume it when paused
    Pause,

    /// Resume the paused session
    Resume,

    /// Check out and append the session to the log
    #[command(visible_alias = "out")]
    End,

    /// Set the file sessions are saved to (no path: keep the current one)
    Location {
        #[arg(value_name = "PATH")]
        path: Vec<String>,
    },

    /// Show the current session and the available controls
    Status,

    /// Print the sessions stored in the log file
    Show,

    /// Print the internal log
    Log,

    /// Retry saving sessions that could not be written
    Save,

    /// Leave the program
    #[command(visible_alias = "exit")]
    Quit,
}

impl Prompt {
    /// Parse one input line; blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Action>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        Prompt::try_parse_from(words).map(|p| Some(p.action))
    }
}

