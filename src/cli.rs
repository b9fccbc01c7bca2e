//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use folio::build_info;

/// A themed portfolio viewer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "folio", version, long_version = build_info::cli_version_text())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ./folio.toml or ~/.config/folio/folio.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Initial theme mode (dark or light), overriding the config file.
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one section (hero, about, experience, skills, projects,
    /// contact, resume, footer) and exit.
    Show { section: String },

    /// Interactive viewer: `t` toggles the theme, `q` quits.
    Watch,

    /// Dump the derived theme as a JSON token document.
    Tokens {
        /// Pretty-print the JSON.
        #[arg(long = "pretty")]
        pretty: bool,
    },

    /// Validate and submit the contact form (delivery is simulated).
    Contact {
        #[arg(long = "name")]
        name: String,
        #[arg(long = "email")]
        email: String,
        #[arg(long = "message")]
        message: String,
    },
}
