//! Command-line interface for tally
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::id::RandomIdGenerator;

mod add;
mod cl;
mod dump;
mod ls;
mod rm;
mod rpt;

/// tally - personal task ledger
///
/// Appends, lists, closes, removes, and reports on work items stored as
/// line-delimited JSON records in a per-user file.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ledger directory (defaults to ~/.tally)
    #[arg(long, global = true, env = "TALLY_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Create the task already closed
        #[arg(long)]
        closed: bool,

        /// Task description (words are joined with spaces)
        description: Vec<String>,
    },

    /// Display the task list
    Ls {
        /// Print full task IDs
        #[arg(short = 'l')]
        long: bool,

        /// Include closed tasks
        #[arg(short = 'a')]
        all: bool,
    },

    /// Close a task
    Cl {
        /// Unique prefix of the task ID
        id_prefix: String,
    },

    /// Remove a task
    Rm {
        /// Unique prefix of the task ID
        id_prefix: String,
    },

    /// Report tasks closed within a window
    Rpt {
        /// Number of days to look back
        #[arg(short = 'd')]
        days: Option<i64>,
    },

    /// Dump raw store file contents
    Dump {
        /// Output format (only "text" produces output)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let config = Config::resolve(self.dir)?;
        let mut stdout = io::stdout().lock();

        match self.command {
            Commands::Add {
                closed,
                description,
            } => add::run(
                add::AddOptions {
                    config,
                    closed,
                    description,
                },
                &mut RandomIdGenerator,
            ),
            Commands::Ls { long, all } => ls::run(
                ls::LsOptions {
                    config,
                    long_id: long,
                    show_all: all,
                },
                &mut stdout,
            ),
            Commands::Cl { id_prefix } => cl::run(cl::ClOptions { config, id_prefix }),
            Commands::Rm { id_prefix } => rm::run(rm::RmOptions { config, id_prefix }),
            Commands::Rpt { days } => rpt::run(rpt::RptOptions { config, days }, &mut stdout),
            Commands::Dump { format } => {
                dump::run(dump::DumpOptions { config, format }, &mut stdout)
            }
        }
    }
}
