//! Command-line interface for agenda
//!
//! This module defines the CLI structure using clap derive macros.
//! Running without a subcommand opens the interactive menu; the other
//! subcommands give scripted access to the same agenda files.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputOptions;
use crate::store::{validate_agenda_name, AgendaStore};

mod agendas;
mod contact;
mod shell;
mod view;

/// agenda - personal contact and meeting-date manager
///
/// Keeps contacts (name, phone, email, note, meeting dates) in plain text
/// agenda files, one contact per line.
#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the agenda files (defaults to current directory)
    #[arg(long, global = true, env = "AGENDA_DIR")]
    pub dir: Option<PathBuf>,

    /// Agenda to open (file name without extension)
    #[arg(long, global = true, env = "AGENDA_NAME")]
    pub agenda: Option<String>,

    /// Configuration file (defaults to agenda.toml in the agenda directory)
    #[arg(long, global = true, env = "AGENDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Shell {
        /// Create the agenda named by --agenda if it does not exist
        #[arg(long)]
        create: bool,
    },

    /// List every contact in the agenda
    List,

    /// Show contacts whose name contains a fragment
    Search {
        /// Part of the name, case-insensitive
        fragment: String,
    },

    /// Add a new contact
    Add {
        /// Given name and family name
        #[arg(long)]
        name: String,

        /// Phone number (8 digits)
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Short note or description
        #[arg(long, default_value = "")]
        note: String,

        /// Next meeting date (dd/mm/yy)
        #[arg(long)]
        date: String,
    },

    /// Add or replace a meeting date on a contact
    Meet {
        /// Name or part of the name of the contact
        fragment: String,

        /// Meeting date (dd/mm/yy)
        #[arg(long)]
        date: String,

        /// Replace all existing dates instead of adding to them
        #[arg(long)]
        replace: bool,
    },

    /// List the agendas in the agenda directory
    Agendas,
}

/// Settings shared by every subcommand after config resolution
#[derive(Debug, Clone)]
pub struct Context {
    pub dir: PathBuf,
    pub config: Config,
    pub agenda: Option<String>,
    pub output: OutputOptions,
}

impl Context {
    fn resolve(cli: &Cli) -> Result<Self> {
        let start = cli
            .dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let config = Config::resolve(cli.config.as_deref(), &start)?;

        let dir = match (&cli.dir, &config.dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(configured)) => start.join(configured),
            (None, None) => start,
        };
        let agenda = cli
            .agenda
            .clone()
            .or_else(|| config.default_agenda.clone());

        Ok(Self {
            dir,
            config,
            agenda,
            output: OutputOptions {
                json: cli.json,
                quiet: cli.quiet,
            },
        })
    }

    /// Handle for the selected agenda without checking that it exists
    pub fn agenda_store(&self) -> Result<AgendaStore> {
        let name = self.agenda.as_deref().ok_or(Error::NoAgendaSelected)?;
        let name = validate_agenda_name(name)?;
        Ok(AgendaStore::open(&self.dir, name))
    }

    /// Handle for the selected agenda, which must already exist
    pub fn existing_store(&self) -> Result<AgendaStore> {
        let store = self.agenda_store()?;
        if !store.exists() {
            return Err(Error::AgendaNotFound(store.path().to_path_buf()));
        }
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = Context::resolve(&self)?;
        tracing::debug!(dir = %ctx.dir.display(), agenda = ?ctx.agenda, "resolved context");

        match self.command.unwrap_or(Commands::Shell { create: false }) {
            Commands::Shell { create } => shell::run(&ctx, create),
            Commands::List => view::run_list(&ctx),
            Commands::Search { fragment } => view::run_search(&ctx, &fragment),
            Commands::Add {
                name,
                phone,
                email,
                note,
                date,
            } => contact::run_add(
                &ctx,
                contact::AddOptions {
                    name,
                    phone,
                    email,
                    note,
                    date,
                },
            ),
            Commands::Meet {
                fragment,
                date,
                replace,
            } => contact::run_meet(
                &ctx,
                contact::MeetOptions {
                    fragment,
                    date,
                    replace,
                },
            ),
            Commands::Agendas => agendas::run(&ctx),
        }
    }
}
