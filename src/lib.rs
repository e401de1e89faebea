//! agenda - Personal Contact Agenda Library
//!
//! This library provides the core functionality for the agenda CLI: named
//! agendas stored as flat text files, each holding contact records with a
//! set of upcoming meeting dates.
//!
//! # Core Concepts
//!
//! - **Agenda**: one independent collection of contacts backed by one file
//! - **Contact**: name, phone, email, note and meeting-date set
//! - **Meeting dates**: an ascending, duplicate-free `dd/mm/yy` set
//! - **Cancel sentinel**: `0` abandons the current interactive operation
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `agenda.toml`
//! - `contact`: Contact records and the agenda line format
//! - `dates`: Meeting-date parsing and set merging
//! - `error`: Error types and result aliases
//! - `lookup`: Name lookup and disambiguation
//! - `output`: Human and JSON output for scripted commands
//! - `prompt`: Line-based prompt I/O
//! - `session`: Interactive agenda selection and menu handlers
//! - `store`: Agenda file storage
//! - `validate`: Field validation

pub mod cli;
pub mod config;
pub mod contact;
pub mod dates;
pub mod error;
pub mod lookup;
pub mod output;
pub mod prompt;
pub mod session;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
