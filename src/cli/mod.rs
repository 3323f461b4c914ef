// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitmirror-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitmirror [global options] <command>
//! created PATH
//! deleted PATH
//! renamed OLD NEW
//! apply FILE|-
//! push
//! options
//! config-files
//! version
//! ```

pub mod event;
pub mod global;


use crate::cli::event::{ApplyArgs, PathArgs, RenameArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Asset Store to Git Mirror
///
/// Records asset file events as git commits.
#[derive(Debug, Parser)]
#[command(
    name = "gitmirror",
    author,
    version,
    about = "Asset Store to Git Mirror",
    long_about = "gitmirror-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Records file creations, deletions and renames in an asset\n\
                  store as one git commit each, optionally pushing them.\n\n\
                  Call `gitmirror created <path>` after a file was written,\n\
                  `gitmirror deleted <path>` after it was removed and\n\
                  `gitmirror renamed <old> <new>` after it was moved. Each\n\
                  invocation is one unit of work; with push.mode = \"batch\"\n\
                  the commits it made are pushed once at the end.",
    after_help = "CONFIG FILES:\n\n\
                  gitmirror loads `gitmirror.toml` and `gitmirror.yaml` from the\n\
                  current directory if present, then every --config file in order.\n\
                  GITMIRROR_<SECTION>__<KEY> environment variables and --set\n\
                  options override values from files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration sources used.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Commits a newly created file.
    Created(PathArgs),

    /// Commits the deletion of a file.
    Deleted(PathArgs),

    /// Commits a renamed or moved file.
    Renamed(RenameArgs),

    /// Applies a JSON-lines batch of events.
    Apply(ApplyArgs),

    /// Pushes to the configured remote now.
    Push,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
