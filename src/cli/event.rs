// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File event command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::event::Event;

/// Arguments for `created` and `deleted`.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// File path, relative to repository.base or absolute.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// The path is a folder (the event is skipped).
    #[arg(long)]
    pub folder: bool,
}

/// Arguments for `renamed`.
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Path before the rename.
    #[arg(value_name = "OLD")]
    pub old_path: PathBuf,

    /// Path after the rename.
    #[arg(value_name = "NEW")]
    pub new_path: PathBuf,

    /// The paths are folders (the event is skipped).
    #[arg(long)]
    pub folder: bool,
}

/// Arguments for `apply`.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// JSON-lines event file, or '-' for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

impl ApplyArgs {
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

impl PathArgs {
    #[must_use]
    pub fn created(&self) -> Event {
        Event::Created {
            path: self.path.clone(),
            folder: self.folder,
        }
    }

    #[must_use]
    pub fn deleted(&self) -> Event {
        Event::Deleted {
            path: self.path.clone(),
            folder: self.folder,
        }
    }
}

impl From<&RenameArgs> for Event {
    fn from(args: &RenameArgs) -> Self {
        Self::Renamed {
            old_path: args.old_path.clone(),
            new_path: args.new_path.clone(),
            folder: args.folder,
        }
    }
}
