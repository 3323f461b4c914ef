// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message composition.
//!
//! ```text
//! Create file {path}.
//! Delete file {path}.
//! {Rename|Move} file {old} to {new}.
//! <note>                         (rename only, on its own line)
//! ```

use std::fmt;
use std::path::Path;

/// `Rename` within one directory, `Move` across directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameVerb {
    Rename,
    Move,
}

impl RenameVerb {
    /// Compare parent directories; only the message depends on this.
    #[must_use]
    pub fn between(old: &Path, new: &Path) -> Self {
        if old.parent() == new.parent() {
            Self::Rename
        } else {
            Self::Move
        }
    }
}

impl fmt::Display for RenameVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename => f.write_str("Rename"),
            Self::Move => f.write_str("Move"),
        }
    }
}

/// Why a rename commit does not look like a plain rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameNote {
    /// Tracked file moved to an ignored name: committed as a deletion.
    NewNameIgnored,
    /// Old name was ignored: committed as an addition.
    OldNameIgnored,
    /// Old name existed on disk but was never committed: committed as an addition.
    OldNameNotCommitted,
}

impl RenameNote {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::NewNameIgnored => {
                "The new filename is excluded by a .gitignore file, so only a deletion is committed."
            }
            Self::OldNameIgnored => {
                "The previous filename was excluded by a .gitignore file, so it appears as a new \
                 file in this commit."
            }
            Self::OldNameNotCommitted => {
                "The file was not previously committed in the repository, although it did exist \
                 in the filesystem, so it appears as a new file in this commit."
            }
        }
    }
}

#[must_use]
pub fn creation(path: &str) -> String {
    format!("Create file {path}.")
}

#[must_use]
pub fn deletion(path: &str) -> String {
    format!("Delete file {path}.")
}

#[must_use]
pub fn renaming(verb: RenameVerb, old: &str, new: &str, note: Option<RenameNote>) -> String {
    let base = format!("{verb} file {old} to {new}.");
    match note {
        Some(note) => format!("{base}\n{}", note.text()),
        None => base,
    }
}
