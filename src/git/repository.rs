// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Verified working tree root.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, MirrorResult};

/// A working tree whose root exists and contains a `.git` entry.
///
/// Immutable once opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    root: PathBuf,
}

impl RepositoryHandle {
    /// Verify `root` and wrap it.
    ///
    /// `.git` may be a directory or, for linked worktrees and submodules, a
    /// file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotADirectory` if `root` is empty or not an
    /// existing directory, `ConfigError::NotARepository` if it has no `.git`.
    pub fn open(root: impl Into<PathBuf>) -> MirrorResult<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() || !root.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: root.display().to_string(),
            }
            .into());
        }
        if !root.join(".git").exists() {
            return Err(ConfigError::NotARepository {
                path: root.display().to_string(),
            }
            .into());
        }
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the root with `/` separators, or the full path when
    /// it lies outside the root.
    ///
    /// Used both as the git argument (git runs in the root) and in commit
    /// messages.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
            Ok(relative) => relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.display().to_string(),
        }
    }
}
