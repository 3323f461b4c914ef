// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository location configuration.
//!
//! ```text
//! base/              (asset store root, default: cwd)
//!   assets/          (repository.path, relative to base)
//!     .git/
//!     Uploads/a.txt  (event paths resolve against base)
//! ```
//!
//! Relative paths are resolved against `base`; `base` itself resolves against
//! the current directory.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Repository and base directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Working tree root, relative to `base` unless absolute.
    pub path: PathBuf,
    /// Directory relative event paths resolve against (default: cwd).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,
    /// Git executable, name or path.
    pub git: PathBuf,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets"),
            base: None,
            git: PathBuf::from("git"),
        }
    }
}

impl RepositoryConfig {
    /// Absolute base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn base_dir(&self) -> std::io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.base {
            Some(base) => normalize(&cwd.join(base)),
            None => cwd,
        })
    }

    /// Absolute repository root (not checked for existence).
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn root(&self) -> std::io::Result<PathBuf> {
        Ok(normalize(&self.base_dir()?.join(&self.path)))
    }
}

/// Fold `.` and `..` components lexically without touching the filesystem.
///
/// Event paths may point at files that no longer exist, so `canonicalize` is
/// not an option.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
