// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working tree and index predicates.
//!
//! ```text
//! is_ignored(p)        git check-ignore -q -- p        0 true / 1 false
//! is_tracked(p)        git ls-files --error-unmatch -- p  0 true / 1 false
//! has_staged_changes() git diff --cached --quiet       0 false / 1 true
//! ```
//!
//! Any other exit code propagates as `GitError::CommandFailed`.

use std::path::Path;

use super::backend::CommandRunner;
use super::repository::RepositoryHandle;
use crate::error::MirrorResult;

/// Queries against one repository, through one runner.
pub struct RepositoryState<R> {
    handle: RepositoryHandle,
    runner: R,
}

impl<R: CommandRunner> RepositoryState<R> {
    pub fn new(handle: RepositoryHandle, runner: R) -> Self {
        Self { handle, runner }
    }

    #[must_use]
    pub fn handle(&self) -> &RepositoryHandle {
        &self.handle
    }

    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run a git subcommand through the runner.
    ///
    /// # Errors
    ///
    /// Propagates runner errors unchanged.
    pub fn git(&self, args: &[&str]) -> MirrorResult<Vec<String>> {
        self.runner.execute(args)
    }

    /// Whether an ignore rule excludes `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` for exit codes other than 0 and 1.
    pub fn is_ignored(&self, path: &Path) -> MirrorResult<bool> {
        let arg = self.handle.display_path(path);
        let ignored = self.predicate(&["check-ignore", "-q", "--", &arg])?;
        tracing::trace!(path = %arg, ignored, "ignore check");
        Ok(ignored)
    }

    /// Whether `path` is in the index.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` for exit codes other than 0 and 1.
    pub fn is_tracked(&self, path: &Path) -> MirrorResult<bool> {
        let arg = self.handle.display_path(path);
        let tracked = self.predicate(&["ls-files", "--error-unmatch", "--", &arg])?;
        tracing::trace!(path = %arg, tracked, "tracked check");
        Ok(tracked)
    }

    /// Whether the index differs from the last commit.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` for exit codes other than 0 and 1.
    pub fn has_staged_changes(&self) -> MirrorResult<bool> {
        // diff --quiet inverts the convention: 1 means there are differences
        Ok(!self.predicate(&["diff", "--cached", "--quiet"])?)
    }

    /// Exit code 0 is `true`, 1 is `false`.
    fn predicate(&self, args: &[&str]) -> MirrorResult<bool> {
        match self.runner.execute(args) {
            Ok(_) => Ok(true),
            Err(err) if err.exit_code() == Some(1) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
