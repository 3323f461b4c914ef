// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Index manipulation. Never touches working tree files.

use std::path::Path;

use super::backend::CommandRunner;
use super::query::RepositoryState;
use crate::error::MirrorResult;

/// Stages the paths of one event on top of a clean index.
pub struct StagingController<'a, R> {
    state: &'a RepositoryState<R>,
}

impl<'a, R: CommandRunner> StagingController<'a, R> {
    pub fn new(state: &'a RepositoryState<R>) -> Self {
        Self { state }
    }

    /// Unstage everything if anything is staged; a no-op otherwise.
    ///
    /// `reset --mixed` resets the index only, working tree files keep their
    /// content.
    ///
    /// # Errors
    ///
    /// Propagates git failures.
    pub fn reset_stage(&self) -> MirrorResult<()> {
        if self.state.has_staged_changes()? {
            tracing::debug!("discarding leftover staged changes");
            self.state.git(&["reset", "--mixed", "--quiet"])?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates git failures.
    pub fn stage_add(&self, path: &Path) -> MirrorResult<()> {
        let arg = self.state.handle().display_path(path);
        tracing::debug!(path = %arg, "stage add");
        self.state.git(&["add", "--", &arg])?;
        Ok(())
    }

    /// Remove `path` from the index only; the file is normally already gone
    /// from the working tree.
    ///
    /// # Errors
    ///
    /// Propagates git failures.
    pub fn stage_remove(&self, path: &Path) -> MirrorResult<()> {
        let arg = self.state.handle().display_path(path);
        tracing::debug!(path = %arg, "stage remove");
        self.state.git(&["rm", "--cached", "--quiet", "--", &arg])?;
        Ok(())
    }
}
