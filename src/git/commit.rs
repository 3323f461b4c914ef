// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit and push.
//!
//! ```text
//! commit(msg, author)
//!   has_staged_changes? --no--> NothingToCommit
//!   git commit -m msg [--author A]
//!   commits += 1
//!   immediate && target? --> git push remote [branch]
//! ```
//!
//! A failed push leaves the commit in place and the counter unchanged.

use super::backend::CommandRunner;
use super::query::RepositoryState;
use crate::config::types::{PushMode, PushTarget};
use crate::error::{GitError, MirrorResult};

/// Commits staged changes and pushes them, counting commits per unit of work.
#[derive(Debug, Clone)]
pub struct CommitExecutor {
    target: Option<PushTarget>,
    mode: PushMode,
    commits: usize,
}

impl CommitExecutor {
    #[must_use]
    pub fn new(target: Option<PushTarget>, mode: PushMode) -> Self {
        Self {
            target,
            mode,
            commits: 0,
        }
    }

    #[must_use]
    pub fn push_target(&self) -> Option<&PushTarget> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> PushMode {
        self.mode
    }

    /// Commits made since construction.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    #[must_use]
    pub fn has_pending_commits(&self) -> bool {
        self.commits > 0
    }

    /// Commit what is staged, then push if configured to push immediately.
    ///
    /// `author` is passed as `--author` when present; otherwise git uses the
    /// repository's configured identity.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NothingToCommit` if nothing is staged, or the
    /// commit or push failure.
    pub fn commit<R: CommandRunner>(
        &mut self,
        state: &RepositoryState<R>,
        message: &str,
        author: Option<&str>,
    ) -> MirrorResult<()> {
        if !state.has_staged_changes()? {
            return Err(GitError::NothingToCommit.into());
        }

        let mut args = vec!["commit", "--quiet", "-m", message];
        if let Some(author) = author {
            args.extend(["--author", author]);
        }
        state.git(&args)?;
        self.commits += 1;

        let summary = message.lines().next().unwrap_or_default();
        tracing::info!(
            commit = self.commits,
            author = author.unwrap_or("<default>"),
            "{summary}"
        );

        if self.mode == PushMode::Immediate
            && let Some(target) = &self.target
        {
            Self::push(state, target)?;
        }
        Ok(())
    }

    /// Push to the configured target.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoPushTarget` if none is configured, or the push
    /// failure.
    pub fn push_now<R: CommandRunner>(&self, state: &RepositoryState<R>) -> MirrorResult<()> {
        let target = self.target.as_ref().ok_or(GitError::NoPushTarget)?;
        Self::push(state, target)
    }

    /// `git push remote [branch]`; without a branch the remote's default
    /// mapping for the current branch applies.
    ///
    /// # Errors
    ///
    /// Propagates the push failure.
    pub fn push<R: CommandRunner>(
        state: &RepositoryState<R>,
        target: &PushTarget,
    ) -> MirrorResult<()> {
        let mut args = vec!["push", "--quiet", target.remote()];
        if let Some(branch) = target.branch() {
            args.push(branch);
        }
        state.git(&args)?;
        tracing::info!(push_target = %target, "pushed");
        Ok(())
    }
}
