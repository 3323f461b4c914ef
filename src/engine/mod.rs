// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit reconciliation.
//!
//! Decides, for one file event and the current index, which paths to stage
//! and what the commit says.
//!
//! ```text
//! handle_create(f)   enabled? -> ignored(f)? skip -> reset -> add f
//! handle_delete(f)   enabled? -> !tracked(f)? skip -> reset -> rm f
//! handle_rename(a,b) enabled? -> reset -> ignored(a), ignored(b), tracked(a)
//!
//!   tracked(a)  ignored(b)   ops            note
//!   ----------  ----------   -------------  ---------------------
//!   yes         yes          rm a           NewNameIgnored
//!   yes         no           rm a, add b    -
//!   no          yes          (skip)
//!   no          no           add b          OldNameIgnored if ignored(a)
//!                                           else OldNameNotCommitted
//!
//! every commit: staged? else NothingToCommit -> commit -> count -> push?
//! ```
//!
//! The stage is reset before each event, never after: a failed commit leaves
//! its staged paths for the next event's reset to discard.

pub mod author;
pub mod message;


use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::config::types::{AuthorConfig, CommitToggles};
use crate::error::MirrorResult;
use crate::event::FileIdentity;
use crate::git::{CommandRunner, CommitExecutor, RepositoryState, StagingController};

use author::{AuthorResolver, NoAuthor, commit_author};
use message::{RenameNote, RenameVerb};

bitflags! {
    /// Index operations a rename turns into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenameOps: u8 {
        const REMOVE_OLD = 1 << 0;
        const ADD_NEW = 1 << 1;
    }
}

/// Why an event produced no commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Commits for this kind of event are turned off.
    Disabled,
    /// The created file is excluded by an ignore rule.
    Ignored,
    /// The deleted file was never committed.
    Untracked,
    /// Renamed from an uncommitted name to an ignored one.
    NothingToRecord,
    /// The event concerns a folder.
    ///
    /// A deleted folder no longer exists on disk, so it is only recognized
    /// when the event carries the folder flag. Without the flag the path
    /// reaches `git rm --cached`, which refuses a directory (exit 128).
    Folder,
    /// Same event as the one right before it.
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "commits disabled for this event",
            Self::Ignored => "path is ignored",
            Self::Untracked => "path is not tracked",
            Self::NothingToRecord => "old path untracked and new path ignored",
            Self::Folder => "folders are not supported",
            Self::Duplicate => "duplicate of the previous event",
        })
    }
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed { message: String },
    Skipped(SkipReason),
}

impl Outcome {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Turns file events into commits on one repository.
pub struct ReconciliationEngine<R> {
    state: RepositoryState<R>,
    executor: CommitExecutor,
    toggles: CommitToggles,
    author: AuthorConfig,
    resolver: Arc<dyn AuthorResolver>,
}

impl<R: CommandRunner> ReconciliationEngine<R> {
    /// An engine that never passes `--author`; see [`Self::with_author`].
    pub fn new(
        state: RepositoryState<R>,
        executor: CommitExecutor,
        toggles: CommitToggles,
    ) -> Self {
        Self {
            state,
            executor,
            toggles,
            author: AuthorConfig::default(),
            resolver: Arc::new(NoAuthor),
        }
    }

    #[must_use]
    pub fn with_author(mut self, config: AuthorConfig, resolver: Arc<dyn AuthorResolver>) -> Self {
        self.author = config;
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn executor(&self) -> &CommitExecutor {
        &self.executor
    }

    #[must_use]
    pub fn has_pending_commits(&self) -> bool {
        self.executor.has_pending_commits()
    }

    /// Push to the configured target now.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoPushTarget` or the push failure.
    pub fn push_now(&self) -> MirrorResult<()> {
        self.executor.push_now(&self.state)
    }

    /// Commit a newly created file unless it is ignored.
    ///
    /// # Errors
    ///
    /// Propagates git failures and `NothingToCommit`.
    pub fn handle_create(&mut self, file: &FileIdentity) -> MirrorResult<Outcome> {
        if !self.toggles.file_creations {
            return Ok(Outcome::Skipped(SkipReason::Disabled));
        }
        // Ignored files are never force-added
        if self.state.is_ignored(file.as_path())? {
            return Ok(Outcome::Skipped(SkipReason::Ignored));
        }

        let staging = StagingController::new(&self.state);
        staging.reset_stage()?;
        staging.stage_add(file.as_path())?;

        let message = message::creation(&self.display(file));
        self.commit(message)
    }

    /// Commit the removal of a tracked file.
    ///
    /// # Errors
    ///
    /// Propagates git failures and `NothingToCommit`.
    pub fn handle_delete(&mut self, file: &FileIdentity) -> MirrorResult<Outcome> {
        if !self.toggles.file_deletions {
            return Ok(Outcome::Skipped(SkipReason::Disabled));
        }
        if !self.state.is_tracked(file.as_path())? {
            return Ok(Outcome::Skipped(SkipReason::Untracked));
        }

        let staging = StagingController::new(&self.state);
        staging.reset_stage()?;
        staging.stage_remove(file.as_path())?;

        let message = message::deletion(&self.display(file));
        self.commit(message)
    }

    /// Commit a rename or move as remove and add.
    ///
    /// The old file is already gone from disk, so `git mv` is not an option;
    /// git pairs the two sides by content when showing history.
    ///
    /// # Errors
    ///
    /// Propagates git failures and `NothingToCommit`.
    pub fn handle_rename(
        &mut self,
        old: &FileIdentity,
        new: &FileIdentity,
    ) -> MirrorResult<Outcome> {
        if !self.toggles.file_renamings {
            return Ok(Outcome::Skipped(SkipReason::Disabled));
        }

        let staging = StagingController::new(&self.state);
        staging.reset_stage()?;

        let old_ignored = self.state.is_ignored(old.as_path())?;
        let new_ignored = self.state.is_ignored(new.as_path())?;
        let old_tracked = self.state.is_tracked(old.as_path())?;

        let Some((ops, note)) = plan_rename(old_tracked, old_ignored, new_ignored) else {
            return Ok(Outcome::Skipped(SkipReason::NothingToRecord));
        };
        tracing::debug!(?ops, ?note, "rename plan");

        if ops.contains(RenameOps::REMOVE_OLD) {
            staging.stage_remove(old.as_path())?;
        }
        if ops.contains(RenameOps::ADD_NEW) {
            staging.stage_add(new.as_path())?;
        }

        let verb = RenameVerb::between(old.as_path(), new.as_path());
        let message = message::renaming(verb, &self.display(old), &self.display(new), note);
        self.commit(message)
    }

    fn commit(&mut self, message: String) -> MirrorResult<Outcome> {
        let author = commit_author(&self.author, self.resolver.as_ref())?;
        self.executor
            .commit(&self.state, &message, author.as_deref())?;
        Ok(Outcome::Committed { message })
    }

    fn display(&self, file: &FileIdentity) -> String {
        self.state.handle().display_path(file.as_path())
    }
}

/// Staging operations and message note for a rename, `None` when there is
/// nothing to record.
#[must_use]
pub fn plan_rename(
    old_tracked: bool,
    old_ignored: bool,
    new_ignored: bool,
) -> Option<(RenameOps, Option<RenameNote>)> {
    match (old_tracked, new_ignored) {
        (true, true) => Some((RenameOps::REMOVE_OLD, Some(RenameNote::NewNameIgnored))),
        (true, false) => Some((RenameOps::REMOVE_OLD | RenameOps::ADD_NEW, None)),
        (false, true) => None,
        (false, false) if old_ignored => {
            Some((RenameOps::ADD_NEW, Some(RenameNote::OldNameIgnored)))
        }
        (false, false) => Some((RenameOps::ADD_NEW, Some(RenameNote::OldNameNotCommitted))),
    }
}
