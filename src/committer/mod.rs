// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Committer back-ends.
//!
//! ```text
//! CommitterFactory::open() --> AssetCommitter
//!        |                          |
//! GitCommitterFactory          GitCommitter
//!  Config + AuthorResolver      ReconciliationEngine<ShellRunner>
//!  verify root, locate git
//! ```
//!
//! The dispatcher only sees these two traits, so another version control
//! back-end can be slotted in without touching event handling.

use std::sync::Arc;

use crate::config::Config;
use crate::config::types::PushMode;
use crate::engine::author::AuthorResolver;
use crate::engine::{Outcome, ReconciliationEngine};
use crate::error::MirrorResult;
use crate::event::FileIdentity;
use crate::git::{CommandRunner, CommitExecutor, RepositoryHandle, RepositoryState, ShellRunner};

/// Records asset file events in a repository.
pub trait AssetCommitter {
    /// # Errors
    ///
    /// Back-end failures propagate.
    fn commit_file_creation(&mut self, file: &FileIdentity) -> MirrorResult<Outcome>;

    /// # Errors
    ///
    /// Back-end failures propagate.
    fn commit_file_deletion(&mut self, file: &FileIdentity) -> MirrorResult<Outcome>;

    /// # Errors
    ///
    /// Back-end failures propagate.
    fn commit_file_renaming(
        &mut self,
        old: &FileIdentity,
        new: &FileIdentity,
    ) -> MirrorResult<Outcome>;

    /// Whether any commit was made by this committer.
    fn has_pending_commits(&self) -> bool;

    /// Whether a push target is configured.
    fn is_pushing_enabled(&self) -> bool;

    fn push_mode(&self) -> PushMode;

    /// # Errors
    ///
    /// Fails if no push target is configured or the push fails.
    fn push_to_remote(&mut self) -> MirrorResult<()>;
}

/// Opens a committer on first use.
pub trait CommitterFactory {
    type Committer: AssetCommitter;

    /// # Errors
    ///
    /// Returns a `ConfigError` when the back-end is misconfigured.
    fn open(&mut self) -> MirrorResult<Self::Committer>;
}

impl<C, F> CommitterFactory for F
where
    C: AssetCommitter,
    F: FnMut() -> MirrorResult<C>,
{
    type Committer = C;

    fn open(&mut self) -> MirrorResult<C> {
        self()
    }
}

/// Git back-end.
pub struct GitCommitter<R = ShellRunner> {
    engine: ReconciliationEngine<R>,
}

impl<R: CommandRunner> GitCommitter<R> {
    pub fn new(engine: ReconciliationEngine<R>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &ReconciliationEngine<R> {
        &self.engine
    }
}

impl<R: CommandRunner> AssetCommitter for GitCommitter<R> {
    fn commit_file_creation(&mut self, file: &FileIdentity) -> MirrorResult<Outcome> {
        self.engine.handle_create(file)
    }

    fn commit_file_deletion(&mut self, file: &FileIdentity) -> MirrorResult<Outcome> {
        self.engine.handle_delete(file)
    }

    fn commit_file_renaming(
        &mut self,
        old: &FileIdentity,
        new: &FileIdentity,
    ) -> MirrorResult<Outcome> {
        self.engine.handle_rename(old, new)
    }

    fn has_pending_commits(&self) -> bool {
        self.engine.has_pending_commits()
    }

    fn is_pushing_enabled(&self) -> bool {
        self.engine.executor().push_target().is_some()
    }

    fn push_mode(&self) -> PushMode {
        self.engine.executor().mode()
    }

    fn push_to_remote(&mut self) -> MirrorResult<()> {
        self.engine.push_now()
    }
}

/// Builds a [`GitCommitter`] from configuration.
pub struct GitCommitterFactory {
    config: Config,
    resolver: Arc<dyn AuthorResolver>,
}

impl GitCommitterFactory {
    #[must_use]
    pub fn new(config: Config, resolver: Arc<dyn AuthorResolver>) -> Self {
        Self { config, resolver }
    }
}

impl CommitterFactory for GitCommitterFactory {
    type Committer = GitCommitter;

    fn open(&mut self) -> MirrorResult<GitCommitter> {
        let root = self.config.repository.root()?;
        let handle = RepositoryHandle::open(root)?;
        let runner = ShellRunner::new(&self.config.repository.git, handle.root())?;
        tracing::debug!(
            root = %handle.root().display(),
            git = %runner.git().display(),
            "opened repository"
        );

        let executor = CommitExecutor::new(self.config.push_target()?, self.config.push.mode);
        let engine = ReconciliationEngine::new(
            RepositoryState::new(handle, runner),
            executor,
            self.config.commit,
        )
        .with_author(self.config.author.clone(), Arc::clone(&self.resolver));
        Ok(GitCommitter::new(engine))
    }
}
