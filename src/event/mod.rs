// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Embedder-facing event boundary.
//!
//! ```text
//! Event (paths as given)
//!   |  resolve against base  -> FileIdentity (InvalidArgument if empty)
//!   |  folder?               -> Skipped(Folder)
//!   |  same as previous?     -> Skipped(Duplicate)
//!   v
//! Dispatcher --lazy open--> CommitterFactory --> AssetCommitter
//!   |
//! finish(): pushing enabled && batch mode && pending commits -> push
//! ```
//!
//! One dispatcher is one unit of work (a request, a CLI invocation).

pub mod batch;
pub mod identity;


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::committer::{AssetCommitter, CommitterFactory};
use crate::config::types::PushMode;
use crate::engine::{Outcome, SkipReason};
use crate::error::MirrorResult;
use crate::logging::event_span;

pub use identity::FileIdentity;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A file lifecycle event as reported by the asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Event {
    Created {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "is_false")]
        folder: bool,
    },
    Deleted {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "is_false")]
        folder: bool,
    },
    Renamed {
        old_path: PathBuf,
        new_path: PathBuf,
        #[serde(default, skip_serializing_if = "is_false")]
        folder: bool,
    },
}

impl Event {
    pub fn created(path: impl Into<PathBuf>) -> Self {
        Self::Created {
            path: path.into(),
            folder: false,
        }
    }

    pub fn deleted(path: impl Into<PathBuf>) -> Self {
        Self::Deleted {
            path: path.into(),
            folder: false,
        }
    }

    pub fn renamed(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> Self {
        Self::Renamed {
            old_path: old_path.into(),
            new_path: new_path.into(),
            folder: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Deleted { .. } => "deleted",
            Self::Renamed { .. } => "renamed",
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        match self {
            Self::Created { folder, .. }
            | Self::Deleted { folder, .. }
            | Self::Renamed { folder, .. } => *folder,
        }
    }
}

/// An event with its paths resolved; also the deduplication key.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolved {
    Created(FileIdentity),
    Deleted(FileIdentity),
    Renamed(FileIdentity, FileIdentity),
}

impl Resolved {
    fn new(event: &Event, base: &Path) -> MirrorResult<Self> {
        Ok(match event {
            Event::Created { path, .. } => Self::Created(FileIdentity::new(path, base)?),
            Event::Deleted { path, .. } => Self::Deleted(FileIdentity::new(path, base)?),
            Event::Renamed {
                old_path, new_path, ..
            } => Self::Renamed(
                FileIdentity::new(old_path, base)?,
                FileIdentity::new(new_path, base)?,
            ),
        })
    }

    /// The path that exists on disk after the event, if any.
    fn current(&self) -> Option<&FileIdentity> {
        match self {
            Self::Created(file) | Self::Renamed(_, file) => Some(file),
            Self::Deleted(_) => None,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Created(file) | Self::Deleted(file) => file.to_string(),
            Self::Renamed(old, new) => format!("{old} -> {new}"),
        }
    }
}

/// Routes events to a lazily opened committer.
pub struct Dispatcher<F: CommitterFactory> {
    factory: F,
    committer: Option<F::Committer>,
    base: PathBuf,
    deduplicate: bool,
    previous: Option<Resolved>,
}

impl<F: CommitterFactory> Dispatcher<F> {
    /// `base` is what relative event paths resolve against.
    pub fn new(factory: F, base: impl Into<PathBuf>) -> Self {
        Self {
            factory,
            committer: None,
            base: base.into(),
            deduplicate: true,
            previous: None,
        }
    }

    #[must_use]
    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub fn on_file_created(&mut self, path: impl Into<PathBuf>) -> MirrorResult<Outcome> {
        self.dispatch(&Event::created(path))
    }

    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub fn on_file_deleted(&mut self, path: impl Into<PathBuf>) -> MirrorResult<Outcome> {
        self.dispatch(&Event::deleted(path))
    }

    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub fn on_file_renamed(
        &mut self,
        old_path: impl Into<PathBuf>,
        new_path: impl Into<PathBuf>,
    ) -> MirrorResult<Outcome> {
        self.dispatch(&Event::renamed(old_path, new_path))
    }

    /// Handle one event.
    ///
    /// A failed event is not remembered for deduplication, so it can be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for unusable paths, a `ConfigError` if the
    /// committer cannot be opened, and committer failures.
    pub fn dispatch(&mut self, event: &Event) -> MirrorResult<Outcome> {
        let resolved = Resolved::new(event, &self.base)?;
        let span = event_span(event.kind(), &resolved.label());
        let _entered = span.enter();

        if event.is_folder() || resolved.current().is_some_and(|f| f.as_path().is_dir()) {
            tracing::info!("skipped: {}", SkipReason::Folder);
            return Ok(Outcome::Skipped(SkipReason::Folder));
        }
        if self.deduplicate && self.previous.as_ref() == Some(&resolved) {
            tracing::info!("skipped: {}", SkipReason::Duplicate);
            return Ok(Outcome::Skipped(SkipReason::Duplicate));
        }

        let committer = self.committer()?;
        let outcome = match &resolved {
            Resolved::Created(file) => committer.commit_file_creation(file)?,
            Resolved::Deleted(file) => committer.commit_file_deletion(file)?,
            Resolved::Renamed(old, new) => committer.commit_file_renaming(old, new)?,
        };
        if let Outcome::Skipped(reason) = &outcome {
            tracing::info!("skipped: {reason}");
        }

        self.previous = Some(resolved);
        Ok(outcome)
    }

    /// Whether anything was committed; `false` if the committer was never
    /// opened.
    #[must_use]
    pub fn has_pending_commits(&self) -> bool {
        self.committer
            .as_ref()
            .is_some_and(AssetCommitter::has_pending_commits)
    }

    /// Push now, regardless of mode or pending commits.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the committer cannot be opened,
    /// `NoPushTarget`, or the push failure.
    pub fn flush_push(&mut self) -> MirrorResult<()> {
        self.committer()?.push_to_remote()
    }

    /// End the unit of work: push once if pushing is enabled in batch mode
    /// and something was committed. Returns whether a push happened.
    ///
    /// # Errors
    ///
    /// Propagates the push failure.
    pub fn finish(&mut self) -> MirrorResult<bool> {
        let Some(committer) = self.committer.as_mut() else {
            return Ok(false);
        };
        if committer.is_pushing_enabled()
            && committer.push_mode() == PushMode::Batch
            && committer.has_pending_commits()
        {
            committer.push_to_remote()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn committer(&mut self) -> MirrorResult<&mut F::Committer> {
        let committer = match self.committer.take() {
            Some(committer) => committer,
            None => self.factory.open()?,
        };
        Ok(self.committer.insert(committer))
    }
}
