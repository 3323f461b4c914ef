// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        commit.rs (CommitExecutor)
//!              |
//!        stage.rs (StagingController)
//!              |
//!        query.rs (RepositoryState)
//!         /            \
//!        v              v
//!  repository.rs    backend (CommandRunner)
//!  RepositoryHandle  ShellRunner: git CLI
//!  root + .git       exit code + output lines
//! ```
//!
//! Everything is blocking. One repository must not be driven by two callers
//! at once: the index is shared state and a concurrent reset or stage would
//! leak into the other caller's commit.

pub mod backend;
pub mod commit;
pub mod query;
pub mod repository;
pub mod stage;

pub use backend::{CommandRunner, ShellRunner};
pub use commit::CommitExecutor;
pub use query::RepositoryState;
pub use repository::RepositoryHandle;
pub use stage::StagingController;

#[cfg(test)]
mod tests;
