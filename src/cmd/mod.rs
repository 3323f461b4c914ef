// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   event (created, deleted, renamed, apply), push, config
//! ```

pub mod config;
pub mod event;
pub mod push;


use std::sync::Arc;

use crate::committer::GitCommitterFactory;
use crate::config::Config;
use crate::engine::author::{AuthorResolver, NoAuthor, StaticAuthor};
use crate::error::Result;
use crate::event::Dispatcher;

/// The current user from `--author-name` / `--author-email`, if any.
#[must_use]
pub fn author_resolver(name: Option<String>, email: Option<String>) -> Arc<dyn AuthorResolver> {
    match StaticAuthor::from_parts(name, email) {
        Some(author) => Arc::new(author),
        None => Arc::new(NoAuthor),
    }
}

/// A dispatcher over the configured git repository. Nothing is opened yet.
///
/// # Errors
///
/// Returns an error if the base directory cannot be determined.
pub fn git_dispatcher(
    config: &Config,
    resolver: Arc<dyn AuthorResolver>,
) -> Result<Dispatcher<GitCommitterFactory>> {
    let base = config.repository.base_dir()?;
    let factory = GitCommitterFactory::new(config.clone(), resolver);
    let dispatcher = Dispatcher::new(factory, base);
    Ok(dispatcher.with_deduplication(config.events.deduplicate))
}
