// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `push` command.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::author::AuthorResolver;
use crate::error::Result;

use super::git_dispatcher;

/// Push to the configured target, whether or not anything was committed by
/// this process.
///
/// # Errors
///
/// Returns an error if the repository is misconfigured, no push target is
/// configured, or the push fails.
pub fn run_push_command(config: &Config, resolver: Arc<dyn AuthorResolver>) -> Result<()> {
    let mut dispatcher = git_dispatcher(config, resolver)?;
    dispatcher.flush_push()?;
    println!("pushed");
    Ok(())
}
