// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit author resolution.
//!
//! ```text
//! automatic off ---------------------> no --author
//! resolver: no current user ---------> no --author
//! resolver: user {name, email}
//!   empty field -> configured fallback (empty fallback: EmptyFallback)
//!   --author "name <email>"
//! ```
//!
//! Both fields are always filled so git never treats the value as a pattern
//! to search previous commits with.

use std::fmt;

use crate::config::types::AuthorConfig;
use crate::error::{ConfigError, MirrorResult};

/// A commit author.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Supplies the user on whose behalf files are changed.
pub trait AuthorResolver: Send + Sync {
    /// The current user, or `None` when there is no user context.
    fn current_author(&self) -> Option<Author>;
}

/// No user context; git picks its configured identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthor;

impl AuthorResolver for NoAuthor {
    fn current_author(&self) -> Option<Author> {
        None
    }
}

/// A fixed user, e.g. from command line flags.
#[derive(Debug, Clone)]
pub struct StaticAuthor(Author);

impl StaticAuthor {
    #[must_use]
    pub fn new(author: Author) -> Self {
        Self(author)
    }

    /// A user if either field is given.
    #[must_use]
    pub fn from_parts(name: Option<String>, email: Option<String>) -> Option<Self> {
        if name.is_none() && email.is_none() {
            return None;
        }
        Some(Self(Author::new(
            name.unwrap_or_default(),
            email.unwrap_or_default(),
        )))
    }
}

impl AuthorResolver for StaticAuthor {
    fn current_author(&self) -> Option<Author> {
        Some(self.0.clone())
    }
}

/// The `--author` value for the next commit.
///
/// # Errors
///
/// Returns `ConfigError::EmptyFallback` when a field is empty and so is its
/// fallback.
pub fn commit_author(
    config: &AuthorConfig,
    resolver: &dyn AuthorResolver,
) -> MirrorResult<Option<String>> {
    if !config.automatic {
        return Ok(None);
    }
    let Some(mut author) = resolver.current_author() else {
        return Ok(None);
    };

    fill(&mut author.email, &config.fallback_email, "fallback_email")?;
    fill(&mut author.name, &config.fallback_name, "fallback_name")?;
    Ok(Some(author.to_string()))
}

fn fill(field: &mut String, fallback: &str, key: &str) -> MirrorResult<()> {
    if field.trim().is_empty() {
        if fallback.trim().is_empty() {
            return Err(ConfigError::EmptyFallback {
                key: key.to_string(),
            }
            .into());
        }
        *field = fallback.to_string();
    }
    Ok(())
}
