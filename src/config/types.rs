// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitmirror-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, RepositoryConfig, PushConfig, AuthorConfig,
//!         CommitToggles, EventsConfig
//! ```
//!
//! # Push Mode
//!
//! ```text
//! PushMode: Immediate (default, after every commit) | Batch (end of unit of work)
//! PushTarget: "remote" | "remote branch"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// When commits are pushed to the configured remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushMode {
    /// Push right after every commit.
    #[default]
    Immediate,
    /// Push once at the end of the unit of work, if anything was committed.
    Batch,
}

impl std::fmt::Display for PushMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Immediate => write!(f, "immediate"),
            Self::Batch => write!(f, "batch"),
        }
    }
}

impl std::str::FromStr for PushMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "batch" => Ok(Self::Batch),
            _ => Err(ConfigError::InvalidValue {
                section: "push".to_string(),
                key: "mode".to_string(),
                message: format!("expected 'immediate' or 'batch', got '{s}'"),
            }),
        }
    }
}

/// Remote and optional branch to push to, written as `"remote [branch]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    remote: String,
    branch: Option<String>,
}

impl PushTarget {
    pub fn new(remote: impl Into<String>, branch: Option<String>) -> Self {
        Self {
            remote: remote.into(),
            branch,
        }
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Branch to push; `None` pushes the remote's default mapping.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}

impl std::fmt::Display for PushTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{} {branch}", self.remote),
            None => write!(f, "{}", self.remote),
        }
    }
}

impl std::str::FromStr for PushTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |message: String| ConfigError::InvalidValue {
            section: "push".to_string(),
            key: "target".to_string(),
            message,
        };

        let mut words = s.split_whitespace();
        let remote = words
            .next()
            .ok_or_else(|| invalid("expected 'remote [branch]', got an empty string".into()))?;
        let branch = words.next().map(str::to_string);
        if words.next().is_some() {
            return Err(invalid(format!("expected 'remote [branch]', got '{s}'")));
        }
        Ok(Self::new(remote, branch))
    }
}

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, file logging is off when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Push settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// `"remote [branch]"`; pushing is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// When to push.
    pub mode: PushMode,
}

/// Commit author settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorConfig {
    /// Use the current user as commit author when one is known.
    pub automatic: bool,
    /// Email used when the current user's email is empty.
    pub fallback_email: String,
    /// Name used when the current user's name is empty.
    pub fallback_name: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            automatic: true,
            fallback_email: "cms.user@localhost".to_string(),
            fallback_name: "CMS User".to_string(),
        }
    }
}

/// Which lifecycle events produce commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitToggles {
    pub file_creations: bool,
    pub file_deletions: bool,
    pub file_renamings: bool,
}

impl Default for CommitToggles {
    fn default() -> Self {
        Self {
            file_creations: true,
            file_deletions: true,
            file_renamings: true,
        }
    }
}

/// Event boundary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsConfig {
    /// Drop an event identical to the one dispatched right before it.
    pub deduplicate: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { deduplicate: true }
    }
}
