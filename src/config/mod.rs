// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitmirror-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitmirror.toml / gitmirror.yaml (cwd, optional)
//! 3. --config (repeatable, required)
//! 4. GITMIRROR_* env vars
//! 5. --set KEY=VALUE and dedicated CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITMIRROR_PUSH__TARGET="origin main"  → push.target = "origin main"
//! GITMIRROR_COMMIT__FILE_DELETIONS=false → commit.file_deletions = false
//! GITMIRROR_REPOSITORY__PATH=/srv/assets → repository.path = "/srv/assets"
//! ```
//!
//! # Example
//!
//! ```toml
//! [repository]
//! path = "assets"
//!
//! [push]
//! target = "origin main"
//! mode = "batch"
//!
//! [commit]
//! file_deletions = false
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{MirrorResult, Result};

use loader::ConfigLoader;
use paths::RepositoryConfig;
use types::{AuthorConfig, CommitToggles, EventsConfig, GlobalConfig, PushConfig, PushTarget};

/// Complete application configuration.
///
/// Unknown top-level keys are tolerated: the `GITMIRROR_AUTHOR_NAME` and
/// `GITMIRROR_AUTHOR_EMAIL` variables read by the CLI share the env prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository location.
    pub repository: RepositoryConfig,
    /// Push target and mode.
    pub push: PushConfig,
    /// Commit author fallback.
    pub author: AuthorConfig,
    /// Which events produce commits.
    pub commit: CommitToggles,
    /// Event boundary settings.
    pub events: EventsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitmirror_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_file("gitmirror.toml")
    ///     .add_file_optional("gitmirror.local.yaml")
    ///     .with_env_prefix("GITMIRROR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML or YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or does
    /// not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Parsed push target, `None` when pushing is disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `push.target` is not
    /// `"remote [branch]"`.
    pub fn push_target(&self) -> MirrorResult<Option<PushTarget>> {
        match self.push.target.as_deref() {
            None => Ok(None),
            Some(target) if target.trim().is_empty() => Ok(None),
            Some(target) => Ok(Some(target.parse()?)),
        }
    }

    /// Check values that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if the push target is malformed.
    pub fn validate(&self) -> Result<()> {
        self.push_target()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_repository_options(&mut options);
        self.format_push_options(&mut options);
        self.format_author_options(&mut options);
        self.format_commit_options(&mut options);
        options.insert(
            "events.deduplicate".into(),
            self.events.deduplicate.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), display_opt(&self.global.log_file));
    }

    fn format_repository_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "repository.path".into(),
            self.repository.path.display().to_string(),
        );
        options.insert("repository.base".into(), display_opt(&self.repository.base));
        options.insert(
            "repository.git".into(),
            self.repository.git.display().to_string(),
        );
    }

    fn format_push_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "push.target".into(),
            self.push.target.clone().unwrap_or_default(),
        );
        options.insert("push.mode".into(), self.push.mode.to_string());
    }

    fn format_author_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("author.automatic".into(), self.author.automatic.to_string());
        options.insert(
            "author.fallback_email".into(),
            self.author.fallback_email.clone(),
        );
        options.insert(
            "author.fallback_name".into(),
            self.author.fallback_name.clone(),
        );
    }

    fn format_commit_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "commit.file_creations".into(),
            self.commit.file_creations.to_string(),
        );
        options.insert(
            "commit.file_deletions".into(),
            self.commit.file_deletions.to_string(),
        );
        options.insert(
            "commit.file_renamings".into(),
            self.commit.file_renamings.to_string(),
        );
    }
}

fn display_opt(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(String::new, |p| p.display().to_string())
}
