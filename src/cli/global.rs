// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --repository DIR     ← repository.path override
//! --log-level N        ← Console verbosity (0-6)
//! --file-log-level     ← File verbosity (defaults to --log-level)
//! --set KEY=VAL        ← Direct config override
//! --author-name/-email ← Current user, not a config value
//!
//! Precedence: CLI flags > --set > env > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML or YAML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'push.mode=batch'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Working tree to commit into, relative to repository.base.
    #[arg(short = 'r', long = "repository", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Name of the user the changes are made for.
    #[arg(
        long = "author-name",
        value_name = "NAME",
        env = "GITMIRROR_AUTHOR_NAME"
    )]
    pub author_name: Option<String>,

    /// Email of the user the changes are made for.
    #[arg(
        long = "author-email",
        value_name = "EMAIL",
        env = "GITMIRROR_AUTHOR_EMAIL"
    )]
    pub author_email: Option<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `key=value` configuration overrides,
    /// `--set` options first so dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref path) = self.repository {
            overrides.push(format!("repository.path={}", path.display()));
        }

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        overrides
    }
}
