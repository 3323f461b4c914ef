// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            MirrorError (~24 bytes)
//!                   |
//!   +------+-------+-------+--------+
//!   |      |       |       |        |
//!   v      v       v       v        v
//!  Git   Config  Process  InvalidArg  Io
//!  Box    Box     Box     Box<str>   Box
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed{exit_code}, NothingToCommit, NoPushTarget
//!   Config  NotADirectory, NotARepository, EmptyFallback, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, Terminated
//!
//! All variants boxed => MirrorError fits in 24 bytes.
//! ```
//!
//! Only one negative-result convention is interpreted inside the crate: exit
//! code 1 from the ignore-check and tracked-file lookups. Everything else
//! propagates to the embedder untouched.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MirrorError`].
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Git invocation failed or produced an unusable state.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The git executable could not be located or started.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Malformed file identity or event input.
    #[error("invalid argument: {0}")]
    InvalidArgument(Box<str>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl MirrorError {
    /// Exit code of the failed git command, if this is a command failure.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Git(err) => match err.as_ref() {
                GitError::CommandFailed { exit_code, .. } => Some(*exit_code),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this error is [`GitError::NothingToCommit`].
    #[must_use]
    pub fn is_nothing_to_commit(&self) -> bool {
        matches!(self, Self::Git(err) if matches!(err.as_ref(), GitError::NothingToCommit))
    }
}

/// Create a [`MirrorError::InvalidArgument`].
pub fn invalid_argument(message: impl Into<String>) -> MirrorError {
    MirrorError::InvalidArgument(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MirrorError {
                fn from(err: $error) -> Self {
                    MirrorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A git subcommand exited with a code the caller does not interpret.
    #[error("command '{command}' failed (exit-code {exit_code}){}", format_output(.output))]
    CommandFailed {
        command: String,
        exit_code: i32,
        output: Vec<String>,
    },

    /// Staging produced no difference against the last commit.
    #[error("no changes are staged to be committed")]
    NothingToCommit,

    /// A push was requested but no push target is configured.
    #[error("no push target configured")]
    NoPushTarget,
}

fn format_output(output: &[String]) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!("\ncommand output:\n{}", output.join("\n"))
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Repository path is missing or not a directory.
    #[error("repository path '{path}' should be an existing directory")]
    NotADirectory { path: String },

    /// Repository path has no `.git` directory.
    #[error(
        "no git repository is initialized in '{path}' (missing '.git' directory); \
         run 'git init' there and define a default author"
    )]
    NotARepository { path: String },

    /// A fallback author field is empty.
    #[error("config value 'author.{key}' should not be empty")]
    EmptyFallback { key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Errors starting the version-control executable.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal and has no exit code.
    #[error("process '{command}' was terminated without an exit code")]
    Terminated { command: String },
}
