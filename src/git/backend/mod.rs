// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution layer.
//!
//! ```text
//! CommandRunner (trait) --> ShellRunner (git CLI, blocking)
//!                       --> ScriptedRunner (tests, canned exit codes)
//! ```
//!
//! A runner returns the combined stdout and stderr lines on exit code 0 and
//! `GitError::CommandFailed` with the exit code and the same lines otherwise.
//! Interpreting non-zero codes is left to the caller.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitError, MirrorResult, ProcessError};

/// Runs git subcommands against one working tree.
pub trait CommandRunner {
    /// Run `git <args>` and return its output lines.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` on a non-zero exit code, or a
    /// `ProcessError` if git could not be started.
    fn execute(&self, args: &[&str]) -> MirrorResult<Vec<String>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, args: &[&str]) -> MirrorResult<Vec<String>> {
        (**self).execute(args)
    }
}

/// Shell-based runner using the git CLI.
///
/// Every invocation runs in the repository root with `GCM_INTERACTIVE=never`
/// and `GIT_TERMINAL_PROMPT=0`, so a push without credentials fails instead of
/// waiting for input. `GIT_LITERAL_PATHSPECS=1` makes `*`, `?`, `[...]` and
/// a leading `:` in path arguments plain characters.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    git: PathBuf,
    root: PathBuf,
}

impl ShellRunner {
    /// Locate the git executable (a name looked up in `PATH`, or a path).
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if `git` cannot be resolved.
    pub fn new(git: &Path, root: &Path) -> MirrorResult<Self> {
        let resolved = which::which(git).map_err(|_| ProcessError::ExecutableNotFound {
            name: git.display().to_string(),
        })?;
        Ok(Self {
            git: resolved,
            root: root.to_path_buf(),
        })
    }

    /// Resolved git executable.
    #[must_use]
    pub fn git(&self) -> &Path {
        &self.git
    }
}

impl CommandRunner for ShellRunner {
    fn execute(&self, args: &[&str]) -> MirrorResult<Vec<String>> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(cmd = %command, "running");

        let output = Command::new(&self.git)
            .args(args)
            .current_dir(&self.root)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_LITERAL_PATHSPECS", "1")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        let lines = combined_lines(&output.stdout, &output.stderr);

        match output.status.code() {
            Some(0) => {
                tracing::trace!(cmd = %command, lines = lines.len(), "succeeded");
                Ok(lines)
            }
            Some(exit_code) => {
                tracing::trace!(cmd = %command, exit_code, "failed");
                Err(GitError::CommandFailed {
                    command,
                    exit_code,
                    output: lines,
                }
                .into())
            }
            None => Err(ProcessError::Terminated { command }.into()),
        }
    }
}

/// Stdout lines followed by stderr lines, trailing whitespace trimmed,
/// blank lines dropped.
pub(crate) fn combined_lines(stdout: &[u8], stderr: &[u8]) -> Vec<String> {
    [stdout, stderr]
        .into_iter()
        .flat_map(|bytes| {
            String::from_utf8_lossy(bytes)
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod scripted;
