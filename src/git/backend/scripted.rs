// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory runner for decision-table tests.
//!
//! Answers are matched by argv prefix, first match wins; anything unmatched
//! succeeds with no output. Every call is recorded.

use std::cell::RefCell;

use super::CommandRunner;
use crate::error::{GitError, MirrorResult};

#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(Vec<String>, i32)>,
    calls: RefCell<Vec<String>>,
    staged: RefCell<bool>,
    track_staging: bool,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` with `exit_code`.
    pub(crate) fn answer(mut self, prefix: &[&str], exit_code: i32) -> Self {
        let prefix = prefix.iter().map(|s| (*s).to_string()).collect();
        self.rules.push((prefix, exit_code));
        self
    }

    /// Simulate the index: `add`/`rm` mark it dirty, `reset`/`commit` clean,
    /// and `diff --cached --quiet` reports it.
    pub(crate) fn with_staging(mut self) -> Self {
        self.track_staging = true;
        self
    }

    /// Start with something already staged.
    pub(crate) fn pre_staged(self) -> Self {
        *self.staged.borrow_mut() = true;
        self
    }

    /// Recorded commands, space joined, without the leading `git`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Recorded commands whose first word is `subcommand`.
    pub(crate) fn calls_of(&self, subcommand: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(' ').next() == Some(subcommand))
            .cloned()
            .collect()
    }

    fn staging_exit_code(&self, args: &[&str]) -> Option<i32> {
        if !self.track_staging {
            return None;
        }
        let mut staged = self.staged.borrow_mut();
        match args.first().copied() {
            Some("add" | "rm") => {
                *staged = true;
                Some(0)
            }
            Some("reset" | "commit") => {
                *staged = false;
                Some(0)
            }
            Some("diff") => Some(i32::from(*staged)),
            _ => None,
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, args: &[&str]) -> MirrorResult<Vec<String>> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());

        let scripted = self
            .rules
            .iter()
            .find(|(prefix, _)| {
                prefix.len() <= args.len() && prefix.iter().zip(args).all(|(p, a)| p == a)
            })
            .map(|(_, code)| *code);

        let exit_code = scripted
            .or_else(|| self.staging_exit_code(args))
            .unwrap_or(0);

        if exit_code == 0 {
            Ok(Vec::new())
        } else {
            Err(GitError::CommandFailed {
                command: format!("git {command}"),
                exit_code,
                output: vec![format!("scripted exit {exit_code}")],
            }
            .into())
        }
    }
}
