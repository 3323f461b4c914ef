// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event commands: `created`, `deleted`, `renamed`, `apply`.

use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;

use anyhow::Context;

use crate::cli::event::ApplyArgs;
use crate::committer::CommitterFactory;
use crate::config::Config;
use crate::engine::Outcome;
use crate::engine::author::AuthorResolver;
use crate::error::Result;
use crate::event::batch::parse_events;
use crate::event::{Dispatcher, Event};

use super::git_dispatcher;

/// Record one event, then end the unit of work.
///
/// # Errors
///
/// Returns an error if the event fails or the batch push fails.
pub fn run_event_command(
    event: &Event,
    config: &Config,
    resolver: Arc<dyn AuthorResolver>,
) -> Result<()> {
    let mut dispatcher = git_dispatcher(config, resolver)?;
    run_events(
        &mut dispatcher,
        std::slice::from_ref(event),
        &mut std::io::stdout(),
    )
}

/// Record every event of a JSON-lines batch, then end the unit of work.
///
/// The whole batch is parsed before the first event is dispatched.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, an event fails,
/// or the batch push fails.
pub fn run_apply_command(
    args: &ApplyArgs,
    config: &Config,
    resolver: Arc<dyn AuthorResolver>,
) -> Result<()> {
    let events = if args.is_stdin() {
        parse_events(std::io::stdin().lock())?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open {}", args.input.display()))?;
        parse_events(BufReader::new(file))?
    };
    tracing::debug!(count = events.len(), "parsed event batch");

    let mut dispatcher = git_dispatcher(config, resolver)?;
    run_events(&mut dispatcher, &events, &mut std::io::stdout())
}

/// Dispatch in order, stop at the first failure. The batch push only runs
/// when every event succeeded.
///
/// # Errors
///
/// Returns the first event failure or the push failure.
pub fn run_events<F: CommitterFactory, W: Write>(
    dispatcher: &mut Dispatcher<F>,
    events: &[Event],
    out: &mut W,
) -> Result<()> {
    for (index, event) in events.iter().enumerate() {
        let outcome = dispatcher
            .dispatch(event)
            .with_context(|| format!("event {} ({}) failed", index + 1, event.kind()))?;
        writeln!(out, "{}", summary(&outcome))?;
    }

    if dispatcher.finish()? {
        writeln!(out, "pushed")?;
    }
    Ok(())
}

/// One line per event: the commit subject or the skip reason.
#[must_use]
pub fn summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Committed { message } => {
            format!("committed: {}", message.lines().next().unwrap_or_default())
        }
        Outcome::Skipped(reason) => format!("skipped: {reason}"),
    }
}
