// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON-lines event batches.
//!
//! ```text
//! # comment
//! {"event":"created","path":"Uploads/a.png"}
//! {"event":"renamed","old_path":"a.png","new_path":"b.png"}
//! {"event":"deleted","path":"Uploads","folder":true}
//! ```

use std::io::BufRead;

use super::Event;
use crate::error::{MirrorResult, invalid_argument};

/// Parse a batch, skipping blank and `#` lines.
///
/// # Errors
///
/// Returns `InvalidArgument` naming the first malformed line, or the read
/// error.
pub fn parse_events<B: BufRead>(reader: B) -> MirrorResult<Vec<Event>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_line(&line, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Parse one line; `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns `InvalidArgument` naming `line_number`.
pub fn parse_line(line: &str, line_number: usize) -> MirrorResult<Option<Event>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| invalid_argument(format!("line {line_number}: {e}")))
}
