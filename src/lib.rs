// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         event / apply / push
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML/YAML, env, --set    |
//!              '-------------+-------------'
//!                            v
//!          event  (Dispatcher, dedup, batches)
//!                            |
//!                            v
//!          committer  (AssetCommitter, factory)
//!                            |
//!                            v
//!          engine  (decisions, messages, author)
//!                            |
//!                            v
//!          git  (queries, staging, commit, push)
//!
//!   +-----------------------------------------+
//!   |  foundation      error, logging         |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod committer;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod git;
pub mod logging;
