// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Created | Deleted | Renamed | Apply | Push | Options | ConfigFiles
//! ```

use std::process::ExitCode;

use gitmirror_rs::cli::global::GlobalOptions;
use gitmirror_rs::cli::{self, Command};
use gitmirror_rs::cmd::author_resolver;
use gitmirror_rs::cmd::config::{run_config_files_command, run_options_command};
use gitmirror_rs::cmd::event::{run_apply_command, run_event_command};
use gitmirror_rs::cmd::push::run_push_command;
use gitmirror_rs::config::Config;
use gitmirror_rs::config::loader::ConfigLoader;
use gitmirror_rs::event::Event;
use gitmirror_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const ENV_PREFIX: &str = "GITMIRROR";

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(command) => run(command, &cli.global),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, global: &GlobalOptions) -> gitmirror_rs::error::Result<()> {
    let loader = build_config_loader(global)?;
    let files = loader.format_loaded_files();
    let config = loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e:#}");
        e
    })?;

    let _log_guard = init_logging(&build_log_config(&config)).map_err(|e| {
        eprintln!("Failed to initialize logging: {e:#}");
        e
    })?;
    log_loaded_files(&files);

    let resolver = author_resolver(global.author_name.clone(), global.author_email.clone());
    match command {
        Command::Options => {
            run_options_command(&config);
            Ok(())
        }
        Command::ConfigFiles => {
            run_config_files_command(&files);
            Ok(())
        }
        Command::Created(args) => run_event_command(&args.created(), &config, resolver),
        Command::Deleted(args) => run_event_command(&args.deleted(), &config, resolver),
        Command::Renamed(args) => run_event_command(&Event::from(args), &config, resolver),
        Command::Apply(args) => run_apply_command(args, &config, resolver),
        Command::Push => run_push_command(&config, resolver),
        Command::Version => {
            handle_version_command();
            Ok(())
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> gitmirror_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new()
        .add_file_optional("gitmirror.toml")
        .add_file_optional("gitmirror.yaml");
    for path in &global.configs {
        loader = loader.add_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    Ok(loader)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn log_loaded_files(files: &[String]) {
    for line in files {
        tracing::debug!("config source {line}");
    }
}
