// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::paths::normalize;
use crate::config::types::{PushMode, PushTarget};
use crate::logging::LogLevel;
use std::io::Write as _;
use std::path::{Path, PathBuf};

fn option_value(config: &Config, key: &str) -> Option<String> {
    config.format_options().into_iter().find_map(|line| {
        let (k, v) = line.split_once(" = ")?;
        (k.trim() == key).then(|| v.to_string())
    })
}

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "repository.path": config.repository.path,
            "repository.git": config.repository.git,
            "push.mode": config.push.mode.to_string(),
            "author.automatic": config.author.automatic,
            "author.fallback_email": config.author.fallback_email,
            "author.fallback_name": config.author.fallback_name,
            "commit": [
                config.commit.file_creations,
                config.commit.file_deletions,
                config.commit.file_renamings
            ],
            "events.deduplicate": config.events.deduplicate,
        }),
        @r#"
    author.automatic: true
    author.fallback_email: cms.user@localhost
    author.fallback_name: CMS User
    commit:
      - true
      - true
      - true
    events.deduplicate: true
    push.mode: immediate
    repository.git: git
    repository.path: assets
    "#
    );
}

#[test]
fn test_parse_toml_sections() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4

        [repository]
        path = "/srv/cms/assets"

        [push]
        target = "origin main"
        mode = "batch"

        [author]
        fallback_name = "Site Robot"

        [commit]
        file_deletions = false
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.repository.path, PathBuf::from("/srv/cms/assets"));
    assert_eq!(config.push.mode, PushMode::Batch);
    assert_eq!(config.author.fallback_name, "Site Robot");
    assert_eq!(config.author.fallback_email, "cms.user@localhost");
    assert!(config.commit.file_creations);
    assert!(!config.commit.file_deletions);

    let target = config.push_target().unwrap().unwrap();
    assert_eq!(target.remote(), "origin");
    assert_eq!(target.branch(), Some("main"));
}

#[test]
fn test_unknown_section_key_rejected() {
    let result = Config::parse("[push]\ntarrget = \"origin\"\n");
    assert!(result.is_err());
}

#[test]
fn test_malformed_push_target_rejected_at_build() {
    let err = Config::parse("[push]\ntarget = \"origin main extra\"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid value for 'target' in section '[push]': expected 'remote [branch]', got 'origin main extra'"
    );
}

#[test]
fn test_blank_push_target_disables_push() {
    let config = Config::parse("[push]\ntarget = \"  \"\n").unwrap();
    assert!(config.push_target().unwrap().is_none());
}

#[test]
fn test_push_mode_parse() {
    assert_eq!("Batch".parse::<PushMode>().ok(), Some(PushMode::Batch));
    assert_eq!(
        "immediate".parse::<PushMode>().ok(),
        Some(PushMode::Immediate)
    );
    assert!("later".parse::<PushMode>().is_err());
}

#[test]
fn test_push_target_display_round_trip() {
    let with_branch: PushTarget = "upstream   release".parse().unwrap();
    assert_eq!(with_branch.to_string(), "upstream release");

    let remote_only: PushTarget = "origin".parse().unwrap();
    assert_eq!(remote_only.branch(), None);
    assert_eq!(remote_only.to_string(), "origin");

    assert!("".parse::<PushTarget>().is_err());
}

#[test]
fn test_yaml_file_source() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "push:\n  target: backup\n  mode: batch\nevents:\n  deduplicate: false"
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.push.target.as_deref(), Some("backup"));
    assert_eq!(config.push.mode, PushMode::Batch);
    assert!(!config.events.deduplicate);
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[push]\nmode = \"batch\"\ntarget = \"origin\"\n")
        .add_yaml_str("push:\n  target: mirror\n")
        .set_option("commit.file_renamings = false")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.push.mode, PushMode::Batch);
    assert_eq!(config.push.target.as_deref(), Some("mirror"));
    assert!(!config.commit.file_renamings);
}

#[test]
fn test_set_option_requires_key_value() {
    assert!(ConfigLoader::new().set_option("push.mode").is_err());
    assert!(ConfigLoader::new().set_option("=batch").is_err());
}

#[test]
fn test_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_optional_missing_file_is_not_listed() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new()
        .add_file_optional(dir.path().join("absent.toml"))
        .add_toml_str("");
    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
    ]
    "#);
}

#[test]
fn test_format_options_aligned_and_sorted() {
    let mut config = Config::default();
    config.push.target = Some("origin main".to_string());

    let lines = config.format_options();
    let keys: Vec<_> = lines
        .iter()
        .filter_map(|l| l.split_once(" = ").map(|(k, _)| k.trim().to_string()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let eq_columns: Vec<_> = lines.iter().filter_map(|l| l.find(" = ")).collect();
    assert!(eq_columns.windows(2).all(|w| w[0] == w[1]));

    assert_eq!(
        option_value(&config, "push.target").as_deref(),
        Some("origin main")
    );
    assert_eq!(
        option_value(&config, "push.mode").as_deref(),
        Some("immediate")
    );
    assert_eq!(
        option_value(&config, "global.file_log_level").as_deref(),
        Some("5")
    );
}

#[test]
fn test_normalize_folds_dots() {
    assert_eq!(
        normalize(Path::new("/srv/cms/./assets/../assets/a.txt")),
        PathBuf::from("/srv/cms/assets/a.txt")
    );
    assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
}

#[test]
fn test_repository_root_resolves_against_base() {
    let mut config = Config::default();
    config.repository.base = Some(PathBuf::from("/srv/cms"));
    assert_eq!(
        config.repository.root().unwrap(),
        PathBuf::from("/srv/cms/assets")
    );

    config.repository.path = PathBuf::from("/data/mirror");
    assert_eq!(
        config.repository.root().unwrap(),
        PathBuf::from("/data/mirror")
    );
}
