// gitmirror-rs: Asset Store to Git Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::backend::scripted::ScriptedRunner;
use super::{CommitExecutor, RepositoryHandle, RepositoryState, ShellRunner, StagingController};
use crate::config::types::{PushMode, PushTarget};
use crate::error::MirrorError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory, returning stdout
fn git_out(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("git should run");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a git repository with identity and an initial commit
fn init_test_repo(dir: &Path) {
    git_out(&["init", "-q"], dir);
    git_out(&["config", "user.email", "test@test.com"], dir);
    git_out(&["config", "user.name", "Test"], dir);
    git_out(&["config", "commit.gpgsign", "false"], dir);
    git_out(&["commit", "-q", "--allow-empty", "-m", "init"], dir);
}

fn shell_state(dir: &Path) -> RepositoryState<ShellRunner> {
    let handle = RepositoryHandle::open(dir).unwrap();
    let runner = ShellRunner::new(Path::new("git"), dir).unwrap();
    RepositoryState::new(handle, runner)
}

/// State over a directory that only has an empty `.git`, for scripted tests.
fn scripted_state<'a>(
    temp: &TempDir,
    runner: &'a ScriptedRunner,
) -> RepositoryState<&'a ScriptedRunner> {
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    RepositoryState::new(RepositoryHandle::open(temp.path()).unwrap(), runner)
}

fn commit_count(dir: &Path) -> usize {
    git_out(&["rev-list", "--count", "HEAD"], dir)
        .parse()
        .unwrap_or(0)
}

// --- RepositoryHandle ---

#[test]
fn test_open_rejects_missing_directory() {
    let temp = temp_dir();
    let err = RepositoryHandle::open(temp.path().join("absent")).unwrap_err();
    assert!(matches!(err, MirrorError::Config(_)));
    assert!(err.to_string().contains("should be an existing directory"));
}

#[test]
fn test_open_rejects_empty_path() {
    let err = RepositoryHandle::open(PathBuf::new()).unwrap_err();
    assert!(err.to_string().contains("should be an existing directory"));
}

#[test]
fn test_open_rejects_directory_without_git() {
    let temp = temp_dir();
    let err = RepositoryHandle::open(temp.path()).unwrap_err();
    assert!(err.to_string().contains("missing '.git' directory"));
}

#[test]
fn test_display_path() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let handle = RepositoryHandle::open(temp.path()).unwrap();

    let nested = temp.path().join("sub/a.txt");
    assert_eq!(handle.display_path(&nested), "sub/a.txt");
    assert_eq!(handle.display_path(temp.path()), ".");
    assert_eq!(
        handle.display_path(Path::new("/elsewhere/b.txt")),
        "/elsewhere/b.txt"
    );
}

// --- RepositoryState against a real repository ---

#[test]
fn test_is_ignored_follows_gitignore() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    fs::write(temp.path().join(".gitignore"), "*.tmp\n_resampled/\n").unwrap();
    let state = shell_state(temp.path());

    assert!(state.is_ignored(&temp.path().join("x.tmp")).unwrap());
    let resampled = temp.path().join("_resampled/a.png");
    assert!(state.is_ignored(&resampled).unwrap());
    assert!(!state.is_ignored(&temp.path().join("a.png")).unwrap());
}

#[test]
fn test_is_tracked_and_staged_changes() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let state = shell_state(temp.path());
    let file = temp.path().join("a.txt");
    fs::write(&file, "a").unwrap();

    assert!(!state.is_tracked(&file).unwrap());
    assert!(!state.has_staged_changes().unwrap());

    StagingController::new(&state).stage_add(&file).unwrap();
    assert!(state.is_tracked(&file).unwrap());
    assert!(state.has_staged_changes().unwrap());
}

#[test]
fn test_pathspec_characters_match_literally() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let state = shell_state(temp.path());
    let plain = temp.path().join("x1.txt");
    let bracketed = temp.path().join("x[1].txt");
    fs::write(&plain, "plain").unwrap();

    let staging = StagingController::new(&state);
    staging.stage_add(&plain).unwrap();
    assert!(state.is_tracked(&plain).unwrap());
    assert!(!state.is_tracked(&bracketed).unwrap());
    assert!(!state.is_tracked(&temp.path().join("*.txt")).unwrap());

    fs::write(&bracketed, "bracketed").unwrap();
    staging.reset_stage().unwrap();
    staging.stage_add(&bracketed).unwrap();
    assert_eq!(
        git_out(&["diff", "--cached", "--name-only"], temp.path()),
        "x[1].txt"
    );
}

#[test]
fn test_query_outside_repository_propagates() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let state = shell_state(temp.path());

    let err = state
        .is_tracked(Path::new("/definitely/outside.txt"))
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(128));
}

// --- StagingController ---

#[test]
fn test_reset_stage_keeps_working_tree() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let state = shell_state(temp.path());
    let staging = StagingController::new(&state);
    let file = temp.path().join("keep.txt");
    fs::write(&file, "content").unwrap();

    staging.stage_add(&file).unwrap();
    staging.reset_stage().unwrap();

    assert!(!state.has_staged_changes().unwrap());
    assert_eq!(fs::read_to_string(&file).unwrap(), "content");
}

#[test]
fn test_stage_remove_with_file_already_gone() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let state = shell_state(temp.path());
    let mut executor = CommitExecutor::new(None, PushMode::Immediate);
    let staging = StagingController::new(&state);
    let file = temp.path().join("gone.txt");
    fs::write(&file, "x").unwrap();
    staging.stage_add(&file).unwrap();
    executor.commit(&state, "add", None).unwrap();

    fs::remove_file(&file).unwrap();
    staging.stage_remove(&file).unwrap();
    assert!(!state.is_tracked(&file).unwrap());
}

#[test]
fn test_reset_stage_is_noop_when_clean() {
    let runner = ScriptedRunner::new().with_staging();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    StagingController::new(&state).reset_stage().unwrap();
    assert_eq!(runner.calls(), vec!["diff --cached --quiet"]);
}

#[test]
fn test_reset_stage_resets_when_dirty() {
    let runner = ScriptedRunner::new().with_staging().pre_staged();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    StagingController::new(&state).reset_stage().unwrap();
    assert_eq!(
        runner.calls(),
        vec!["diff --cached --quiet", "reset --mixed --quiet"]
    );
}

// --- CommitExecutor ---

#[test]
fn test_commit_with_nothing_staged() {
    let runner = ScriptedRunner::new().with_staging();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let mut executor = CommitExecutor::new(None, PushMode::Immediate);

    let err = executor.commit(&state, "msg", None).unwrap_err();
    assert!(err.is_nothing_to_commit());
    assert!(!executor.has_pending_commits());
    assert!(runner.calls_of("commit").is_empty());
}

#[test]
fn test_commit_passes_author_and_counts() {
    let runner = ScriptedRunner::new().with_staging().pre_staged();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let mut executor = CommitExecutor::new(None, PushMode::Immediate);

    executor
        .commit(&state, "Create file a.txt.", Some("Jo <jo@example.com>"))
        .unwrap();
    assert_eq!(executor.commit_count(), 1);
    let expected = "commit --quiet -m Create file a.txt. --author Jo <jo@example.com>";
    assert_eq!(runner.calls_of("commit"), vec![expected]);
    assert!(runner.calls_of("push").is_empty());
}

#[test]
fn test_commit_pushes_immediately_with_target() {
    let runner = ScriptedRunner::new().with_staging().pre_staged();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let target = PushTarget::new("origin", Some("main".to_string()));
    let mut executor = CommitExecutor::new(Some(target), PushMode::Immediate);

    executor.commit(&state, "msg", None).unwrap();
    assert_eq!(runner.calls_of("push"), vec!["push --quiet origin main"]);
}

#[test]
fn test_batch_mode_defers_push() {
    let runner = ScriptedRunner::new().with_staging().pre_staged();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let mut executor = CommitExecutor::new(Some(PushTarget::new("origin", None)), PushMode::Batch);

    executor.commit(&state, "msg", None).unwrap();
    assert!(runner.calls_of("push").is_empty());

    executor.push_now(&state).unwrap();
    assert_eq!(runner.calls_of("push"), vec!["push --quiet origin"]);
    assert!(executor.has_pending_commits());
}

#[test]
fn test_failed_push_keeps_commit() {
    let runner = ScriptedRunner::new()
        .with_staging()
        .pre_staged()
        .answer(&["push"], 128);
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let mut executor = CommitExecutor::new(
        Some(PushTarget::new("origin", None)),
        PushMode::Immediate,
    );

    let err = executor.commit(&state, "msg", None).unwrap_err();
    assert_eq!(err.exit_code(), Some(128));
    assert_eq!(executor.commit_count(), 1);
    assert_eq!(runner.calls_of("commit").len(), 1);
}

#[test]
fn test_push_now_without_target() {
    let runner = ScriptedRunner::new();
    let temp = temp_dir();
    let state = scripted_state(&temp, &runner);
    let executor = CommitExecutor::new(None, PushMode::Batch);
    let err = executor.push_now(&state).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"git error: no push target configured");
}

#[test]
fn test_commit_and_push_real_repository() {
    let temp = temp_dir();
    let work = temp.path().join("work");
    let remote = temp.path().join("remote.git");
    fs::create_dir(&work).unwrap();
    let remote_arg = remote.display().to_string();
    git_out(&["init", "-q", "--bare", &remote_arg], temp.path());
    init_test_repo(&work);
    git_out(&["remote", "add", "origin", &remote_arg], &work);

    let state = shell_state(&work);
    let target = PushTarget::new("origin", Some("HEAD".to_string()));
    let mut executor = CommitExecutor::new(Some(target), PushMode::Immediate);
    let file = work.join("a.txt");
    fs::write(&file, "a").unwrap();
    StagingController::new(&state).stage_add(&file).unwrap();
    let author = Some("Jo Doe <jo@example.com>");
    executor.commit(&state, "Create file a.txt.", author).unwrap();

    assert_eq!(commit_count(&work), 2);
    assert_eq!(
        git_out(&["log", "-1", "--format=%an <%ae>|%s"], &work),
        "Jo Doe <jo@example.com>|Create file a.txt."
    );
    assert_eq!(git_out(&["rev-list", "--all", "--count"], &remote), "2");
}
