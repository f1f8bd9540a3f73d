use crate::common::command::{
    commit_files, get_head_commit_sha, get_parent_commit_id, init_repository_dir,
    minigit_commit, repository_dir, run_minigit_command, stdout_of,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_between_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(dir, &[("notes.txt", "a\nb\nc\n")], "First");
    run_minigit_command(dir, &["branch", "first"]).assert().success();
    commit_files(dir, &[("notes.txt", "a\nx\nc\nd\n")], "Second");

    let second = get_head_commit_sha(dir)?;
    let first = get_parent_commit_id(dir, &second)?;

    let stdout = stdout_of(&mut run_minigit_command(dir, &["diff", "first", "HEAD"]))?;

    let expected = format!(
        "Comparing commit {} with {}:\n\
         *** Modified: notes.txt\n\
         --- a/notes.txt\n\
         +++ b/notes.txt\n\
         \x20 a\n\
         - b\n\
         + x\n\
         \x20 c\n\
         + d\n\
         \n",
        &first[..7],
        &second[..7]
    );
    assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn show_removed_file_between_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let before = get_head_commit_sha(dir)?;

    std::fs::remove_file(dir.join("a").join("2.txt"))?;
    run_minigit_command(dir, &["add", "."]).assert().success();
    minigit_commit(dir, "Delete a/2.txt").assert().success();
    let after = get_head_commit_sha(dir)?;

    let stdout = stdout_of(&mut run_minigit_command(dir, &["diff", &before, &after]))?;

    assert_eq!(
        stdout,
        format!(
            "Comparing commit {} with {}:\n\
             --- Removed: a/2.txt\n\
             --- a/a/2.txt\n\
             +++ b/a/2.txt\n\
             - two\n\
             \n",
            &before[..7],
            &after[..7]
        )
    );

    Ok(())
}

#[rstest]
fn show_diff_from_revision_to_working_tree(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(dir, &[("one.txt", "1\n")], "First");
    let first = get_head_commit_sha(dir)?;
    commit_files(dir, &[("two.txt", "2\n")], "Second");

    run_minigit_command(dir, &["diff", &first[..8]])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Comparing working directory against commit {}:\n+++ Added: two.txt\n",
            &first[..7]
        )));

    Ok(())
}

#[rstest]
fn show_diff_for_unknown_revision_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();
    commit_files(dir, &[("one.txt", "1\n")], "First");

    run_minigit_command(dir, &["diff", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch or commit: nowhere"));

    Ok(())
}
