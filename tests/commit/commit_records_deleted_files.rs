use crate::common::command::{
    get_commit_files, get_head_commit_sha, init_repository_dir, minigit_commit,
    run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_records_file_deleted_by_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    std::fs::remove_file(dir.join("1.txt"))?;
    run_minigit_command(dir, &["add", "1.txt"]).assert().success();
    assert_eq!(
        std::fs::read_to_string(dir.join(".minigit").join("index"))?,
        "1.txt -\n"
    );

    minigit_commit(dir, "Remove one").assert().success();

    let head = get_head_commit_sha(dir)?;
    assert_eq!(get_commit_files(dir, &head)?, vec!["a/2.txt"]);

    Ok(())
}

#[rstest]
fn commit_records_files_deleted_under_a_directory(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    std::fs::remove_dir_all(dir.join("a"))?;
    write_file(FileSpec::new(dir.join("4.txt"), "four\n".to_string()));
    run_minigit_command(dir, &["add", "."]).assert().success();
    minigit_commit(dir, "Replace a/2.txt with 4.txt").assert().success();

    let head = get_head_commit_sha(dir)?;
    assert_eq!(get_commit_files(dir, &head)?, vec!["1.txt", "4.txt"]);

    // once committed, the deletion is no longer staged
    run_minigit_command(dir, &["add", "."]).assert().success();
    let index = std::fs::read_to_string(dir.join(".minigit").join("index"))?;
    assert!(!index.lines().any(|line| line.ends_with(" -")));

    Ok(())
}

#[rstest]
fn deleting_a_staged_new_file_unstages_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("3.txt"), "three\n".to_string()));
    run_minigit_command(dir, &["add", "3.txt"]).assert().success();
    std::fs::remove_file(dir.join("3.txt"))?;
    run_minigit_command(dir, &["add", "3.txt"]).assert().success();

    minigit_commit(dir, "Nothing to record")
        .assert()
        .success()
        .stdout("nothing to commit\n");

    Ok(())
}

#[rstest]
fn add_missing_untracked_path_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_minigit_command(dir, &["add", "nowhere.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));

    Ok(())
}
