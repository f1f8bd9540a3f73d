use crate::common::command::{
    get_head_commit_sha, get_parent_commit_ids, minigit_commit, repository_dir,
    run_minigit_command, stdout_of,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    let files = write_generated_files(dir, 3);
    run_minigit_command(dir, &["add", "."]).assert().success();

    minigit_commit(dir, "First commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] First commit\n$",
        )?);

    let head = get_head_commit_sha(dir)?;
    assert_eq!(head.len(), 40);
    assert!(get_parent_commit_ids(dir, &head)?.is_empty());

    let commit = stdout_of(&mut run_minigit_command(dir, &["cat-file", "-p", &head]))?;
    for file in &files {
        let name = file.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(
            commit.lines().any(|line| line.starts_with("file ") && line.ends_with(&name)),
            "commit should list {name}:\n{commit}"
        );
    }
    assert!(commit.contains("date 1672574400 +0000"));
    assert!(commit.ends_with("First commit\n\nWith a body"));

    // the index is emptied by a successful commit
    let index = std::fs::read_to_string(dir.join(".minigit").join("index"))?;
    assert!(index.trim().is_empty());

    Ok(())
}

#[rstest]
fn second_commit_points_at_first(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    write_generated_files(dir, 1);
    run_minigit_command(dir, &["add", "."]).assert().success();
    minigit_commit(dir, "First").assert().success();
    let first = get_head_commit_sha(dir)?;

    write_generated_files(dir, 1);
    run_minigit_command(dir, &["add", "."]).assert().success();
    minigit_commit(dir, "Second")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master [0-9a-f]{7}\] Second\n$")?);

    let second = get_head_commit_sha(dir)?;
    assert_eq!(get_parent_commit_ids(dir, &second)?, vec![first]);

    Ok(())
}

#[rstest]
fn commit_with_empty_message_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();
    write_generated_files(dir, 1);
    run_minigit_command(dir, &["add", "."]).assert().success();

    minigit_commit(dir, "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty commit message"));

    Ok(())
}

#[rstest]
fn adding_a_missing_path_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    run_minigit_command(dir, &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));

    Ok(())
}
