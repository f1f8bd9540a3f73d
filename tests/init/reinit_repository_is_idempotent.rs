use crate::common::command::{get_head_commit_sha, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reinit_repository_is_idempotent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_before = get_head_commit_sha(init_repository_dir.path())?;

    run_minigit_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Repository already initialized in",
        ));

    assert_eq!(get_head_commit_sha(init_repository_dir.path())?, head_before);

    Ok(())
}
