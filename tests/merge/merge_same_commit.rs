use crate::common::command::{get_head_commit_sha, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_same_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_minigit_command(dir, &["branch", "feature"]).assert().success();

    run_minigit_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::eq("Already up to date\n"));

    assert_eq!(get_head_commit_sha(dir)?, head);

    Ok(())
}
