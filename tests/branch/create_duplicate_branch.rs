use crate::common::command::{
    commit_files, get_branch_commit_sha, init_repository_dir, run_minigit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_minigit_command(dir, &["branch", "feature"]).assert().success();
    let original_tip = get_branch_commit_sha(dir, "feature")?;

    commit_files(dir, &[("later.txt", "later\n")], "Later");

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::eq("Branch already exists: feature\n"));

    assert_eq!(get_branch_commit_sha(dir, "feature")?, original_tip);

    Ok(())
}
