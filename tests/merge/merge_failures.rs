use crate::common::command::{
    get_head_commit_sha, init_repository_dir, repository_dir, run_minigit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("missing")]
#[case("bad..name")]
fn merge_unknown_branch_fails(
    init_repository_dir: TempDir,
    #[case] branch: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("branch not found: {branch}")));

    Ok(())
}

#[rstest]
fn merge_without_commits_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    run_minigit_command(dir, &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commits exist yet"));

    Ok(())
}

#[rstest]
fn merge_while_detached_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;

    run_minigit_command(dir, &["branch", "feature"]).assert().success();
    crate::common::command::commit_files(dir, &[("1.txt", "changed\n")], "Second");

    run_minigit_command(dir, &["checkout", &first]).assert().success();
    crate::common::command::commit_files(dir, &[("d.txt", "detached\n")], "Detached");

    run_minigit_command(dir, &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot merge while HEAD is detached"));

    Ok(())
}
