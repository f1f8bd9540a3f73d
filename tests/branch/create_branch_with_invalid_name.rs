use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(".hidden")]
#[case("bad..name")]
#[case("trailing/")]
#[case("ends.lock")]
#[case("with space")]
#[case("HEAD@{1}")]
fn create_branch_with_invalid_name(
    init_repository_dir: TempDir,
    #[case] branch: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(init_repository_dir.path(), &["branch", branch])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}
