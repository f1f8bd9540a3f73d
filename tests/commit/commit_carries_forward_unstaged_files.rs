use crate::common::command::{
    get_commit_files, get_head_commit_sha, init_repository_dir, minigit_commit,
    run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_carries_forward_unstaged_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("3.txt"), "three\n".to_string()));
    run_minigit_command(dir, &["add", "3.txt"]).assert().success();
    minigit_commit(dir, "Add three").assert().success();

    let head = get_head_commit_sha(dir)?;

    pretty_assertions::assert_eq!(
        get_commit_files(dir, &head)?,
        vec!["1.txt", "3.txt", "a/2.txt"]
    );

    Ok(())
}
