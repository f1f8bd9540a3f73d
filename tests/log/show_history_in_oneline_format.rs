use crate::common::command::{
    commit_files, get_head_commit_sha, get_parent_commit_id, repository_dir, run_minigit_command,
    stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_history_in_oneline_format(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(dir, &[("a.txt", "a\n")], "Add a");
    commit_files(dir, &[("b.txt", "b\n")], "Add b\n\nwith details");

    let second = get_head_commit_sha(dir)?;
    let first = get_parent_commit_id(dir, &second)?;

    let stdout = stdout_of(&mut run_minigit_command(dir, &["log", "--oneline"]))?;

    assert_eq!(
        stdout,
        format!("{} Add b\n{} Add a\n", &second[..7], &first[..7])
    );

    Ok(())
}
