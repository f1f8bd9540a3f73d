use crate::common::command::{commit_files, repository_dir, run_minigit_command, stdout_of};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

/// A path absent from the base and added on both sides keeps our version
#[rstest]
fn merge_files_added_on_both_sides(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(dir, &[("base.txt", "base\n")], "Base");
    run_minigit_command(dir, &["branch", "feature"]).assert().success();
    commit_files(
        dir,
        &[("same.txt", "identical\n"), ("added.txt", "ours\n")],
        "Ours",
    );

    run_minigit_command(dir, &["checkout", "feature"]).assert().success();
    commit_files(
        dir,
        &[("same.txt", "identical\n"), ("added.txt", "theirs\n")],
        "Theirs",
    );
    run_minigit_command(dir, &["checkout", "master"]).assert().success();

    let stdout = stdout_of(&mut run_minigit_command(dir, &["merge", "feature"]))?;

    assert!(!stdout.contains("CONFLICT"));
    assert!(!stdout.contains("added.txt"));
    assert!(!stdout.contains("same.txt"));
    assert!(stdout.contains("Merge successful"));
    assert_eq!(read_file(&dir.join("added.txt")), "ours\n");
    assert_eq!(read_file(&dir.join("same.txt")), "identical\n");

    Ok(())
}
