use crate::common::command::{
    commit_files, get_branch_commit_sha, get_commit_files, get_head_commit_sha,
    get_parent_commit_ids, init_repository_dir, minigit_commit, run_minigit_command, stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// `feature` deletes `a/2.txt` while `master` moves on untouched; the merge
/// removes the file and its now-empty directory
#[rstest]
fn merge_with_deleted_file(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_minigit_command(dir, &["branch", "feature"]).assert().success();
    run_minigit_command(dir, &["checkout", "feature"]).assert().success();
    std::fs::remove_file(dir.join("a").join("2.txt"))?;
    run_minigit_command(dir, &["add", "."]).assert().success();
    minigit_commit(dir, "Delete a/2.txt").assert().success();
    let feature = get_branch_commit_sha(dir, "feature")?;

    run_minigit_command(dir, &["checkout", "master"]).assert().success();
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two\n");

    commit_files(dir, &[("3.txt", "three\n")], "Add three");
    let master = get_head_commit_sha(dir)?;

    let stdout = stdout_of(&mut run_minigit_command(dir, &["merge", "feature"]))?;
    let merge = get_head_commit_sha(dir)?;

    assert_eq!(
        stdout,
        format!(
            "Merging branch 'feature' ({}) into master ({})\n\
             Removing file deleted in branch 'feature': a/2.txt\n\
             Merge successful. New commit: {}\n",
            &feature[..7],
            &master[..7],
            &merge[..7]
        )
    );

    assert!(!dir.join("a").join("2.txt").exists());
    assert!(!dir.join("a").exists());
    assert_eq!(read_file(&dir.join("3.txt")), "three\n");
    assert_eq!(get_commit_files(dir, &merge)?, vec!["1.txt", "3.txt"]);
    assert_eq!(get_parent_commit_ids(dir, &merge)?, vec![master, feature]);

    Ok(())
}
