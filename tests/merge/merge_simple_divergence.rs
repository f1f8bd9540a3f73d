use crate::common::command::{
    commit_files, get_branch_commit_sha, get_head_commit_sha, get_parent_commit_ids,
    repository_dir, run_minigit_command, stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///
///       A (base)
///      / \
///     B   C
///     |   |
///  master feature
///
/// The merge commit has B then C as parents and carries both sides' changes.
#[rstest]
fn merge_simple_divergence(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(
        dir,
        &[
            ("base.txt", "base content\n"),
            ("left.txt", "initial\n"),
            ("right.txt", "initial\n"),
        ],
        "Commit A - base",
    );
    run_minigit_command(dir, &["branch", "feature"]).assert().success();

    commit_files(dir, &[("left.txt", "initial\nmaster change\n")], "Commit B");
    let b = get_head_commit_sha(dir)?;

    run_minigit_command(dir, &["checkout", "feature"]).assert().success();
    commit_files(
        dir,
        &[
            ("right.txt", "initial\nfeature change\n"),
            ("feature.txt", "feature only\n"),
        ],
        "Commit C",
    );
    let c = get_branch_commit_sha(dir, "feature")?;

    run_minigit_command(dir, &["checkout", "master"]).assert().success();

    let stdout = stdout_of(&mut run_minigit_command(dir, &["merge", "feature"]))?;
    let merge = get_head_commit_sha(dir)?;

    assert_eq!(
        stdout,
        format!(
            "Merging branch 'feature' ({}) into master ({})\n\
             Taking new file from branch 'feature': feature.txt\n\
             Taking changes from branch 'feature' for: right.txt\n\
             Merge successful. New commit: {}\n",
            &c[..7],
            &b[..7],
            &merge[..7]
        )
    );

    assert_eq!(get_parent_commit_ids(dir, &merge)?, vec![b, c.clone()]);
    assert_eq!(read_file(&dir.join("left.txt")), "initial\nmaster change\n");
    assert_eq!(read_file(&dir.join("right.txt")), "initial\nfeature change\n");
    assert_eq!(read_file(&dir.join("feature.txt")), "feature only\n");
    // the feature branch is untouched
    assert_eq!(get_branch_commit_sha(dir, "feature")?, c);

    let commit = stdout_of(&mut run_minigit_command(dir, &["cat-file", "-p", &merge]))?;
    assert!(commit.ends_with("\n\nMerge branch 'feature'"));
    assert!(commit.lines().any(|line| line.starts_with("file ") && line.ends_with(" feature.txt")));

    Ok(())
}

/// Merging a branch that is behind HEAD still records a merge commit
#[rstest]
fn merge_ancestor_branch(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_files(dir, &[("a.txt", "a\n")], "A");
    run_minigit_command(dir, &["branch", "old"]).assert().success();
    let a = get_head_commit_sha(dir)?;
    commit_files(dir, &[("a.txt", "a changed\n")], "B");
    let b = get_head_commit_sha(dir)?;

    let stdout = stdout_of(&mut run_minigit_command(dir, &["merge", "old"]))?;
    assert!(stdout.contains("Merge successful"));

    let merge = get_head_commit_sha(dir)?;
    assert_eq!(get_parent_commit_ids(dir, &merge)?, vec![b, a]);
    assert_eq!(read_file(&dir.join("a.txt")), "a changed\n");

    Ok(())
}
