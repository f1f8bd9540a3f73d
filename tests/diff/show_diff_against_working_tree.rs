use crate::common::command::{
    get_head_commit_sha, init_repository_dir, repository_dir, run_minigit_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_against_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno\n".to_string()));
    std::fs::remove_file(dir.join("a").join("2.txt"))?;
    write_file(FileSpec::new(dir.join("new.txt"), "fresh\n".to_string()));

    let stdout = stdout_of(&mut run_minigit_command(dir, &["diff"]))?;

    let expected = format!(
        "Comparing working directory against commit {}:\n\
         *** Modified: 1.txt\n\
         --- a/1.txt\n\
         +++ b/1.txt\n\
         - one\n\
         + uno\n\
         \n\
         --- Removed: a/2.txt\n\
         --- a/a/2.txt\n\
         +++ b/a/2.txt\n\
         - two\n\
         \n\
         +++ Added: new.txt\n\
         --- a/new.txt\n\
         +++ b/new.txt\n\
         + fresh\n\
         \n",
        &head[..7]
    );
    assert_eq!(stdout, expected);

    // diff never touches the object store
    let objects_before = count_objects(dir);
    run_minigit_command(dir, &["diff"]).assert().success();
    assert_eq!(count_objects(dir), objects_before);

    Ok(())
}

#[rstest]
fn show_empty_diff_for_clean_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_minigit_command(dir, &["diff"])
        .assert()
        .success()
        .stdout(predicate::eq(format!(
            "Comparing working directory against commit {}:\n",
            &head[..7]
        )));

    Ok(())
}

#[rstest]
fn show_diff_with_no_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    run_minigit_command(dir, &["diff"])
        .assert()
        .success()
        .stdout(predicate::eq("No commits to compare\n"));

    Ok(())
}

fn count_objects(dir: &std::path::Path) -> usize {
    walkdir::WalkDir::new(dir.join(".minigit").join("objects"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}
