use anyhow::Result;
use clap::{Parser, Subcommand};
use minigit::areas::repository::Repository;
use minigit::artifacts::core::{PagerWriter, should_page};
use minigit::commands::porcelain::log::LogOptions;
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter
const LOG_FILTER_ENV: &str = "MINIGIT_LOG";

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control system",
    long_about = "A minimal version control system, written in Rust. \
    It keeps content-addressed snapshots of a single working tree, with branches, \
    first-parent history, three-way merges and line diffs.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the given files as blobs and stages them. \
        Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files on top of the current commit."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command shows the history of HEAD, following first parents only."
    )]
    Log {
        #[arg(long, help = "Show one commit per line")]
        oneline: bool,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "This command creates a branch at the current commit, or lists branches when no name is given."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command updates the working tree to match a branch or commit and moves HEAD. \
        Checking out a commit detaches HEAD."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit id")]
        target: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch",
        long_about = "This command performs a three-way merge of the given branch into the checked-out branch."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Show changes between commits or against the working tree",
        long_about = "With no revision, compares HEAD with the working tree. \
        With one, compares that revision with the working tree. With two, compares both revisions."
    )]
    Diff {
        #[arg(index = 1, help = "The old revision (defaults to HEAD)")]
        old: Option<String>,
        #[arg(index = 2, help = "The new revision (defaults to the working tree)")]
        new: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn open_repository(writer: Box<dyn std::io::Write>) -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::open(&pwd, writer)
}

/// Run a command with long output through the pager when interactive
fn with_pager(run: impl FnOnce(&Repository) -> Result<()>) -> Result<()> {
    if !should_page() {
        let repository = open_repository(Box::new(std::io::stdout()))?;
        return run(&repository);
    }

    let pager = Pager::new();
    let repository = open_repository(Box::new(PagerWriter::new(pager.clone())))?;
    run(&repository)?;
    drop(repository);

    minus::page_all(pager)?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.add(paths)?
        }
        Commands::Commit { message } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.commit(message.as_str())?
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };

            with_pager(|repository| repository.log(&opts))?
        }
        Commands::Branch { name } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.branch(name.as_deref())?
        }
        Commands::Checkout { target } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.checkout(target)?
        }
        Commands::Merge { branch } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.merge(branch)?
        }
        Commands::Diff { old, new } => {
            with_pager(|repository| repository.diff(old.as_deref(), new.as_deref()))?
        }
        Commands::CatFile { sha } => {
            let repository = open_repository(Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let repository = open_repository(Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?
        }
    }

    Ok(())
}
