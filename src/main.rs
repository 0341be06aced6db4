use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result};
use std::env;
use std::io::{self, IsTerminal};
use std::process;
use task_cli::{Format, Status, Store, Tracker};
use tracing::{Level, warn};

#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Task tracker CLI - keeps tasks in tasks.json in the current directory")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Update a task's description
    Update {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Delete a task
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Mark a task as done
    MarkDone {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// List tasks, optionally only those with one status
    List {
        /// One of: done, todo, in-progress
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove all done tasks
    ClearDone,

    /// Show version
    Version,
}

fn main() {
    // Setup tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .without_time()
        .with_ansi(io::stderr().is_terminal())
        .init();
    colored::control::set_override(io::stderr().is_terminal());

    // No arguments at all: show help like `help` does
    if env::args_os().len() <= 1 {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                warn!(error = ?io_err, "Failed to print usage message");
            }
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let outcome = match cli.command {
        Commands::Add { description } => open_tracker()?.add(&description.join(" "))?,
        Commands::Update { id, description } => {
            open_tracker()?.update(id.as_deref().unwrap_or_default(), &description.join(" "))?
        }
        Commands::Delete { id } => open_tracker()?.delete(id.as_deref().unwrap_or_default())?,
        Commands::MarkInProgress { id } => {
            open_tracker()?.set_status(id.as_deref().unwrap_or_default(), Status::InProgress)?
        }
        Commands::MarkDone { id } => open_tracker()?.set_status(id.as_deref().unwrap_or_default(), Status::Done)?,
        Commands::List { filter, json } => {
            let format = if json { Format::Json } else { Format::Human };
            let listing = open_tracker()?.list(filter.as_deref(), format)?;
            println!("{}", listing);
            return Ok(());
        }
        Commands::ClearDone => open_tracker()?.clear_done()?,
        Commands::Version => {
            println!("task-cli {}", env!("GIT_DESCRIBE"));
            return Ok(());
        }
    };

    println!("{}", outcome);
    Ok(())
}

/// Tracker over `tasks.json` in the current working directory
fn open_tracker() -> Result<Tracker> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(Tracker::new(Store::open(cwd)))
}
