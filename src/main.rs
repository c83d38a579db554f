use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result};
use std::path::PathBuf;
use std::process;
use tasklist::ui::{self, AssumeYes, Notify, TerminalNotice, TerminalPrompt};
use tasklist::{Error, FileStorage, TaskFilter, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Single-user task list with filtering, live counts, and snapshot persistence")]
#[command(version)]
struct Cli {
    /// Path to the storage directory (default: platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },

    /// Show tasks and counts
    List {
        /// Restrict the view to all, active, or completed tasks
        #[arg(short, long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },

    /// Flip completion on a task
    Toggle {
        /// Task id as shown by `list`
        id: i64,
    },

    /// Delete a task
    Delete {
        /// Task id as shown by `list`
        id: i64,
    },

    /// Delete all completed tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show counts only
    Stats,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dir = cli.store_path.unwrap_or_else(FileStorage::default_dir);
    let storage = FileStorage::open(&dir).context("Failed to open storage directory")?;
    let mut store = TaskStore::open(storage);

    match cli.command {
        Commands::Add { text } => match store.add_task(&text) {
            Ok(_) => render(&store),
            Err(err @ Error::EmptyText) => {
                TerminalNotice.notify("Please enter a task");
                process::exit(err.exit_code());
            }
            Err(err) => return Err(err.into()),
        },
        Commands::List { filter } => {
            store.set_filter(filter);
            render(&store);
        }
        Commands::Toggle { id } => {
            store.toggle_task(id)?;
            render(&store);
        }
        Commands::Delete { id } => {
            store.delete_task(id)?;
            render(&store);
        }
        Commands::Clear { yes } => {
            let removed = if yes {
                store.clear_completed(&mut AssumeYes)?
            } else {
                store.clear_completed(&mut TerminalPrompt)?
            };
            if removed > 0 {
                println!("Removed {} completed task{}", removed, if removed == 1 { "" } else { "s" });
            }
            render(&store);
        }
        Commands::Stats => render_stats(&store),
    }

    Ok(())
}

/// Redraw the visible list and counts after re-reading the store
fn render(store: &TaskStore<FileStorage>) {
    let visible = store.visible_tasks();

    if visible.is_empty() {
        println!("{}", "Nothing here yet. Add a task to get started.".dimmed());
    } else {
        for task in &visible {
            let text = ui::sanitize_text(&task.text);
            if task.completed {
                let line = format!("[x] {:>13}  {}", task.id, text);
                println!("{}", line.dimmed().strikethrough());
            } else {
                println!("[ ] {:>13}  {}", task.id, text);
            }
        }
    }

    render_stats(store);
}

fn render_stats(store: &TaskStore<FileStorage>) {
    let stats = store.stats();
    let line = format!(
        "{} total, {} active, {} completed",
        stats.total, stats.active, stats.completed
    );
    println!("{}", line.blue());
}
