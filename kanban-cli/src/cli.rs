use crate::config::{ConfigOverrides, IdStrategy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "A single kanban board in your terminal")]
#[command(long_about = "
kanban keeps one board of ordered columns holding ordered tasks. The board is
saved after every change and restored on the next run; a fresh install starts
from a small sample board.

Global arguments can be used with any command:
  --data-dir    Directory the board is stored in
  --log-level   Log filter (error, warn, info, debug, trace)
  --yes         Confirm destructive actions without asking

Example usage:
  kanban show                                 # Render the board
  kanban task add column-1 \"Brot kaufen\"      # Add a task to a column
  kanban task mv task-2 column-1 column-2     # Move a task between columns
  kanban column rm column-3 --yes             # Delete a column and its tasks
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the board data
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key the board is stored under
    #[arg(long, global = true, value_name = "KEY")]
    pub storage_key: Option<String>,

    /// Log filter directive
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// How new task and column ids are generated
    #[arg(long, global = true, value_enum)]
    pub id_strategy: Option<IdStrategy>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Flags that take precedence over every configuration source
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            storage_key: self.storage_key.clone(),
            log_level: self.log_level.clone(),
            id_strategy: self.id_strategy,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the board
    Show {
        /// Print the board as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Task commands
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Column commands
    Column {
        #[command(subcommand)]
        command: ColumnCommands,
    },
    /// Replace the board with the sample board
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task to the end of a column
    Add {
        /// Column to add the task to
        column: String,
        /// Task text
        content: String,
    },
    /// Replace a task's text
    Edit {
        /// Task to edit
        task: String,
        /// New task text
        content: String,
    },
    /// Delete a task
    #[command(alias = "remove")]
    Rm {
        /// Task to delete
        task: String,
        /// Column the task sits in
        column: String,
    },
    /// Move a task to the end of another column
    #[command(alias = "move")]
    Mv {
        /// Task to move
        task: String,
        /// Column the task sits in
        from: String,
        /// Column to move it to
        to: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// Append a column
    Add {
        /// Column title
        title: String,
    },
    /// Change a column's title
    Rename {
        /// Column to rename
        column: String,
        /// New title
        title: String,
    },
    /// Delete a column together with its tasks
    #[command(alias = "remove")]
    Rm {
        /// Column to delete
        column: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kanban", "column", "rm", "column-1", "--yes", "--data-dir", "/tmp/board",
        ])
        .unwrap();

        assert!(cli.yes);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/board")));
        assert!(matches!(
            cli.command,
            Commands::Column {
                command: ColumnCommands::Rm { ref column }
            } if column == "column-1"
        ));
    }

    #[test]
    fn test_move_alias() {
        let cli =
            Cli::try_parse_from(["kanban", "task", "move", "task-2", "column-1", "column-2"])
                .unwrap();
        match cli.command {
            Commands::Task {
                command: TaskCommands::Mv { task, from, to },
            } => {
                assert_eq!(task, "task-2");
                assert_eq!(from, "column-1");
                assert_eq!(to, "column-2");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "kanban",
            "--storage-key",
            "work",
            "--id-strategy",
            "sequential",
            "show",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.storage_key.as_deref(), Some("work"));
        assert_eq!(overrides.id_strategy, Some(IdStrategy::Sequential));
        assert_eq!(overrides.data_dir, None);
    }
}
