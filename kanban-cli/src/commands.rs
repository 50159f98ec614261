//! Subcommand handlers

use crate::cli::{ColumnCommands, Commands, TaskCommands};
use crate::exit_codes::{EXIT_DECLINED, EXIT_SUCCESS};
use crate::render::board_table;
use anyhow::Result;
use kanban_board::{BoardIntents, BoardStore, Confirm, IntentOutcome};
use std::io::Write;

/// Run one subcommand against the store, writing user-facing output to `out`.
///
/// Returns the exit code; errors are left to the caller to report.
pub fn execute(
    command: &Commands,
    store: &mut BoardStore,
    confirm: impl Confirm,
    out: &mut dyn Write,
) -> Result<i32> {
    match command {
        Commands::Show { json } => {
            let view = store.view();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                writeln!(out, "{}", board_table(&view))?;
            }
            Ok(EXIT_SUCCESS)
        }
        Commands::Task { command } => task(command, BoardIntents::new(store, confirm), out),
        Commands::Column { command } => column(command, BoardIntents::new(store, confirm), out),
        Commands::Reset => {
            let outcome = BoardIntents::new(store, confirm).reset_board()?;
            finish(outcome, out, |out, discarded| {
                writeln!(out, "Board reset ({discarded} tasks discarded)")
            })
        }
    }
}

fn task<C: Confirm>(
    command: &TaskCommands,
    mut intents: BoardIntents<'_, C>,
    out: &mut dyn Write,
) -> Result<i32> {
    match command {
        TaskCommands::Add { column, content } => {
            let task = intents.add_task(column.as_str(), content)?;
            writeln!(out, "Added task {} to {}", task.id, column)?;
        }
        TaskCommands::Edit { task, content } => match intents.edit_task(task.as_str(), content)? {
            Some(edited) => writeln!(out, "Updated task {}", edited.id)?,
            None => writeln!(out, "No task {task}, nothing changed")?,
        },
        TaskCommands::Rm { task, column } => {
            let outcome = intents.remove_task(task.as_str(), column.as_str())?;
            return finish(outcome, out, |out, removed| {
                if removed.task || removed.unlinked {
                    writeln!(out, "Deleted task {task}")
                } else {
                    writeln!(out, "No task {task}, nothing changed")
                }
            });
        }
        TaskCommands::Mv { task, from, to } => {
            match intents.move_task(task.as_str(), from.as_str(), to.as_str())? {
                Some(moved) => match moved.index {
                    Some(index) => writeln!(
                        out,
                        "Moved task {} to {} (position {})",
                        moved.id,
                        moved.column,
                        index + 1
                    )?,
                    None => writeln!(out, "Moved task {} to {}", moved.id, moved.column)?,
                },
                None => writeln!(out, "Task {task} is already in {to}")?,
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

fn column<C: Confirm>(
    command: &ColumnCommands,
    mut intents: BoardIntents<'_, C>,
    out: &mut dyn Write,
) -> Result<i32> {
    match command {
        ColumnCommands::Add { title } => {
            let column = intents.add_column(title)?;
            writeln!(out, "Added column {} ({})", column.title, column.id)?;
        }
        ColumnCommands::Rename { column, title } => {
            let renamed = intents.rename_column(column.as_str(), title)?;
            writeln!(out, "Renamed {} to {}", renamed.id, renamed.title)?;
        }
        ColumnCommands::Rm { column } => {
            let outcome = intents.remove_column(column.as_str())?;
            return finish(outcome, out, |out, removed| {
                if removed.removed {
                    writeln!(
                        out,
                        "Deleted column {column} and {} task(s)",
                        removed.tasks.len()
                    )
                } else {
                    writeln!(out, "No column {column}, nothing changed")
                }
            });
        }
    }
    Ok(EXIT_SUCCESS)
}

fn finish<T>(
    outcome: IntentOutcome<T>,
    out: &mut dyn Write,
    report: impl FnOnce(&mut dyn Write, T) -> std::io::Result<()>,
) -> Result<i32> {
    match outcome {
        IntentOutcome::Done(value) => {
            report(out, value)?;
            Ok(EXIT_SUCCESS)
        }
        IntentOutcome::Declined => {
            writeln!(out, "Cancelled")?;
            Ok(EXIT_DECLINED)
        }
    }
}
