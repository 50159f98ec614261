//! Board rendering

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use kanban_board::board::BoardView;

/// One table column per board column, tasks stacked top to bottom
pub fn board_table(view: &BoardView) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(view.columns.iter().map(|column| {
        Cell::new(format!(
            "{} ({})\n{}",
            column.title,
            column.tasks.len(),
            column.id
        ))
    }));

    let depth = view.columns.iter().map(|c| c.tasks.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(view.columns.iter().map(|column| {
            column
                .tasks
                .get(row)
                .map(|task| Cell::new(format!("{}\n{}", task.content, task.id)))
                .unwrap_or_else(|| Cell::new(""))
        }));
    }

    table
}
