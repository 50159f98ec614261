mod cli;
mod commands;
mod config;
mod exit_codes;
mod logging;
mod prompt;
mod render;

use clap::Parser;
use cli::Cli;
use config::{IdStrategy, KanbanConfig};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use kanban_board::{
    BoardPersistence, BoardStore, FileKeyValueStore, SequentialIdGenerator,
    UlidIdGenerator,
};
use prompt::TerminalConfirm;
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let config = match KanbanConfig::load(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return EXIT_ERROR;
        }
    };

    logging::configure_logging(&config.log_level);
    tracing::debug!(data_dir = %config.data_dir.display(), key = %config.storage_key, "opening board");

    let mut store = open_store(&config);

    let mut stdout = std::io::stdout();
    let code = match commands::execute(
        &cli.command,
        &mut store,
        TerminalConfirm::new(cli.yes),
        &mut stdout,
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };

    let save_errors = store.take_observer_errors();
    for error in &save_errors {
        eprintln!("Error: failed to save board: {error}");
    }
    if !save_errors.is_empty() && code == EXIT_SUCCESS {
        return EXIT_ERROR;
    }
    code
}

fn open_store(config: &KanbanConfig) -> BoardStore {
    let persistence = BoardPersistence::new(FileKeyValueStore::new(&config.data_dir))
        .with_key(config.storage_key.as_str());
    let store = BoardStore::load(persistence);

    match config.id_strategy {
        IdStrategy::Ulid => store.with_id_generator(UlidIdGenerator::new()),
        IdStrategy::Sequential => store.with_id_generator(SequentialIdGenerator::new()),
    }
}
