//! glacier - categorized notes with rich-text content

pub mod cli;
pub mod domain;
pub mod repo;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_category, handle_note, handle_tree},
};
use store::Store;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "glacier",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());
    let store = Store::open(&db_path)
        .with_context(|| format!("failed to open notes database at {}", db_path.display()))?;

    let result = match &cli.command {
        Command::Category(command) => handle_category(command, &store),
        Command::Note(command) => handle_note(command, &store),
        Command::Tree(args) => handle_tree(args, &store),
        Command::Completions(_) => Ok(()),
    };

    let closed = store.close().context("failed to close notes database");
    result?;
    closed
}

/// Routes `log` output to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
