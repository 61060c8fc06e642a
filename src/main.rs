mod render;
mod repl;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use meetbook_core::meetbook_config::MeetbookConfig;
use meetbook_core::schedule::read_schedule;
use meetbook_core::{Dispatcher, MeetingStore};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "meetbook")]
#[command(about = "Schedule meetings from the command line")]
#[command(long_about = "Reads one command per line from stdin:\n\n  \
    A <description> <month> <day> <hour>   add a meeting\n  \
    D <month> <day> <hour>                 delete a meeting\n  \
    L                                      list meetings\n  \
    W <file>                               save meetings to a file\n  \
    O <file>                               load meetings from a file\n  \
    Q                                      quit")]
struct Cli {
    /// Config file to use instead of ~/.config/meetbook/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Schedule file to load before reading commands (overrides `autoload`)
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Only print listings, not the success marker
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => MeetbookConfig::load_from(path),
        None => MeetbookConfig::load(),
    }
    .context("Failed to load configuration")?;

    let color = config.color && !cli.no_color;
    let out_color = color && io::stdout().is_terminal();
    let err_color = color && io::stderr().is_terminal();

    let store = initial_store(cli.load.or_else(|| config.autoload_path()), err_color);
    let mut dispatcher = Dispatcher::with_store(store).with_max_line_length(config.max_line_length);

    let options = repl::ReplOptions {
        color: out_color,
        error_color: err_color,
        quiet: cli.quiet,
    };

    repl::run(
        &mut dispatcher,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        options,
    )
    .context("Failed to read commands")?;

    Ok(())
}

/// `-v` flags take precedence over `RUST_LOG`; without either only warnings
/// are shown.
fn init_logger(verbose: u8) {
    let mut builder = match verbose {
        0 => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
        1 => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(log::LevelFilter::Info);
            builder
        }
        _ => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(log::LevelFilter::Debug);
            builder
        }
    };

    builder.target(env_logger::Target::Stderr).init();
}

/// Load the startup schedule, if any. A file that cannot be loaded is
/// reported and the session starts empty.
fn initial_store(path: Option<PathBuf>, color: bool) -> MeetingStore {
    let mut store = MeetingStore::new();

    let Some(path) = path else {
        return store;
    };

    match read_schedule(&path) {
        Ok(meetings) => {
            log::info!("Autoloaded {} meetings from {}", meetings.len(), path.display());
            store.replace(meetings);
        }
        Err(e) => {
            let message = format!("Skipping autoload: {}", e);
            if color {
                eprintln!("{}", message.yellow());
            } else {
                eprintln!("{}", message);
            }
        }
    }

    store
}
