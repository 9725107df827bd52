//! Markr CLI application entry point
//!
//! This is the main executable for the markr bookmark manager. It saves
//! documents with a note and tags, and lists, searches, filters, pages,
//! exports and imports them.
//!
//! # Usage
//!
//! ```bash
//! # List the newest bookmarks (default command)
//! markr
//! markr list -s rust -t work -p 2
//!
//! # Save a document
//! markr save -T "The Book" -u https://doc.rust-lang.org/book/ -n "ch. 8" -t "rust, docs"
//!
//! # Complete a tag while typing
//! markr suggest "rust, do"
//!
//! # Back up and restore
//! markr export backup.json
//! markr import backup.json
//!
//! # Quiet mode (only output results)
//! markr -q list
//! ```
//!
//! # Configuration
//!
//! On first run, markr will prompt for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/markr/config.toml` on Linux).
//!
//! # Logging
//!
//! Diagnostics go to stderr. `-v` enables debug output for markr; the
//! `MARKR_LOG` variable takes a full filter directive and wins over `-v`.

use clap::CommandFactory;
use markr::{
    MarkrError,
    browser::ArgDocument,
    cli::{Cli, Commands},
    commands, completions,
    config::MarkrConfig,
    session::Session,
    store::SledStore,
    ui::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, MarkrError>;

/// Environment variable holding the log filter
const LOG_ENV: &str = "MARKR_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "markr=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the commands that work on the bookmark collection
fn handle_store_command(
    config: &MarkrConfig,
    cli: &Cli,
    command: Commands,
    quiet: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.database_path()?,
    };
    tracing::debug!(path = %db_path.display(), "opening store");

    let store = SledStore::open(&db_path)?;
    let mut session = Session::load(store, config.page_size)?;
    let assume_yes = quiet;

    match command {
        Commands::List { search, tag, page } => {
            commands::list(&mut session, &search, &tag, page, output, quiet)
        }
        Commands::Save {
            title,
            url,
            note,
            tags,
        } => {
            let active = ArgDocument::new(title, url);
            commands::save(&mut session, &active, &note, &tags, output, quiet)
        }
        Commands::Delete { id, yes } => {
            commands::delete(&mut session, id, yes || assume_yes, output)
        }
        Commands::Open { id } => {
            commands::open(&session, &ArgDocument::default(), id, output)
        }
        Commands::Tags => commands::tags(&session, output, quiet),
        Commands::Suggest { input, choose } => {
            commands::suggest(&mut session, &input, choose.as_deref(), output)
        }
        Commands::Export { path } => commands::export(&session, &path, output),
        Commands::Import { path, yes } => {
            commands::import(&mut session, &path, yes || assume_yes, output)
        }
        Commands::Config { .. } | Commands::Completions { .. } => Err(MarkrError::InvalidInput(
            "Command does not use the bookmark store".into(),
        )),
    }
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        completions::generate_static(shell, &mut cmd, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = MarkrConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &command {
        return commands::config(&mut config, command, output);
    }

    if quiet {
        let quiet_output = StdoutWriter::new(true);
        handle_store_command(&config, cli, command, quiet, &quiet_output)
    } else {
        handle_store_command(&config, cli, command, quiet, output)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let output = StdoutWriter::new(cli.quiet);
    match run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
