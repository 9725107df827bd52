//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for markr using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Search, filter and page through bookmarks (default)
//! - **save**: Bookmark a document with a note and tags
//! - **delete**: Remove a bookmark by id
//! - **open**: Open a bookmark's address in the default viewer
//! - **tags**: List the tags in use
//! - **suggest**: Complete the last tag of a comma-separated tag list
//! - **export** / **import**: JSON backups of the whole collection
//! - **config**: Read and change settings
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use markr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["markr", "list", "-s", "rust", "-p", "2"]);
//! assert!(matches!(cli.get_command(), Commands::List { page: 2, .. }));
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::backup::DEFAULT_BACKUP_FILE;

/// Save, tag, search and back up bookmarks
#[derive(Parser, Debug)]
#[command(name = "markr", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log diagnostics to stderr (MARKR_LOG overrides the filter)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use the store at this path instead of the configured one
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List bookmarks, newest first (default)
    #[command(visible_alias = "ls")]
    List {
        /// Only show bookmarks whose title, link, note or tags contain this text
        #[arg(short = 's', long = "search", value_name = "KEYWORD", default_value = "")]
        search: String,

        /// Only show bookmarks carrying this exact tag
        #[arg(short = 't', long = "tag", value_name = "TAG", default_value = "")]
        tag: String,

        /// Page to show
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Bookmark a document
    #[command(visible_alias = "s")]
    Save {
        /// Title of the document
        #[arg(short = 'T', long = "title")]
        title: Option<String>,

        /// Address of the document
        #[arg(short = 'u', long = "url")]
        url: Option<String>,

        /// Free-text note
        #[arg(short = 'n', long = "note", default_value = "")]
        note: String,

        /// Comma-separated tags (e.g. "work, rust")
        #[arg(short = 't', long = "tags", value_name = "TAGS", default_value = "")]
        tags: String,
    },

    /// Delete a bookmark
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the bookmark to delete
        id: i64,

        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Open a bookmark's address
    #[command(visible_alias = "o")]
    Open {
        /// Id of the bookmark to open
        id: i64,
    },

    /// List the tags in use
    Tags,

    /// Suggest completions for the last tag in a comma-separated list
    Suggest {
        /// Tag text typed so far (e.g. "work, pe")
        #[arg(value_name = "TEXT")]
        input: String,

        /// Pick this suggestion and print the completed text
        #[arg(short = 'c', long = "choose", value_name = "TAG")]
        choose: Option<String>,
    },

    /// Export all bookmarks to a JSON backup
    Export {
        /// Destination file, `-` for stdout
        #[arg(value_name = "FILE", default_value = DEFAULT_BACKUP_FILE)]
        path: PathBuf,
    },

    /// Replace all bookmarks with the content of a JSON backup
    Import {
        /// Backup file to read
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=10)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., page_size)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse arguments from the process command line
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse arguments from an explicit list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            search: String::new(),
            tag: String::new(),
            page: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_first_page_listing() {
        let cli = Cli::parse_from(["markr"]);
        assert_eq!(
            cli.get_command(),
            Commands::List {
                search: String::new(),
                tag: String::new(),
                page: 1
            }
        );
    }

    #[test]
    fn test_parse_save() {
        let cli = Cli::parse_from([
            "markr", "save", "-T", "Example", "-u", "https://example.com", "-n", "later", "-t",
            "a, b, a",
        ]);
        match cli.get_command() {
            Commands::Save { title, url, note, tags } => {
                assert_eq!(title.as_deref(), Some("Example"));
                assert_eq!(url.as_deref(), Some("https://example.com"));
                assert_eq!(note, "later");
                assert_eq!(tags, "a, b, a");
            }
            other => panic!("Expected Save, got {other:?}"),
        }
    }

    #[test]
    fn test_save_without_url_still_parses() {
        let cli = Cli::parse_from(["markr", "s", "-T", "Example"]);
        assert!(matches!(cli.get_command(), Commands::Save { url: None, .. }));
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::parse_from(["markr", "ls", "--search", "rust", "--tag", "work", "--page", "3"]);
        assert_eq!(
            cli.get_command(),
            Commands::List {
                search: "rust".into(),
                tag: "work".into(),
                page: 3
            }
        );
    }

    #[test]
    fn test_export_default_path() {
        let cli = Cli::parse_from(["markr", "export"]);
        assert_eq!(
            cli.get_command(),
            Commands::Export {
                path: PathBuf::from("bookmarks-backup.json")
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["markr", "tags", "-q", "--db", "/tmp/markr_db", "-v"]);
        assert!(cli.quiet);
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/markr_db")));
    }

    #[test]
    fn test_parse_suggest_with_choice() {
        let cli = Cli::parse_from(["markr", "suggest", "work, pe", "--choose", "perf"]);
        assert_eq!(
            cli.get_command(),
            Commands::Suggest {
                input: "work, pe".into(),
                choose: Some("perf".into())
            }
        );
    }

    #[test]
    fn test_delete_requires_numeric_id() {
        assert!(Cli::try_parse_from(["markr", "delete", "abc"]).is_err());
        let cli = Cli::parse_from(["markr", "rm", "17", "-y"]);
        assert_eq!(cli.get_command(), Commands::Delete { id: 17, yes: true });
    }
}
