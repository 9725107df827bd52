//! Tag autocompletion and shell completion support for markr
//!
//! - [`matcher`]: pure suggestion functions over the tag index
//! - [`state`]: the suggestion list as a state machine
//! - [`generate_static`]: shell completion scripts for the CLI itself

pub mod matcher;
pub mod state;

pub use matcher::{apply_choice, suggest, trailing_fragment};
pub use state::{PointerTarget, SuggestionState, TagAutocomplete, render};

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Destination for the script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_generate_bash_script_mentions_binary() {
        let mut cmd = crate::cli::Cli::command();
        let mut buf = Vec::new();
        generate_static(Shell::Bash, &mut cmd, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("markr"));
    }
}
