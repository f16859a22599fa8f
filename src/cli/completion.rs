// src/cli/completion.rs
use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Writes the completion script for `shell` (bash, zsh or fish).
///
/// ```bash
/// eval "$(urlvault completion bash)"
/// urlvault completion fish > ~/.config/fish/completions/urlvault.fish
/// ```
#[instrument(level = "debug", skip(out))]
pub fn generate_completion<W: Write>(shell: &str, out: &mut W) -> io::Result<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported shell: {}. Supported shells: bash, zsh, fish", shell),
            ))
        }
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    debug!("Generating {} completion for {}", shell, bin_name);
    generate(shell, &mut cmd, bin_name, out);
    Ok(())
}
