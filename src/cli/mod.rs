// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::entry_commands::{AddArgs, EditArgs, ListArgs};
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;
use termcolor::StandardStream;

pub mod args;
pub mod completion;
pub mod display;
pub mod entry_commands;
pub mod error;
pub mod view_commands;
pub mod vocabulary_commands;

pub fn execute_command_with_services(
    mut stderr: StandardStream,
    cli: Cli,
    services: &ServiceContainer,
) -> CliResult<()> {
    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::Add {
            url,
            title,
            category,
            tags,
            comment,
            no_web,
        } => entry_commands::add(
            services,
            AddArgs {
                url,
                title,
                category,
                tags,
                comment,
                no_web,
            },
        ),
        Commands::Edit {
            id,
            url,
            title,
            category,
            tags,
            comment,
            fetch_title,
        } => entry_commands::edit(
            services,
            &id,
            EditArgs {
                url,
                title,
                category,
                tags,
                comment,
                fetch_title,
            },
        ),
        Commands::Delete { ids, yes } => entry_commands::delete(services, &ids, yes),
        Commands::List {
            query,
            category,
            tags,
            sort,
            asc,
            desc,
            limit,
            json,
            ids_only,
        } => entry_commands::list(
            &mut stderr,
            services,
            ListArgs {
                query,
                category,
                tags,
                sort,
                asc,
                desc,
                limit,
                json,
                ids_only,
            },
        ),
        Commands::Show { ids } => entry_commands::show(&mut stderr, services, &ids),
        Commands::Open { id } => entry_commands::open(services, &id),
        Commands::Copy { id } => entry_commands::copy(services, &id),
        Commands::FetchTitle { url } => entry_commands::fetch_title(services, &url),
        Commands::Sort { column } => view_commands::sort(services, &column),
        Commands::Columns { set, reset } => view_commands::columns(services, set.as_deref(), reset),
        Commands::Category { action } => vocabulary_commands::category(services, action),
        Commands::Tag { action } => vocabulary_commands::tag(services, action),
        Commands::Completion { shell } => handle_completion(&shell),
    }
}

/// True for commands that never touch the vault
pub fn needs_services(cli: &Cli) -> bool {
    !matches!(cli.command, None | Some(Commands::Completion { .. }))
}

pub fn handle_completion(shell: &str) -> CliResult<()> {
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for urlvault");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(urlvault completion bash)\"                  # one-time use");
            eprintln!("# - urlvault completion bash >> ~/.bashrc                 # add to bashrc");
            eprintln!("#");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for urlvault");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(urlvault completion zsh)\"                   # one-time use");
            eprintln!("# - urlvault completion zsh > ~/.zfunc/_urlvault          # save to fpath directory");
            eprintln!("#");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for urlvault");
            eprintln!("# - urlvault completion fish > ~/.config/fish/completions/urlvault.fish");
            eprintln!("#");
        }
        _ => {}
    }

    completion::generate_completion(shell, &mut std::io::stdout()).map_err(|e| {
        CliError::CommandFailed(format!("Failed to generate completion script: {}", e))
    })
}
