// src/main.rs
use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};
use urlvault::cli::args::{Cli, Commands};
use urlvault::cli::error::CliError;
use urlvault::config::{generate_default_config, load_settings};
use urlvault::exitcode;
use urlvault::infrastructure::di::ServiceContainer;
use urlvault::util::helper::is_stderr_piped;

#[instrument]
fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug, cli.no_color);
    if cli.no_color {
        crossterm::style::force_color_output(false);
    }

    if cli.generate_config {
        println!("{}", generate_default_config());
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // use stderr as human output in order to make stdout output passable to downstream processes
    let color_choice = if cli.no_color || is_stderr_piped() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let stderr = StandardStream::stderr(color_choice);

    if !urlvault::cli::needs_services(&cli) {
        return match &cli.command {
            Some(Commands::Completion { shell }) => urlvault::cli::handle_completion(shell),
            _ => Cli::command().print_help().map_err(CliError::Io),
        };
    }

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(data_dir) = &cli.data_dir {
        debug!("Using --data-dir {}", data_dir.display());
        settings.data_dir = data_dir.to_string_lossy().into_owned();
    }

    // single composition root
    let services = ServiceContainer::new(&settings)
        .map_err(|e| CliError::Application(e.context("Failed to create service container")))?;

    urlvault::cli::execute_command_with_services(stderr, cli, &services)
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let noisy_modules = ["reqwest", "hyper_util", "rustls", "mio", "want", "h2"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
