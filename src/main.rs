//! tenk - 10,000 hours practice tracker
//!
//! Opens the dashboard by default; the other subcommands are one-shot.

use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tenk::Result;
use tenk::app::AppContext;
use tenk::cli::Cli;
use tenk::cli::commands::{self, Commands, dashboard::DashboardArgs};
use tenk::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.output_format().is_machine_readable() {
                let error_json = serde_json::json!({
                    "error": true,
                    "code": e.code(),
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(Commands::Completions(args)) = &cli.command {
        return commands::completions::run(args);
    }
    let ctx = AppContext::from_cli(cli)?;
    match &cli.command {
        Some(command) => commands::run(&ctx, command),
        None => commands::dashboard::run(&ctx, &DashboardArgs::default()),
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,tenk=info",
        1 => "info,tenk=debug",
        2 => "debug,tenk=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // The dashboard owns the terminal, so its logs go to a file.
    let (writer, ansi) = if cli.runs_dashboard() {
        (dashboard_log_writer(), false)
    } else {
        (BoxMakeWriter::new(std::io::stderr), true)
    };

    if cli.output_format().is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_ansi(ansi).with_writer(writer))
            .init();
    }
}

fn dashboard_log_writer() -> BoxMakeWriter {
    let file = Config::dashboard_log_path().and_then(|path| {
        fs::create_dir_all(path.parent()?).ok()?;
        OpenOptions::new().create(true).append(true).open(&path).ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    }
}
