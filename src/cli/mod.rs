//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "tenk",
    version,
    about = "Track practice hours on the road to 10,000",
    propagate_version = true
)]
pub struct Cli {
    /// Emit JSON (shorthand for --output-format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format for non-interactive commands
    #[arg(long, global = true, value_enum, env = "TENK_OUTPUT_FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// True when this invocation opens the dashboard, which is also the
    /// default with no subcommand.
    #[must_use]
    pub const fn runs_dashboard(&self) -> bool {
        matches!(self.command, None | Some(Commands::Dashboard(_)))
    }

    /// `--robot` wins over `--output-format`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            self.output_format.unwrap_or_default()
        }
    }
}
