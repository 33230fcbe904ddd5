//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod completions;
pub mod dashboard;
pub mod levels;
pub mod report;
pub mod tier;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard(dashboard::DashboardArgs),

    /// Show the tier and progress for an hour count
    Tier(tier::TierArgs),

    /// List mastery tiers and their thresholds
    Levels(levels::LevelsArgs),

    /// Build a session from flags and print every skill's standing
    Report(report::ReportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Dashboard(args) => dashboard::run(ctx, args),
        Commands::Tier(args) => tier::run(ctx, args),
        Commands::Levels(args) => levels::run(ctx, args),
        Commands::Report(args) => report::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}
