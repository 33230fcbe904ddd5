//! tenk dashboard - Interactive practice dashboard

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::error::{Result, TenkError};
use crate::tracker::Tracker;
use crate::tui::run_dashboard;
use crate::utils::format::format_hours;

#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Start with three sample skills
    #[arg(long)]
    pub demo: bool,
}

pub fn run(ctx: &AppContext, args: &DashboardArgs) -> Result<()> {
    if ctx.output_format != OutputFormat::Human {
        return Err(TenkError::ValidationFailed(
            "dashboard requires an interactive terminal (cannot use --robot or --output-format)"
                .to_string(),
        ));
    }
    if !ctx.environment.stdout_is_terminal {
        return Err(TenkError::Terminal(
            "stdout is not a terminal; use `tenk report` for scripted output".to_string(),
        ));
    }

    let tracker = Tracker::from_config(&ctx.config, args.demo);
    let summary = run_dashboard(tracker, &ctx.config)?;

    let mut layout = HumanLayout::new();
    layout
        .section("Session summary")
        .kv("Total hours", &format_hours(summary.total_hours))
        .kv("Skills", &summary.skill_count.to_string())
        .kv("Legends", &summary.legend_count.to_string());
    emit_human(layout);
    Ok(())
}
