//! tenk tier - Tier and progress for an hour count

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::core::tier::Standing;
use crate::error::{Result, TenkError};
use crate::utils::format::format_hours;

#[derive(Args, Debug)]
pub struct TierArgs {
    /// Accumulated practice hours
    #[arg(allow_negative_numbers = true)]
    pub hours: f64,
}

pub fn run(ctx: &AppContext, args: &TierArgs) -> Result<()> {
    if !(args.hours.is_finite() && args.hours >= 0.0) {
        return Err(TenkError::ValidationFailed(format!(
            "hours must be a non-negative number, got {}",
            args.hours
        )));
    }

    let standing = Standing::of(args.hours);
    debug!(target: "tier", hours = args.hours, tier = %standing.tier.name, "tier lookup");

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(standing)),
        OutputFormat::Plain => {
            println!(
                "{}\t{:.1}\t{}\t{}",
                standing.tier.name,
                standing.progress_percent,
                standing.next_tier.map_or("-", |tier| tier.name),
                standing
                    .hours_to_next
                    .map_or_else(|| "-".to_string(), format_hours),
            );
            Ok(())
        }
        OutputFormat::Human => {
            emit_human(standing_layout(&standing));
            Ok(())
        }
    }
}

fn standing_layout(standing: &Standing) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .title(&format!("{} h", format_hours(standing.hours)))
        .kv(
            "Tier",
            &format!(
                "{} ({} h)",
                standing.tier.name,
                format_hours(f64::from(standing.tier.threshold))
            ),
        );
    match (standing.next_tier, standing.hours_to_next) {
        (Some(next), Some(remaining)) => {
            layout
                .kv(
                    "Next tier",
                    &format!("{} ({} h)", next.name, format_hours(f64::from(next.threshold))),
                )
                .kv("Hours to go", &format_hours(remaining));
        }
        _ => {
            layout.kv("Next tier", "none, top tier reached");
        }
    }
    layout.kv("Progress", &format!("{:.1}%", standing.progress_percent));
    layout
}
