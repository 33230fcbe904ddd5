//! tenk levels - The mastery tier table

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::core::tier::{LEVELS, MASTERY_HOURS, Tier, TierInfo};
use crate::error::Result;
use crate::utils::format::format_hours;

#[derive(Args, Debug, Default)]
pub struct LevelsArgs {}

#[derive(Debug, Serialize)]
struct LevelsReport {
    mastery_hours: f64,
    levels: Vec<TierInfo>,
}

fn all_tiers() -> impl Iterator<Item = Tier> {
    std::iter::once(Tier::Novice).chain(LEVELS)
}

pub fn run(ctx: &AppContext, _args: &LevelsArgs) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(LevelsReport {
            mastery_hours: MASTERY_HOURS,
            levels: all_tiers().map(Tier::info).collect(),
        })),
        OutputFormat::Plain => {
            for tier in all_tiers() {
                println!("{}\t{}", tier.name(), tier.threshold());
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.section("Mastery tiers");
            for tier in all_tiers() {
                layout.kv(
                    tier.name(),
                    &format!("{} h", format_hours(f64::from(tier.threshold()))),
                );
            }
            emit_human(layout);
            Ok(())
        }
    }
}
