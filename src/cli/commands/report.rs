//! tenk report - Replay scripted actions and print every skill's standing
//!
//! Nothing is persisted: the session exists only for the duration of the
//! command.

use std::str::FromStr;

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::core::skill::{SkillIcon, SkillId};
use crate::core::store::StoreSummary;
use crate::core::tier::{MASTERY_HOURS, Standing};
use crate::error::Result;
use crate::tracker::{Action, Outcome, Tracker};
use crate::utils::format::format_hours;

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Start from the three sample skills
    #[arg(long)]
    pub demo: bool,

    /// Add a skill: NAME or NAME:ICON (repeatable)
    #[arg(long = "skill", value_name = "NAME[:ICON]")]
    pub skills: Vec<SkillSpec>,

    /// Log manual hours: NAME=HOURS (repeatable, applied in order)
    #[arg(long = "log", value_name = "NAME=HOURS", allow_hyphen_values = true)]
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSpec {
    pub name: String,
    pub icon: Option<SkillIcon>,
}

impl FromStr for SkillSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some((name, icon)) = s.rsplit_once(':') {
            if let Ok(icon) = icon.parse::<SkillIcon>() {
                return Ok(Self {
                    name: name.to_string(),
                    icon: Some(icon),
                });
            }
        }
        Ok(Self {
            name: s.to_string(),
            icon: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub skill: String,
    pub hours: f64,
}

impl FromStr for LogEntry {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (skill, hours) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected NAME=HOURS, got {s:?}"))?;
        let hours = hours
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|err| format!("invalid hours in {s:?}: {err}"))?;
        Ok(Self {
            skill: skill.to_string(),
            hours,
        })
    }
}

#[derive(Debug, Serialize)]
struct SkillEntry {
    id: SkillId,
    name: String,
    icon: SkillIcon,
    today_hours: f64,
    #[serde(flatten)]
    standing: Standing,
}

#[derive(Debug, Serialize)]
struct Report {
    skills: Vec<SkillEntry>,
    summary: StoreSummary,
}

/// Replay the flags against a fresh session. Ignored actions turn into
/// warnings.
fn build_session(ctx: &AppContext, args: &ReportArgs) -> (Tracker, Vec<String>) {
    let mut tracker = Tracker::from_config(&ctx.config, args.demo);
    let mut warnings = Vec::new();

    for spec in &args.skills {
        let icon = spec.icon.unwrap_or(ctx.config.tracking.default_icon);
        let outcome = tracker.apply(Action::AddSkill {
            name: spec.name.clone(),
            icon,
        });
        if let Outcome::Ignored { reason } = outcome {
            warnings.push(format!("skill {:?} ignored: {reason}", spec.name));
        }
    }

    for entry in &args.logs {
        let Some(id) = tracker.store().find_by_name(&entry.skill).map(|s| s.id) else {
            warnings.push(format!("log for {:?} ignored: no such skill", entry.skill));
            continue;
        };
        let outcome = tracker.apply(Action::AddHours {
            id,
            hours: entry.hours,
        });
        if let Outcome::Ignored { reason } = outcome {
            warnings.push(format!(
                "log {}={} ignored: {reason}",
                entry.skill, entry.hours
            ));
        }
    }

    (tracker, warnings)
}

fn build_report(tracker: &Tracker) -> Report {
    let store = tracker.store();
    let now = tracker.now();
    Report {
        skills: store
            .iter()
            .map(|skill| SkillEntry {
                id: skill.id,
                name: skill.name.clone(),
                icon: skill.icon,
                today_hours: store.today_hours(skill.id, now),
                standing: skill.standing(),
            })
            .collect(),
        summary: store.summary(),
    }
}

pub fn run(ctx: &AppContext, args: &ReportArgs) -> Result<()> {
    let (tracker, warnings) = build_session(ctx, args);
    let report = build_report(&tracker);
    debug!(
        target: "report",
        skills = report.skills.len(),
        warnings = warnings.len(),
        "report built"
    );

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(report).with_warnings(warnings)),
        OutputFormat::Plain => {
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            for entry in &report.skills {
                println!(
                    "{}\t{}\t{}\t{:.1}",
                    entry.name,
                    entry.standing.hours,
                    entry.standing.tier.name,
                    entry.standing.progress_percent
                );
            }
            Ok(())
        }
        OutputFormat::Human => {
            emit_human(report_layout(&report, &warnings));
            Ok(())
        }
    }
}

fn report_layout(report: &Report, warnings: &[String]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("10,000 hours");

    if report.skills.is_empty() {
        layout.push_line("No skills yet. Add one with --skill NAME.");
        layout.blank();
    }

    for entry in &report.skills {
        layout
            .section(&format!("{} {}", entry.icon.glyph(), entry.name))
            .kv(
                "Hours",
                &format!(
                    "{} / {}",
                    format_hours(entry.standing.hours),
                    format_hours(MASTERY_HOURS)
                ),
            )
            .kv("Tier", entry.standing.tier.name)
            .kv(
                "Progress",
                &format!("{:.1}%", entry.standing.progress_percent),
            );
        if let (Some(next), Some(remaining)) =
            (entry.standing.next_tier, entry.standing.hours_to_next)
        {
            layout.kv(
                "Next tier",
                &format!("{} in {} h", next.name, format_hours(remaining)),
            );
        }
        layout.kv("Today", &format!("{:.1} h", entry.today_hours));
        layout.blank();
    }

    layout
        .section("Overall")
        .kv("Total hours", &format_hours(report.summary.total_hours))
        .kv("Skills", &report.summary.skill_count.to_string())
        .kv("Legends", &report.summary.legend_count.to_string());

    if !warnings.is_empty() {
        layout.blank().section("Warnings");
        for warning in warnings {
            layout.bullet(warning);
        }
    }
    layout
}
