//! In-memory skill store.
//!
//! An ordered list of [`Skill`] records. Skills are only ever appended;
//! there is no removal, reorder, or rename. Operations that fail validation
//! return [`Rejected`] and leave the store untouched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::skill::{DailyStats, Skill, SkillIcon, SkillId};
use crate::core::tier::MASTERY_HOURS;
use crate::core::timer::TimerTransition;

/// Why an action was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejected {
    #[error("skill name is blank")]
    BlankName,
    #[error("hours must be a positive number")]
    NonPositiveHours,
    #[error("no such skill")]
    UnknownSkill,
    #[error("total hours would overflow")]
    HoursOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreSummary {
    pub total_hours: f64,
    pub skill_count: usize,
    pub legend_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SkillStore {
    skills: Vec<Skill>,
    track_daily: bool,
}

/// Calendar date used for daily buckets.
#[must_use]
pub fn bucket_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

impl SkillStore {
    #[must_use]
    pub const fn new(track_daily: bool) -> Self {
        Self {
            skills: Vec::new(),
            track_daily,
        }
    }

    /// Store pre-filled with three sample skills.
    #[must_use]
    pub fn with_demo_skills(track_daily: bool) -> Self {
        let mut store = Self::new(track_daily);
        for (name, hours, icon) in [
            ("Programming", 2450.0, SkillIcon::Code),
            ("Design", 780.0, SkillIcon::Palette),
            ("English", 4200.0, SkillIcon::Languages),
        ] {
            let mut skill = Skill::new(name, icon, track_daily);
            skill.hours = hours;
            store.skills.push(skill);
        }
        store
    }

    #[must_use]
    pub const fn tracks_daily(&self) -> bool {
        self.track_daily
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    fn get_mut(&mut self, id: SkillId) -> Result<&mut Skill, Rejected> {
        self.skills
            .iter_mut()
            .find(|skill| skill.id == id)
            .ok_or(Rejected::UnknownSkill)
    }

    /// First skill whose name matches, ignoring case and surrounding space.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Skill> {
        let wanted = name.trim().to_lowercase();
        self.skills
            .iter()
            .find(|skill| skill.name.to_lowercase() == wanted)
    }

    pub fn add_skill(&mut self, name: &str, icon: SkillIcon) -> Result<SkillId, Rejected> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejected::BlankName);
        }
        let skill = Skill::new(name, icon, self.track_daily);
        let id = skill.id;
        debug!(skill_id = %id, name, icon = %icon, "skill added");
        self.skills.push(skill);
        Ok(id)
    }

    /// Credit manually entered hours to `id`. Amounts that would push the
    /// store's total past `f64::MAX` are rejected.
    pub fn add_hours(
        &mut self,
        id: SkillId,
        hours: f64,
        now: DateTime<Utc>,
    ) -> Result<f64, Rejected> {
        if !(hours.is_finite() && hours > 0.0) {
            return Err(Rejected::NonPositiveHours);
        }
        if !(self.total_hours() + hours).is_finite() {
            return Err(Rejected::HoursOverflow);
        }
        let skill = self.get_mut(id)?;
        skill.credit(hours, bucket_date(now))?;
        debug!(skill_id = %id, hours, total = skill.hours, "hours added");
        Ok(skill.hours)
    }

    /// Start an idle timer or stop a running one, crediting the elapsed
    /// time on stop.
    pub fn toggle_timer(
        &mut self,
        id: SkillId,
        now: DateTime<Utc>,
    ) -> Result<TimerTransition, Rejected> {
        let skill = self.get_mut(id)?;
        let transition = skill.timer.toggle(now);
        match transition {
            TimerTransition::Started { at } => {
                debug!(skill_id = %id, started_at = %at, "timer started");
            }
            TimerTransition::Stopped { elapsed_hours } => {
                skill.credit(elapsed_hours, bucket_date(now))?;
                debug!(skill_id = %id, elapsed_hours, total = skill.hours, "timer stopped");
            }
        }
        Ok(transition)
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.skills.iter().map(|skill| skill.hours).sum()
    }

    /// Skills that reached the top tier.
    #[must_use]
    pub fn legend_count(&self) -> usize {
        self.skills
            .iter()
            .filter(|skill| skill.hours >= MASTERY_HOURS)
            .count()
    }

    #[must_use]
    pub fn running_count(&self) -> usize {
        self.skills
            .iter()
            .filter(|skill| skill.timer.is_running())
            .count()
    }

    #[must_use]
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            total_hours: self.total_hours(),
            skill_count: self.len(),
            legend_count: self.legend_count(),
        }
    }

    /// Hours credited to `id` on the calendar date of `now`.
    #[must_use]
    pub fn today_hours(&self, id: SkillId, now: DateTime<Utc>) -> f64 {
        self.get(id)
            .map_or(0.0, |skill| skill.hours_on(bucket_date(now)))
    }

    /// The last `days` days ending today, oldest first.
    #[must_use]
    pub fn recent_days(&self, id: SkillId, now: DateTime<Utc>, days: u32) -> Vec<(NaiveDate, f64)> {
        let today = bucket_date(now);
        self.get(id)
            .and_then(|skill| skill.daily.as_ref())
            .map_or_else(
                || DailyStats::default().window(today, days),
                |daily| daily.window(today, days),
            )
    }
}
