//! Skill records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::store::Rejected;
use crate::core::tier::{Standing, Tier, tier_for};
use crate::core::timer::TimerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillId(Uuid);

impl SkillId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SkillId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SkillId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Cosmetic icon shown next to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SkillIcon {
    #[default]
    Star,
    Code,
    Palette,
    Languages,
    Music,
    Dumbbell,
    Book,
    Camera,
    Plane,
    Gamepad,
    Guitar,
    Pencil,
    Brush,
    Coffee,
    Heart,
    Trophy,
    Target,
    Rocket,
    Zap,
    Lightbulb,
}

impl SkillIcon {
    pub const ALL: [Self; 20] = [
        Self::Star,
        Self::Code,
        Self::Palette,
        Self::Languages,
        Self::Music,
        Self::Dumbbell,
        Self::Book,
        Self::Camera,
        Self::Plane,
        Self::Gamepad,
        Self::Guitar,
        Self::Pencil,
        Self::Brush,
        Self::Coffee,
        Self::Heart,
        Self::Trophy,
        Self::Target,
        Self::Rocket,
        Self::Zap,
        Self::Lightbulb,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Code => "code",
            Self::Palette => "palette",
            Self::Languages => "languages",
            Self::Music => "music",
            Self::Dumbbell => "dumbbell",
            Self::Book => "book",
            Self::Camera => "camera",
            Self::Plane => "plane",
            Self::Gamepad => "gamepad",
            Self::Guitar => "guitar",
            Self::Pencil => "pencil",
            Self::Brush => "brush",
            Self::Coffee => "coffee",
            Self::Heart => "heart",
            Self::Trophy => "trophy",
            Self::Target => "target",
            Self::Rocket => "rocket",
            Self::Zap => "zap",
            Self::Lightbulb => "lightbulb",
        }
    }

    /// Single-glyph rendering for terminals.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Star => "★",
            Self::Code => "⌨",
            Self::Palette => "🎨",
            Self::Languages => "🗣",
            Self::Music => "♪",
            Self::Dumbbell => "🏋",
            Self::Book => "📖",
            Self::Camera => "📷",
            Self::Plane => "✈",
            Self::Gamepad => "🎮",
            Self::Guitar => "🎸",
            Self::Pencil => "✎",
            Self::Brush => "🖌",
            Self::Coffee => "☕",
            Self::Heart => "♥",
            Self::Trophy => "🏆",
            Self::Target => "◎",
            Self::Rocket => "🚀",
            Self::Zap => "⚡",
            Self::Lightbulb => "💡",
        }
    }

    /// Neighbouring icon in [`Self::ALL`], wrapping at both ends.
    #[must_use]
    pub fn cycle(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|icon| *icon == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ALL[next]
    }
}

impl fmt::Display for SkillIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "code2" => return Ok(Self::Code),
            "gamepad2" => return Ok(Self::Gamepad),
            _ => {}
        }
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str() == wanted)
            .ok_or_else(|| format!("unknown icon {s:?}"))
    }
}

impl TryFrom<String> for SkillIcon {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Hours practiced per calendar day. One entry per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyStats(BTreeMap<NaiveDate, f64>);

impl DailyStats {
    pub fn add(&mut self, date: NaiveDate, hours: f64) {
        *self.0.entry(date).or_insert(0.0) += hours;
    }

    #[must_use]
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.0.get(&date).copied().unwrap_or(0.0)
    }

    /// `days` consecutive dates ending at `end`, oldest first, zero-filled.
    #[must_use]
    pub fn window(&self, end: NaiveDate, days: u32) -> Vec<(NaiveDate, f64)> {
        (0..days)
            .rev()
            .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
            .map(|date| (date, self.hours_on(date)))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub hours: f64,
    pub icon: SkillIcon,
    pub timer: TimerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyStats>,
}

impl Skill {
    /// A fresh skill with zero hours. Callers validate `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, icon: SkillIcon, track_daily: bool) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            hours: 0.0,
            icon,
            timer: TimerState::Idle,
            daily: track_daily.then(DailyStats::default),
        }
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        tier_for(self.hours)
    }

    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing::of(self.hours)
    }

    /// Whether `hours` more would still leave a finite total.
    #[must_use]
    pub fn can_credit(&self, hours: f64) -> bool {
        (self.hours + hours).is_finite()
    }

    /// Credit `hours` to the total and, when tracked, to `date`. Nothing
    /// changes if the total would stop being finite.
    pub(crate) fn credit(&mut self, hours: f64, date: NaiveDate) -> Result<(), Rejected> {
        if !self.can_credit(hours) {
            return Err(Rejected::HoursOverflow);
        }
        self.hours += hours;
        if let Some(daily) = self.daily.as_mut() {
            daily.add(date, hours);
        }
        Ok(())
    }

    #[must_use]
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.daily.as_ref().map_or(0.0, |daily| daily.hours_on(date))
    }
}
