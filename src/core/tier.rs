//! Mastery tiers and progress toward 10,000 hours.
//!
//! The tier table is fixed. Lookups are pure and total: negative or
//! non-finite hour counts are treated as zero.

use std::fmt;

use serde::Serialize;

/// Hours required to reach the top tier; progress is measured against it.
pub const MASTERY_HOURS: f64 = 10_000.0;

/// A mastery bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Novice,
    Amateur,
    Master,
    Pro,
    Legend,
}

/// Visual tag attached to a tier. Renderers map it to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierAccent {
    Gray,
    Blue,
    Purple,
    Orange,
    Gold,
}

/// Ranked tiers, lowest threshold first. Novice is the implicit default
/// and is not part of the table.
pub const LEVELS: [Tier; 4] = [Tier::Amateur, Tier::Master, Tier::Pro, Tier::Legend];

impl Tier {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Amateur => "Amateur",
            Self::Master => "Master",
            Self::Pro => "Pro",
            Self::Legend => "Legend",
        }
    }

    /// Minimum hours to hold this tier.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Novice => 0,
            Self::Amateur => 1_000,
            Self::Master => 3_000,
            Self::Pro => 5_000,
            Self::Legend => 10_000,
        }
    }

    #[must_use]
    pub const fn accent(self) -> TierAccent {
        match self {
            Self::Novice => TierAccent::Gray,
            Self::Amateur => TierAccent::Blue,
            Self::Master => TierAccent::Purple,
            Self::Pro => TierAccent::Orange,
            Self::Legend => TierAccent::Gold,
        }
    }

    /// Snapshot suitable for serialization.
    #[must_use]
    pub const fn info(self) -> TierInfo {
        TierInfo {
            tier: self,
            name: self.name(),
            threshold: self.threshold(),
            accent: self.accent(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub name: &'static str,
    pub threshold: u32,
    pub accent: TierAccent,
}

fn sanitize(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}

/// Highest tier whose threshold has been met, scanning from the top.
#[must_use]
pub fn tier_for(hours: f64) -> Tier {
    let hours = sanitize(hours);
    LEVELS
        .iter()
        .rev()
        .copied()
        .find(|tier| hours >= f64::from(tier.threshold()))
        .unwrap_or(Tier::Novice)
}

/// Lowest tier whose threshold is still ahead, or `None` at the top.
#[must_use]
pub fn next_tier(hours: f64) -> Option<Tier> {
    let hours = sanitize(hours);
    LEVELS
        .iter()
        .copied()
        .find(|tier| hours < f64::from(tier.threshold()))
}

/// Hours still needed to reach the next tier.
#[must_use]
pub fn hours_to_next(hours: f64) -> Option<f64> {
    let hours = sanitize(hours);
    next_tier(hours).map(|tier| f64::from(tier.threshold()) - hours)
}

/// Percentage of [`MASTERY_HOURS`] reached, capped at 100.
#[must_use]
pub fn progress_percent(hours: f64) -> f64 {
    (sanitize(hours) / MASTERY_HOURS * 100.0).min(100.0)
}

/// Everything a view needs to describe a skill's standing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standing {
    pub hours: f64,
    pub tier: TierInfo,
    pub next_tier: Option<TierInfo>,
    pub hours_to_next: Option<f64>,
    pub progress_percent: f64,
}

impl Standing {
    #[must_use]
    pub fn of(hours: f64) -> Self {
        Self {
            hours: sanitize(hours),
            tier: tier_for(hours).info(),
            next_tier: next_tier(hours).map(Tier::info),
            hours_to_next: hours_to_next(hours),
            progress_percent: progress_percent(hours),
        }
    }
}
