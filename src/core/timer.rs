//! Start/stop practice timer.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::utils::format::format_hms;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Per-skill timer. The start timestamp only exists while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TimerState {
    #[default]
    Idle,
    Running { started_at: DateTime<Utc> },
}

/// Result of flipping a timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum TimerTransition {
    Started { at: DateTime<Utc> },
    Stopped { elapsed_hours: f64 },
}

impl TimerState {
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Idle => None,
            Self::Running { started_at } => Some(*started_at),
        }
    }

    /// Idle -> Running. Returns `false` if the timer was already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_running() {
            return false;
        }
        *self = Self::Running { started_at: now };
        true
    }

    /// Running -> Idle, yielding the elapsed hours. `None` when idle.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<f64> {
        let started_at = self.started_at()?;
        *self = Self::Idle;
        Some(duration_to_hours(now - started_at))
    }

    /// Flip the timer and report what happened.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> TimerTransition {
        match self.stop(now) {
            Some(elapsed_hours) => TimerTransition::Stopped { elapsed_hours },
            None => {
                self.start(now);
                TimerTransition::Started { at: now }
            }
        }
    }

    /// Time on the clock so far; zero when idle or when `now` precedes the
    /// start.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.started_at()
            .map_or_else(Duration::zero, |started_at| {
                (now - started_at).max(Duration::zero())
            })
    }

    /// `HH:MM:SS` of the running session, `00:00:00` when idle.
    #[must_use]
    pub fn display(&self, now: DateTime<Utc>) -> String {
        format_hms(self.elapsed(now).num_seconds())
    }
}

/// Negative spans (clock moved backwards) count as zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn duration_to_hours(span: Duration) -> f64 {
    let millis = span.num_milliseconds().max(0);
    millis as f64 / MILLIS_PER_HOUR
}
