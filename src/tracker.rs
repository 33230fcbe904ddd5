//! Session controller.
//!
//! [`Tracker`] owns every piece of mutable state for a session: the skill
//! store, the theme flag and the clock. Views borrow it to render; all
//! changes go through [`Tracker::apply`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::skill::{SkillIcon, SkillId};
use crate::core::store::{Rejected, SkillStore};
use crate::core::timer::TimerTransition;
use crate::output::ThemeMode;

/// A user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddSkill { name: String, icon: SkillIcon },
    AddHours { id: SkillId, hours: f64 },
    ToggleTimer { id: SkillId },
    ToggleTheme,
}

/// What an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    SkillAdded { id: SkillId },
    HoursAdded { id: SkillId, hours: f64, total: f64 },
    TimerStarted { id: SkillId, at: DateTime<Utc> },
    TimerStopped { id: SkillId, elapsed_hours: f64 },
    ThemeChanged { theme: ThemeMode },
    Ignored { reason: Rejected },
}

impl Outcome {
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}

pub struct Tracker {
    store: SkillStore,
    theme: ThemeMode,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("store", &self.store)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Tracker {
    #[must_use]
    pub fn new(store: SkillStore, theme: ThemeMode, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            theme,
            clock,
        }
    }

    /// Session built from config, seeded with demo skills when asked.
    #[must_use]
    pub fn from_config(config: &Config, seed_demo: bool) -> Self {
        let track_daily = config.tracking.daily_stats;
        let store = if seed_demo || config.session.seed_demo {
            SkillStore::with_demo_skills(track_daily)
        } else {
            SkillStore::new(track_daily)
        };
        debug!(
            skills = store.len(),
            track_daily,
            theme = %config.display.theme,
            "session started"
        );
        Self::new(store, config.display.theme, Box::new(SystemClock))
    }

    #[must_use]
    pub const fn store(&self) -> &SkillStore {
        &self.store
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Apply one action. Rejected actions change nothing and come back as
    /// [`Outcome::Ignored`].
    pub fn apply(&mut self, action: Action) -> Outcome {
        let now = self.clock.now();
        let result = match action {
            Action::AddSkill { name, icon } => self
                .store
                .add_skill(&name, icon)
                .map(|id| Outcome::SkillAdded { id }),
            Action::AddHours { id, hours } => self
                .store
                .add_hours(id, hours, now)
                .map(|total| Outcome::HoursAdded { id, hours, total }),
            Action::ToggleTimer { id } => {
                self.store
                    .toggle_timer(id, now)
                    .map(|transition| match transition {
                        TimerTransition::Started { at } => Outcome::TimerStarted { id, at },
                        TimerTransition::Stopped { elapsed_hours } => {
                            Outcome::TimerStopped { id, elapsed_hours }
                        }
                    })
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                Ok(Outcome::ThemeChanged { theme: self.theme })
            }
        };

        result.unwrap_or_else(|reason| {
            debug!(%reason, "action ignored");
            Outcome::Ignored { reason }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::Duration;

    use super::*;
    use crate::core::clock::ManualClock;

    fn tracker() -> (Tracker, Rc<ManualClock>) {
        let start = DateTime::from_timestamp(1_772_000_000, 0).unwrap();
        let clock = Rc::new(ManualClock::new(start));
        let tracker = Tracker::new(
            SkillStore::new(true),
            ThemeMode::Dark,
            Box::new(Rc::clone(&clock)),
        );
        (tracker, clock)
    }

    fn add(tracker: &mut Tracker, name: &str) -> SkillId {
        match tracker.apply(Action::AddSkill {
            name: name.to_string(),
            icon: SkillIcon::Star,
        }) {
            Outcome::SkillAdded { id } => id,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn timer_round_trip_through_actions() {
        let (mut tracker, clock) = tracker();
        let id = add(&mut tracker, "Violin");

        assert!(matches!(
            tracker.apply(Action::ToggleTimer { id }),
            Outcome::TimerStarted { .. }
        ));
        clock.advance(Duration::seconds(90 * 60));
        match tracker.apply(Action::ToggleTimer { id }) {
            Outcome::TimerStopped { elapsed_hours, .. } => {
                assert!((elapsed_hours - 1.5).abs() < 1e-9);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!((tracker.store().get(id).unwrap().hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_actions_are_ignored() {
        let (mut tracker, _clock) = tracker();
        let id = add(&mut tracker, "Violin");

        let outcome = tracker.apply(Action::AddSkill {
            name: "  ".to_string(),
            icon: SkillIcon::Star,
        });
        assert_eq!(outcome, Outcome::Ignored { reason: Rejected::BlankName });
        assert_eq!(tracker.store().len(), 1);

        let outcome = tracker.apply(Action::AddHours { id, hours: -2.0 });
        assert!(outcome.is_ignored());
        assert!(tracker.store().get(id).unwrap().hours.abs() < f64::EPSILON);

        let outcome = tracker.apply(Action::ToggleTimer { id: SkillId::new() });
        assert_eq!(outcome, Outcome::Ignored { reason: Rejected::UnknownSkill });
    }

    #[test]
    fn theme_toggles_without_touching_skills() {
        let (mut tracker, _clock) = tracker();
        let id = add(&mut tracker, "Violin");
        tracker.apply(Action::AddHours { id, hours: 2.0 });

        assert_eq!(
            tracker.apply(Action::ToggleTheme),
            Outcome::ThemeChanged { theme: ThemeMode::Light }
        );
        assert_eq!(tracker.theme(), ThemeMode::Light);
        assert!((tracker.store().total_hours() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_config_seeds_demo() {
        let config = Config::default();
        assert!(Tracker::from_config(&config, false).store().is_empty());
        assert_eq!(Tracker::from_config(&config, true).store().len(), 3);
    }
}
