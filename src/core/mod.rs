//! Domain types: tiers, timers, skills and the session store.

pub mod clock;
pub mod skill;
pub mod store;
pub mod tier;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use skill::{DailyStats, Skill, SkillIcon, SkillId};
pub use store::{Rejected, SkillStore, StoreSummary};
pub use tier::{LEVELS, MASTERY_HOURS, Standing, Tier, TierAccent, TierInfo};
pub use timer::{TimerState, TimerTransition};
