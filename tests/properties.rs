use chrono::{DateTime, Duration};
use proptest::prelude::*;

use tenk::core::tier::{
    LEVELS, MASTERY_HOURS, Standing, Tier, hours_to_next, next_tier, progress_percent, tier_for,
};
use tenk::core::{SkillIcon, SkillStore};

proptest! {
    #[test]
    fn test_tier_threshold_is_met(hours in 0.0f64..50_000.0) {
        let tier = tier_for(hours);
        prop_assert!(hours >= f64::from(tier.threshold()));
    }

    #[test]
    fn test_tier_is_monotonic(a in 0.0f64..50_000.0, b in 0.0f64..50_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_for(low) <= tier_for(high));
        prop_assert!(progress_percent(low) <= progress_percent(high));
    }

    #[test]
    fn test_next_tier_is_above_current(hours in 0.0f64..50_000.0) {
        match next_tier(hours) {
            Some(next) => {
                prop_assert!(next > tier_for(hours));
                let remaining = hours_to_next(hours).unwrap();
                prop_assert!(remaining > 0.0);
                prop_assert!((hours + remaining - f64::from(next.threshold())).abs() < 1e-6);
            }
            None => {
                prop_assert_eq!(tier_for(hours), Tier::Legend);
                prop_assert!(hours_to_next(hours).is_none());
            }
        }
    }

    #[test]
    fn test_progress_is_bounded(hours in any::<f64>()) {
        let progress = progress_percent(hours);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn test_standing_agrees_with_lookups(hours in 0.0f64..20_000.0) {
        let standing = Standing::of(hours);
        prop_assert_eq!(standing.tier.tier, tier_for(hours));
        prop_assert_eq!(standing.next_tier.map(|t| t.tier), next_tier(hours));
        prop_assert_eq!(standing.progress_percent >= 100.0, hours >= MASTERY_HOURS);
    }

    #[test]
    fn test_store_total_is_sum_of_accepted_amounts(
        amounts in proptest::collection::vec(-10.0f64..10.0, 0..40)
    ) {
        let now = DateTime::from_timestamp(1_772_000_000, 0).unwrap();
        let mut store = SkillStore::new(true);
        let id = store.add_skill("Chess", SkillIcon::Target).unwrap();

        let mut expected = 0.0;
        for amount in &amounts {
            let accepted = store.add_hours(id, *amount, now).is_ok();
            prop_assert_eq!(accepted, *amount > 0.0);
            if accepted {
                expected += amount;
            }
        }

        prop_assert!((store.total_hours() - expected).abs() < 1e-9);
        prop_assert!((store.today_hours(id, now) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_timer_credits_elapsed_time(secs in 0i64..200_000) {
        let start = DateTime::from_timestamp(1_772_000_000, 0).unwrap();
        let mut store = SkillStore::new(false);
        let id = store.add_skill("Violin", SkillIcon::Music).unwrap();

        store.toggle_timer(id, start).unwrap();
        store.toggle_timer(id, start + Duration::seconds(secs)).unwrap();

        #[allow(clippy::cast_precision_loss)]
        let expected = secs as f64 / 3600.0;
        prop_assert!((store.get(id).unwrap().hours - expected).abs() < 1e-9);
    }
}

#[test]
fn test_levels_cover_every_tier_above_novice() {
    let tiers: Vec<Tier> = LEVELS.to_vec();
    assert_eq!(tiers, [Tier::Amateur, Tier::Master, Tier::Pro, Tier::Legend]);
}
