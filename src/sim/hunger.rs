//! Hunger clock
//!
//! Maps time since the last feed to a discrete level: 0 = just fed, 5 =
//! maximum hunger. The bucket width (how long one level takes) is tuning
//! supplied by the embedder, not a rule of the simulation; the only promises
//! here are monotonicity and the [0, 5] cap.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::PetState;
use crate::consts::MAX_HUNGER;

/// Bucketing policy for the hunger clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HungerPolicy {
    /// Time the pet takes to climb one hunger level
    pub time_per_level: Duration,
}

impl Default for HungerPolicy {
    fn default() -> Self {
        // Standard appetite: one level every 30 minutes
        Self::new(Duration::from_secs(30 * 60))
    }
}

impl HungerPolicy {
    pub fn new(time_per_level: Duration) -> Self {
        Self { time_per_level }
    }

    /// Hunger level after waiting from `time_last_fed` to `now`: one level
    /// per full bucket elapsed, saturating at [`MAX_HUNGER`]. Monotonic in
    /// `now`; a `now` before `time_last_fed` reads as zero elapsed.
    pub fn level(&self, now: Duration, time_last_fed: Duration) -> u8 {
        let elapsed = now.saturating_sub(time_last_fed);
        if self.time_per_level.is_zero() {
            return if elapsed.is_zero() { 0 } else { MAX_HUNGER };
        }
        let buckets = (elapsed.as_secs_f64() / self.time_per_level.as_secs_f64()) as u64;
        buckets.min(u64::from(MAX_HUNGER)) as u8
    }

    /// Feed-button contract: feeding is pointless while the animation window
    /// is open or the pet is already full
    pub fn feed_allowed(&self, pet: &PetState, now: Duration) -> bool {
        !pet.feeding_animation && self.level(now, pet.time_last_fed) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_level_zero_at_feed_time() {
        let policy = HungerPolicy::new(secs(60.0));
        assert_eq!(policy.level(secs(100.0), secs(100.0)), 0);
    }

    #[test]
    fn test_level_steps_per_bucket() {
        let policy = HungerPolicy::new(secs(60.0));
        let fed = secs(0.0);
        assert_eq!(policy.level(secs(59.9), fed), 0);
        assert_eq!(policy.level(secs(60.0), fed), 1);
        assert_eq!(policy.level(secs(150.0), fed), 2);
        assert_eq!(policy.level(secs(300.0), fed), 5);
    }

    #[test]
    fn test_level_saturates_at_max() {
        let policy = HungerPolicy::new(secs(60.0));
        assert_eq!(policy.level(secs(1_000_000.0), secs(0.0)), MAX_HUNGER);
    }

    #[test]
    fn test_now_before_feed_reads_as_fed() {
        let policy = HungerPolicy::new(secs(60.0));
        assert_eq!(policy.level(secs(10.0), secs(500.0)), 0);
    }

    #[test]
    fn test_zero_width_bucket_does_not_divide() {
        let policy = HungerPolicy::new(Duration::ZERO);
        assert_eq!(policy.level(secs(5.0), secs(5.0)), 0);
        assert_eq!(policy.level(secs(5.1), secs(5.0)), MAX_HUNGER);
    }

    #[test]
    fn test_feed_allowed_guard() {
        let policy = HungerPolicy::new(secs(60.0));
        let mut pet = PetState::default();

        // Just fed (level 0): disabled
        assert!(!policy.feed_allowed(&pet, secs(0.0)));

        // Hungry: enabled
        assert!(policy.feed_allowed(&pet, secs(120.0)));

        // Mid-animation: disabled even though a feed just reset the level
        pet.feed(secs(120.0));
        assert!(!policy.feed_allowed(&pet, secs(120.5)));
    }

    proptest! {
        #[test]
        fn prop_level_is_monotonic(
            bucket_secs in 1u64..=3600,
            fed_secs in 0u64..=10_000,
            t1 in 0u64..=100_000,
            dt in 0u64..=100_000,
        ) {
            let policy = HungerPolicy::new(Duration::from_secs(bucket_secs));
            let fed = Duration::from_secs(fed_secs);
            let earlier = policy.level(Duration::from_secs(t1), fed);
            let later = policy.level(Duration::from_secs(t1 + dt), fed);
            prop_assert!(later >= earlier);
        }

        #[test]
        fn prop_level_stays_in_range(
            bucket_secs in 1u64..=3600,
            fed_secs in 0u64..=100_000,
            now_secs in 0u64..=1_000_000,
        ) {
            let policy = HungerPolicy::new(Duration::from_secs(bucket_secs));
            let level = policy.level(
                Duration::from_secs(now_secs),
                Duration::from_secs(fed_secs),
            );
            prop_assert!(level <= MAX_HUNGER);
        }
    }
}
