//! Pet state and core simulation types
//!
//! Everything a renderer observes lives here: the wander walk (position and
//! facing) and the hunger clock (last feed time, feeding animation window).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::hunger::HungerPolicy;
use crate::consts::FEED_ANIMATION_WINDOW;

/// Facing/travel direction of the pet sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    /// The opposite direction
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Sign applied to the step distance each movement tick
    #[inline]
    pub fn step_sign(self) -> f32 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }

    /// Whether the sprite should render horizontally mirrored
    #[inline]
    pub fn mirrored(self) -> bool {
        matches!(self, Direction::Left)
    }
}

/// Wander state owned by the pet view
///
/// Resets to defaults whenever the owning view is rebuilt; the hunger clock
/// in [`PetState`] does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    /// Horizontal offset from the center of the wander range
    pub position: f32,
    /// Current travel direction
    pub direction: Direction,
}

/// Process-lifetime pet state: when it was last fed and whether the feeding
/// animation window is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    /// Time of the last feed action, relative to the embedder's epoch
    pub time_last_fed: Duration,
    /// True for the fixed window after a feed action
    pub feeding_animation: bool,
    /// Bumped by every feed; stamps the scheduled clear
    feed_generation: u64,
    /// Deadline for the pending animation clear, if one is scheduled
    animation_clear_at: Option<Duration>,
}

impl PetState {
    /// Record a feed at `now`: reset the hunger clock, open the animation
    /// window and schedule its clear. Returns the generation stamp the
    /// scheduled clear must present to [`PetState::end_animation_window`].
    ///
    /// Safe to call while fed or mid-animation: the effect is an idempotent
    /// overwrite, and the previous feed's scheduled clear goes stale.
    pub fn feed(&mut self, now: Duration) -> u64 {
        self.time_last_fed = now;
        self.feeding_animation = true;
        self.feed_generation += 1;
        self.animation_clear_at = Some(now + FEED_ANIMATION_WINDOW);
        self.feed_generation
    }

    /// Close the animation window, but only if `generation` still names the
    /// latest feed. A clear scheduled by an earlier feed is ignored, so
    /// re-feeding restarts the window rather than cutting it short.
    pub fn end_animation_window(&mut self, generation: u64) {
        if generation == self.feed_generation && self.feeding_animation {
            self.feeding_animation = false;
            self.animation_clear_at = None;
            log::debug!("Feeding animation ended (generation {generation})");
        }
    }

    /// Deadline-based variant for cooperative single-threaded shells: applies
    /// the scheduled clear once `now` has passed it. The deadline is rewritten
    /// by every feed, so this honors the same last-feed-wins rule.
    pub fn expire_animation(&mut self, now: Duration) {
        if let Some(deadline) = self.animation_clear_at
            && now >= deadline
        {
            self.end_animation_window(self.feed_generation);
        }
    }

    /// Generation stamp of the most recent feed
    #[inline]
    pub fn feed_generation(&self) -> u64 {
        self.feed_generation
    }

    /// Deadline of the pending animation clear, if one is scheduled
    #[inline]
    pub fn animation_clear_at(&self) -> Option<Duration> {
        self.animation_clear_at
    }
}

/// Complete pet world (deterministic, serializable)
///
/// Owned by the application shell. Renderers read it every frame; all
/// mutation goes through the named entry points (`tick`, `feed`,
/// `end_animation_window`, `expire_animation`, `reset_movement`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetWorld {
    /// Run seed: the wander die for tick N is derived from (seed, N)
    pub seed: u64,
    /// Movement tick counter
    pub time_ticks: u64,
    /// View-owned wander state
    pub movement: MovementState,
    /// Process-lifetime hunger/feeding state
    pub pet: PetState,
    /// Hunger bucketing policy
    pub hunger: HungerPolicy,
}

impl PetWorld {
    /// Create a world with the given seed and the default hunger policy
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, HungerPolicy::default())
    }

    /// Create a world with an explicit hunger policy (see `Settings`)
    pub fn with_policy(seed: u64, hunger: HungerPolicy) -> Self {
        Self {
            seed,
            time_ticks: 0,
            movement: MovementState::default(),
            pet: PetState::default(),
            hunger,
        }
    }

    /// Current hunger level in [0, 5]
    #[inline]
    pub fn hunger_level(&self, now: Duration) -> u8 {
        self.hunger.level(now, self.pet.time_last_fed)
    }

    /// Feed-button contract for the renderer: pressing feed does nothing
    /// useful while the animation window is open or the pet is already full
    #[inline]
    pub fn feed_allowed(&self, now: Duration) -> bool {
        self.hunger.feed_allowed(&self.pet, now)
    }

    /// Feed the pet at `now`. Returns the feed's generation stamp.
    pub fn feed(&mut self, now: Duration) -> u64 {
        let generation = self.pet.feed(now);
        log::info!("Pet fed at {:.1}s (generation {generation})", now.as_secs_f64());
        generation
    }

    /// Close the feeding animation window if `generation` is still current
    pub fn end_animation_window(&mut self, generation: u64) {
        self.pet.end_animation_window(generation);
    }

    /// Apply the scheduled animation clear once `now` has passed it
    pub fn expire_animation(&mut self, now: Duration) {
        self.pet.expire_animation(now);
    }

    /// View-reconstruction lifecycle: the wander walk restarts from the
    /// center, the hunger clock keeps running
    pub fn reset_movement(&mut self) {
        self.movement = MovementState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_feed_opens_animation_window() {
        let mut pet = PetState::default();
        assert!(!pet.feeding_animation);

        pet.feed(secs(10.0));
        assert!(pet.feeding_animation);
        assert_eq!(pet.time_last_fed, secs(10.0));
        assert_eq!(pet.animation_clear_at(), Some(secs(11.0)));
    }

    #[test]
    fn test_animation_auto_clears_after_window() {
        let mut pet = PetState::default();
        pet.feed(secs(10.0));

        // Window still open just before the deadline
        pet.expire_animation(secs(10.9));
        assert!(pet.feeding_animation);

        pet.expire_animation(secs(11.0));
        assert!(!pet.feeding_animation);
        assert_eq!(pet.animation_clear_at(), None);
    }

    #[test]
    fn test_refeed_restarts_window() {
        let mut pet = PetState::default();
        pet.feed(secs(10.0));
        pet.feed(secs(10.5));

        // 1.2s after the first feed, 0.7s after the second: still open
        pet.expire_animation(secs(11.2));
        assert!(pet.feeding_animation);

        // 1s after the second feed: closed
        pet.expire_animation(secs(11.5));
        assert!(!pet.feeding_animation);
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let mut pet = PetState::default();
        let first = pet.feed(secs(10.0));
        let second = pet.feed(secs(10.5));
        assert_ne!(first, second);

        // The first feed's timer firing late must not close the window
        pet.end_animation_window(first);
        assert!(pet.feeding_animation);

        pet.end_animation_window(second);
        assert!(!pet.feeding_animation);
    }

    #[test]
    fn test_feed_is_idempotent_overwrite() {
        let mut pet = PetState::default();
        pet.feed(secs(10.0));

        // Calling again mid-animation is defined as a plain overwrite
        let generation = pet.feed(secs(10.2));
        assert!(pet.feeding_animation);
        assert_eq!(pet.time_last_fed, secs(10.2));
        assert_eq!(pet.feed_generation(), generation);
        assert_eq!(pet.animation_clear_at(), Some(secs(11.2)));
    }

    #[test]
    fn test_reset_movement_keeps_hunger_clock() {
        let mut world = PetWorld::new(7);
        world.movement.position = 120.0;
        world.movement.direction = Direction::Left;
        world.feed(secs(5.0));

        world.reset_movement();
        assert_eq!(world.movement, MovementState::default());
        assert_eq!(world.pet.time_last_fed, secs(5.0));
        assert!(world.pet.feeding_animation);
    }

    #[test]
    fn test_feed_resets_hunger_level() {
        let mut world = PetWorld::with_policy(7, HungerPolicy::new(secs(60.0)));
        let now = secs(150.0);
        assert_eq!(world.hunger_level(now), 2);

        world.feed(now);
        assert_eq!(world.hunger_level(now), 0);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Right.flipped(), Direction::Left);
        assert_eq!(Direction::Left.flipped(), Direction::Right);
        assert_eq!(Direction::Right.step_sign(), 1.0);
        assert_eq!(Direction::Left.step_sign(), -1.0);
        assert!(Direction::Left.mirrored());
        assert!(!Direction::Right.mirrored());
    }
}
