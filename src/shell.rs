//! Fixed-timestep driving shell
//!
//! Bridges a frame-callback host (window toolkit, test harness) to the 1 Hz
//! movement tick. Owns the tick accumulator and the one-shot feed input;
//! dropping the shell ends the loop, so there is no timer to leak when the
//! pet view goes away.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL};
use crate::settings::Settings;
use crate::sim::{self, PetWorld};

/// Pet instance holding world state and frame bookkeeping
#[derive(Debug, Clone)]
pub struct PetShell {
    world: PetWorld,
    /// Elapsed shell time since creation; all `now` timestamps come from here
    clock: Duration,
    accumulator: f32,
    pending_feed: bool,
}

impl PetShell {
    /// Create a shell with the default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Create a shell with explicit settings
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        log::info!("Pet shell starting with seed {seed}");
        Self {
            world: PetWorld::with_policy(seed, settings.hunger_policy()),
            clock: Duration::ZERO,
            accumulator: 0.0,
            pending_feed: false,
        }
    }

    /// Latch a feed-button press; consumed by the next [`PetShell::advance`]
    pub fn request_feed(&mut self) {
        self.pending_feed = true;
    }

    /// Advance the pet by `dt` seconds of host time.
    ///
    /// Applies a pending feed at frame granularity, expires the feeding
    /// animation window, then runs movement ticks at the fixed cadence. A
    /// stalled frame catches up at most [`MAX_SUBSTEPS`] ticks.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.clock += Duration::from_secs_f32(dt);
        self.accumulator += dt;

        if self.pending_feed {
            self.pending_feed = false;
            if self.world.feed_allowed(self.clock) {
                self.world.feed(self.clock);
            } else {
                log::debug!("Feed request ignored: pet is fed or mid-animation");
            }
        }

        self.world.expire_animation(self.clock);

        let mut substeps = 0;
        while self.accumulator >= TICK_INTERVAL && substeps < MAX_SUBSTEPS {
            sim::tick(&mut self.world);
            self.accumulator -= TICK_INTERVAL;
            substeps += 1;
        }
    }

    /// Read access for renderers
    pub fn world(&self) -> &PetWorld {
        &self.world
    }

    /// Elapsed shell time since creation
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Current hunger level for the status label
    pub fn hunger_level(&self) -> u8 {
        self.world.hunger_level(self.clock)
    }

    /// Feed-button enabled state for the toolbar
    pub fn feed_enabled(&self) -> bool {
        self.world.feed_allowed(self.clock)
    }

    /// Pet view torn down and rebuilt: the wander walk restarts from the
    /// center, the hunger clock keeps running
    pub fn reset_movement(&mut self) {
        self.world.reset_movement();
        self.accumulator = 0.0;
    }
}
