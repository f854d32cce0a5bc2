//! Fixed timestep movement tick
//!
//! The wander walk that keeps the pet alive-looking: once per second, decide
//! whether to turn around, then take one step. Advances deterministically
//! from the world seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Direction, MovementState, PetWorld};
use crate::consts::{FLIP_DIE_SIDES, STEP_SIZE, WANDER_BOUND};

/// Why the pet turned around on a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipCause {
    /// The wander die came up 0
    Wander,
    /// The next step would walk past the right edge
    RightBound,
    /// The next step would walk past the left edge
    LeftBound,
}

/// Direction-flip policy, evaluated once per tick before the step is taken.
///
/// Boundary checks win over the die: the pet always turns before it would
/// leave the wander range, no matter what was rolled.
pub fn flip_decision(movement: &MovementState, roll: u32) -> Option<FlipCause> {
    match movement.direction {
        Direction::Right if movement.position >= WANDER_BOUND - STEP_SIZE => {
            Some(FlipCause::RightBound)
        }
        Direction::Left if movement.position <= -WANDER_BOUND + STEP_SIZE => {
            Some(FlipCause::LeftBound)
        }
        _ if roll == 0 => Some(FlipCause::Wander),
        _ => None,
    }
}

/// Uniform wander-die roll in [0, [`FLIP_DIE_SIDES`]) for one tick.
///
/// Derived from (seed, tick index) rather than a stream so a world restored
/// from a snapshot rolls the same die as the run that produced it.
pub fn wander_roll(seed: u64, tick_index: u64) -> u32 {
    let mut rng = Pcg32::seed_from_u64(seed ^ tick_index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    rng.random_range(0..FLIP_DIE_SIDES)
}

/// Advance the wander walk by one fixed timestep
pub fn tick(world: &mut PetWorld) {
    let roll = wander_roll(world.seed, world.time_ticks);
    if let Some(cause) = flip_decision(&world.movement, roll) {
        world.movement.direction = world.movement.direction.flipped();
        log::debug!(
            "Tick {}: turned {:?} ({:?}) at position {:.0}",
            world.time_ticks,
            world.movement.direction,
            cause,
            world.movement.position
        );
    }
    world.movement.position += world.movement.direction.step_sign() * STEP_SIZE;
    world.time_ticks += 1;
}
