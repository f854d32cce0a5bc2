//! Deterministic simulation module
//!
//! All pet behavior lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Time passed in by the caller, never read from a wall clock
//! - No rendering or platform dependencies

pub mod hunger;
pub mod state;
pub mod tick;

pub use hunger::HungerPolicy;
pub use state::{Direction, MovementState, PetState, PetWorld};
pub use tick::{FlipCause, flip_decision, tick, wander_roll};
