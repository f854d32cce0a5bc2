//! Desk Pet - an animated desktop-pet simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, hunger clock, pet state)
//! - `shell`: Fixed-timestep driving shell for renderer embedders
//! - `settings`: Data-driven tuning (hunger bucket width, presets)
//!
//! Rendering is deliberately absent: a window/toolkit layer reads the
//! simulation state every frame and paints the sprite, the hunger label and
//! the feed button from it.

pub mod settings;
pub mod shell;
pub mod sim;

pub use settings::{AppetitePreset, Settings};
pub use shell::PetShell;

/// Pet configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed movement timestep (the pet wanders at 1 Hz)
    pub const TICK_INTERVAL: f32 = 1.0;
    /// Maximum movement substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Horizontal wander range: position stays in [-WANDER_BOUND, WANDER_BOUND]
    pub const WANDER_BOUND: f32 = 200.0;
    /// Distance covered per movement tick
    pub const STEP_SIZE: f32 = 5.0;
    /// Sides of the per-tick wander die; a roll of 0 flips direction
    pub const FLIP_DIE_SIDES: u32 = 12;

    /// How long the feeding animation window stays open after a feed
    pub const FEED_ANIMATION_WINDOW: Duration = Duration::from_secs(1);
    /// Hunger level ceiling (0 = just fed)
    pub const MAX_HUNGER: u8 = 5;
}
