//! Desk Pet entry point
//!
//! Headless demo: drives the shell the way a window toolkit would and logs
//! what a renderer would draw. Run with `RUST_LOG=info` (or `debug` to see
//! every direction change).

use std::time::{SystemTime, UNIX_EPOCH};

use desk_pet::consts::MAX_HUNGER;
use desk_pet::{PetShell, Settings};

fn main() {
    env_logger::init();

    // Fast hunger so a short demo run shows the whole feed cycle
    let settings = Settings {
        time_per_level_secs: Some(5.0),
        ..Settings::default()
    };
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Desk Pet (headless) starting with seed {seed}");

    let mut shell = PetShell::with_settings(seed, &settings);

    // 30 simulated seconds at 60 fps; feed the pet partway through
    let frame = 1.0 / 60.0;
    for i in 0..(30 * 60) {
        if i == 12 * 60 {
            log::info!(
                "Feed button pressed (enabled: {})",
                shell.feed_enabled()
            );
            shell.request_feed();
        }
        shell.advance(frame);

        if i % 60 == 59 {
            let world = shell.world();
            log::info!(
                "t={:>2}s position={:>6.1} facing={:?} hunger={}/{} feeding={}",
                shell.clock().as_secs(),
                world.movement.position,
                world.movement.direction,
                shell.hunger_level(),
                MAX_HUNGER,
                world.pet.feeding_animation,
            );
        }
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
