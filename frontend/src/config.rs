use log::Level;

use crate::components::countdown::Countdown;

pub const INDICATOR_THRESHOLD_PX: f64 = 100.0;

pub const COUNTDOWN_START: Countdown = Countdown::new(2, 15, 30);

pub const HEADER_SCRUB_END_PX: f64 = 200.0;

// Hidden styles must be committed before above-the-fold groups flip.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 30;

pub const AMBIENT_KICKOFF_MS: u32 = 60;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
