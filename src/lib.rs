//! Math Catch - catch falling numbered balls to hit the target number
//!
//! Core modules:
//! - `sim`: Simulation core (round state machine, spawning, collisions, scoring)
//! - `renderer`: WebGPU rendering of state snapshots
//! - `platform`: Input and clock adapters feeding the simulation
//! - `settings`: Runtime configuration
//! - `audio`: Procedural sound effects for gameplay events

pub mod audio;
#[cfg(not(target_arch = "wasm32"))]
pub mod headless;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the host loop
    pub const TARGET_FPS: u32 = 60;
    /// Upper bound on a single step, guards against stalls (window drag, tab switch)
    pub const MAX_DT: f32 = 0.05;

    /// Playfield dimensions (pixels, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 900.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 120.0;
    pub const BASKET_HEIGHT: f32 = 34.0; // Thick enough to print the running total on
    pub const BASKET_Y: f32 = PLAYFIELD_HEIGHT - 60.0;
    pub const BASKET_SPEED: f32 = 520.0;

    /// Ball radius range (inclusive, whole pixels)
    pub const BALL_MIN_RADIUS: i32 = 23;
    pub const BALL_MAX_RADIUS: i32 = 34;
    /// Ball fall speed range (pixels/s)
    pub const BALL_MIN_SPEED: f32 = 140.0;
    pub const BALL_MAX_SPEED: f32 = 240.0;

    /// Value pools per ball kind
    pub const NORMAL_VALUES: [i32; 5] = [1, 2, 3, 4, 5];
    pub const MULTIPLIER_VALUES: [i32; 3] = [2, 3, 4];
    pub const NEGATIVE_VALUES: [i32; 5] = [-1, -2, -3, -4, -5];

    /// Special ball spawn chances
    pub const MULTIPLIER_CHANCE: f64 = 0.12;
    pub const NEGATIVE_CHANCE: f64 = 0.15;

    /// Round target range (inclusive)
    pub const TARGET_MIN: i64 = 5;
    pub const TARGET_MAX: i64 = 11;

    /// Countdown before a round goes live (seconds)
    pub const COUNTDOWN_SECS: f32 = 3.0;

    /// Spawn pacing: starts at SPAWN_START, tightens by SPAWN_STEP per completed round
    pub const SPAWN_START: f32 = 0.85;
    pub const SPAWN_MIN: f32 = 0.35;
    pub const SPAWN_STEP: f32 = 0.03;

    /// Points per caught ball
    pub const CATCH_SCORE: u64 = 100;
}

/// Spawn interval after `rounds` completed rounds in one session
#[inline]
pub fn spawn_interval_after(rounds: u32) -> f32 {
    use consts::*;
    let mut interval = SPAWN_START;
    for _ in 0..rounds {
        interval = (interval - SPAWN_STEP).max(SPAWN_MIN);
    }
    interval
}
