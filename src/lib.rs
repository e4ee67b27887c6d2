//! Flitter - a browser physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, boundary bounces, input state)
//! - `platform`: Browser/host environment helpers
//! - `settings`: User preferences persisted in LocalStorage
//!
//! The simulation advances one tick per rendering frame and knows nothing
//! about the DOM; `main.rs` owns all browser glue.

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Physics tuning constants
pub mod consts {
    /// Fly bounding-box edge length in pixels (the fly is 8x8)
    pub const FLY_SIZE: f32 = 8.0;
    /// Spawn/reset distance from the bottom edge of the playground
    pub const SPAWN_BOTTOM_OFFSET: f32 = 20.0;

    /// Impulse added to velocity per tick while a direction is held
    pub const MOVE_FORCE: f32 = 0.6;
    /// Downward acceleration added every tick
    pub const GRAVITY: f32 = 0.15;
    /// Gravity amplification while falling (descent outpaces ascent)
    pub const FALL_GRAVITY_MULT: f32 = 1.2;

    /// Fraction of horizontal velocity retained per tick (more glide)
    pub const AIR_RESISTANCE_X: f32 = 0.98;
    /// Fraction of vertical velocity retained per tick (heavier fall)
    pub const AIR_RESISTANCE_Y: f32 = 0.96;

    /// Floor bounce: reverses vertical velocity, keeps 60% of it
    pub const BOUNCE_FLOOR: f32 = -0.6;
    /// Wall bounce: reverses horizontal velocity, keeps 30%
    pub const BOUNCE_WALL: f32 = -0.3;
    /// Ceiling push-back: reverses vertical velocity, keeps 20%
    pub const BOUNCE_CEILING: f32 = -0.2;

    /// Upward thrust remaining at the very top of the playground
    pub const ALTITUDE_THRUST_MIN: f32 = 0.3;
    /// Fraction of playground height treated as the ceiling band
    pub const CEILING_ZONE_FRAC: f32 = 0.01;
}
