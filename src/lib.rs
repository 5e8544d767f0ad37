//! Asteroid Field - a wrap-around asteroid shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, fragmentation, game state)
//! - `input`: Input port queried once per tick
//! - `assets`: Asteroid art lookup with fallback chain (renderer side only)
//! - `tuning`: Data-driven session settings

pub mod assets;
pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{Action, InputPort, KeyboardState};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ship collision radius
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Top speed after thrust (units/s)
    pub const SHIP_MAX_SPEED: f32 = 200.0;
    /// Thrust acceleration (units/s²)
    pub const SHIP_ACCELERATION: f32 = 200.0;
    /// Turn rate (radians/s)
    pub const SHIP_ROTATION_SPEED: f32 = 4.0;
    /// Minimum seconds between shots
    pub const SHIP_FIRE_RATE: f32 = 0.25;
    /// Per-frame drag at 60 fps, raised to `dt * 60` each update
    pub const SHIP_DRAG_BASE: f32 = 0.99;
    /// Length of the invulnerable blinking window after respawn (seconds)
    pub const RESPAWN_DURATION: f32 = 3.0;
    /// Blink half-period while respawning (seconds)
    pub const RESPAWN_BLINK_INTERVAL: f32 = 0.1;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_SPEED: f32 = 400.0;
    pub const BULLET_LIFETIME: f32 = 2.0;

    /// Particle defaults
    pub const PARTICLE_RADIUS: f32 = 2.0;
    /// Velocity multiplier applied on every particle update call
    pub const PARTICLE_DAMPING: f32 = 0.97;
    pub const PARTICLE_MIN_SPEED: f32 = 30.0;
    pub const PARTICLE_SPEED_RANGE: f32 = 70.0;
    pub const PARTICLE_MIN_LIFETIME: f32 = 0.5;
    pub const PARTICLE_LIFETIME_RANGE: f32 = 1.0;

    /// Fragments fly off at this multiple of the parent speed (min, max)
    pub const SPLIT_SPEED_FACTOR: (f32, f32) = (1.2, 1.6);
    /// Fragment spin range (radians/s, symmetric)
    pub const SPLIT_SPIN: f32 = 1.5;

    /// Distance outside the board edge where new asteroids appear
    pub const SPAWN_BUFFER: f32 = 50.0;
    pub const SPAWN_BASE_SPEED: f32 = 50.0;
    /// Extra speed per level, multiplied by a uniform draw
    pub const SPAWN_SPEED_PER_LEVEL: f32 = 30.0;
    /// Levels beyond this stop increasing spawn speed
    pub const SPAWN_SPEED_LEVEL_CAP: u32 = 5;
    /// Max aim deviation from the board center (45°)
    pub const SPAWN_AIM_JITTER: f32 = std::f32::consts::FRAC_PI_4;
    /// Fresh asteroid spin range (radians/s, symmetric)
    pub const SPAWN_SPIN: f32 = 1.0;

    /// Wave size is `WAVE_BASE + min(2 * level, WAVE_EXTRA_CAP)`
    pub const WAVE_BASE: u32 = 3;
    pub const WAVE_EXTRA_CAP: u32 = 12;
}

/// Unit vector pointing along `angle` (radians, 0 = +x)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Rotate `v` counter-clockwise by `angle` radians
#[inline]
pub fn rotated(v: Vec2, angle: f32) -> Vec2 {
    heading(angle).rotate(v)
}
