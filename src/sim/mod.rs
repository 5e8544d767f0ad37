//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Randomness only through an injected `RandomSource`
//! - Board size and wall-clock time passed in per tick
//! - Single-threaded; one tick owns every mutation for its frame

pub mod asteroid;
pub mod bullet;
pub mod collision;
pub mod entity;
pub mod particle;
pub mod rng;
pub mod schedule;
pub mod ship;
pub mod state;
pub mod tick;
pub mod vector;

pub use asteroid::{Asteroid, AsteroidSize};
pub use bullet::Bullet;
pub use collision::{check_collision, circles_overlap};
pub use entity::{Body, Bounds, Entity, EntityView, update_all};
pub use particle::Particle;
pub use rng::{RandomSource, SeededRng, SequenceRng};
pub use schedule::Timers;
pub use ship::{Ship, ShipPhase};
pub use state::{Deferred, GameState, HudStatus, wave_size};
pub use tick::{Frame, TickInput, tick};
pub use vector::Vector2;
