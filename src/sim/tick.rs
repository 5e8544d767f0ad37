//! Per-frame simulation tick
//!
//! Order within a frame: deferred events, timed spawn, ship, bullets,
//! asteroids, particles, collisions, level progression. All mutation for the
//! frame happens inside one call.

use glam::Vec2;

use super::collision::check_collision;
use super::entity::{Bounds, Entity, update_all};
use super::rng::RandomSource;
use super::state::{Deferred, GameState, HudStatus};
use crate::input::{Action, InputPort};

/// Control snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl TickInput {
    /// Query every control signal once
    pub fn sample(port: &impl InputPort) -> Self {
        Self {
            rotate_left: port.is_pressed(Action::RotateLeft),
            rotate_right: port.is_pressed(Action::RotateRight),
            thrust: port.is_pressed(Action::Thrust),
            fire: port.is_pressed(Action::Fire),
        }
    }
}

/// Timing and board size for one tick
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Monotonic wall-clock time in milliseconds
    pub now_ms: f64,
    pub bounds: Bounds,
}

/// Advance the session by one frame and report the HUD values
pub fn tick<R: RandomSource>(
    state: &mut GameState<R>,
    input: &TickInput,
    frame: Frame,
) -> HudStatus {
    if state.game_over {
        return state.status();
    }

    let Frame { dt, now_ms, bounds } = frame;

    run_deferred(state, now_ms);

    if now_ms - state.last_asteroid_spawn_ms > state.tuning.asteroid_spawn_interval_ms {
        state.spawn_random_asteroid(now_ms, bounds);
        log::debug!("Timed spawn, {} asteroids", state.asteroids.len());
    }

    if !state.ship.is_destroyed() {
        state.ship.steer(input);
        state.ship.update(dt, bounds);
        if input.fire && state.ship.can_fire() {
            let bullet = state.ship.fire();
            state.bullets.push(bullet);
        }
    }

    update_all(&mut state.bullets, dt, bounds);
    update_all(&mut state.asteroids, dt, bounds);
    update_all(&mut state.particles, dt, bounds);

    resolve_collisions(state, now_ms, bounds);

    if state.asteroids.is_empty() && !state.game_over {
        state.level += 1;
        log::info!("Level {} reached, score {}", state.level, state.score);
        state.spawn_wave(now_ms, bounds);
    }

    state.status()
}

/// Deliver deferred events that came due before this tick
fn run_deferred<R: RandomSource>(state: &mut GameState<R>, now_ms: f64) {
    for event in state.timers.take_due(now_ms) {
        match event {
            Deferred::RespawnShip { pos } => {
                if state.ship.is_destroyed() {
                    log::debug!("Ship respawned at {pos:?}");
                    state.ship.respawn(pos, Vec2::ZERO, 0.0);
                }
            }
        }
    }
}

/// Bullet-asteroid hits first, then ship-asteroid
///
/// Both collections are walked back to front so removals never skip an
/// element. A bullet stops at its first hit.
fn resolve_collisions<R: RandomSource>(state: &mut GameState<R>, now_ms: f64, bounds: Bounds) {
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let mut j = state.asteroids.len();
        while j > 0 {
            j -= 1;
            if !check_collision(&state.bullets[i], &state.asteroids[j]) {
                continue;
            }

            let count = state.tuning.hit_explosion_particles;
            let pos = state.asteroids[j].body.pos;
            state.explode(pos, count);

            let fragments = state.asteroids[j].split(&mut state.rng);
            state.score += state.asteroids[j].score_value();
            state.asteroids.extend(fragments);
            state.asteroids.remove(j);
            state.bullets.remove(i);
            break;
        }
    }

    if !state.ship.is_vulnerable() {
        return;
    }
    let ship = &state.ship;
    if !state.asteroids.iter().any(|a| check_collision(ship, a)) {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    let count = state.tuning.ship_explosion_particles;
    let pos = state.ship.body.pos;
    state.explode(pos, count);
    state.ship.destroy();
    log::debug!("Ship destroyed, {} lives left", state.lives);

    if state.lives == 0 {
        state.game_over = true;
        log::info!("Game over: score {}, level {}", state.score, state.level);
    } else {
        state.timers.schedule(
            now_ms,
            state.tuning.respawn_delay_ms,
            Deferred::RespawnShip {
                pos: bounds.center(),
            },
        );
    }
}
