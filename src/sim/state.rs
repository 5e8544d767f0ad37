//! Game state and spawning
//!
//! `GameState` exclusively owns every entity collection. Only the tick and the
//! methods here mutate it; renderers read through `views()` and the accessors.

use glam::Vec2;

use super::asteroid::{Asteroid, AsteroidSize};
use super::bullet::Bullet;
use super::entity::{Bounds, EntityView};
use super::particle::Particle;
use super::rng::{RandomSource, SeededRng};
use super::schedule::Timers;
use super::ship::Ship;
use crate::consts::*;
use crate::rotated;
use crate::tuning::Tuning;

/// Actions deferred to a later tick boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deferred {
    /// Bring the ship back at `pos` with zero velocity
    RespawnShip { pos: Vec2 },
}

/// What the score/lives display needs after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStatus {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub game_over: bool,
}

/// Number of large asteroids in the wave for `level`
pub fn wave_size(level: u32) -> u32 {
    WAVE_BASE + level.saturating_mul(2).min(WAVE_EXTRA_CAP)
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SeededRng> {
    pub tuning: Tuning,
    pub(crate) rng: R,
    pub(crate) score: u64,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    pub(crate) game_over: bool,
    pub(crate) ship: Ship,
    pub(crate) asteroids: Vec<Asteroid>,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) particles: Vec<Particle>,
    /// Wall-clock time of the last random asteroid spawn
    pub(crate) last_asteroid_spawn_ms: f64,
    pub(crate) timers: Timers<Deferred>,
}

impl GameState<SeededRng> {
    /// Session driven by a seeded PCG stream
    pub fn with_seed(seed: u64, tuning: Tuning, bounds: Bounds) -> Self {
        Self::new(tuning, SeededRng::new(seed), bounds)
    }

    /// Seed this session was created with, for replaying it
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Fresh session: ship at the board center, no asteroids until `start`
    pub fn new(tuning: Tuning, rng: R, bounds: Bounds) -> Self {
        let lives = tuning.starting_lives;
        Self {
            tuning,
            rng,
            score: 0,
            lives,
            level: 1,
            game_over: false,
            ship: Ship::new(bounds.center(), Vec2::ZERO, 0.0),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            last_asteroid_spawn_ms: 0.0,
            timers: Timers::new(),
        }
    }

    /// Spawn the opening wave
    pub fn start(&mut self, now_ms: f64, bounds: Bounds) {
        log::info!("Session started: level {}, {} lives", self.level, self.lives);
        self.last_asteroid_spawn_ms = now_ms;
        self.spawn_wave(now_ms, bounds);
    }

    /// Reset everything and start over
    ///
    /// Pending deferred events from the old session are dropped, so a respawn
    /// scheduled before the restart can never fire into the new one.
    pub fn restart(&mut self, now_ms: f64, bounds: Bounds) {
        self.timers.clear();
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.game_over = false;
        self.asteroids.clear();
        self.bullets.clear();
        self.particles.clear();
        self.ship.respawn(bounds.center(), Vec2::ZERO, 0.0);
        log::info!("Session restarted");
        self.start(now_ms, bounds);
    }

    /// One large asteroid from a random edge, aimed roughly at the center
    pub fn spawn_random_asteroid(&mut self, now_ms: f64, bounds: Bounds) {
        let rng = &mut self.rng;
        let edge = (rng.next_f32() * 4.0) as u32;
        let pos = match edge {
            0 => Vec2::new(rng.next_f32() * bounds.width, -SPAWN_BUFFER),
            1 => Vec2::new(bounds.width + SPAWN_BUFFER, rng.next_f32() * bounds.height),
            2 => Vec2::new(rng.next_f32() * bounds.width, bounds.height + SPAWN_BUFFER),
            _ => Vec2::new(-SPAWN_BUFFER, rng.next_f32() * bounds.height),
        };

        let to_center = (bounds.center() - pos).normalize_or_zero();
        let dir = rotated(to_center, rng.centered(SPAWN_AIM_JITTER));
        let level_factor = self.level.min(SPAWN_SPEED_LEVEL_CAP) as f32;
        let speed = SPAWN_BASE_SPEED + rng.next_f32() * SPAWN_SPEED_PER_LEVEL * level_factor;
        let rotation = rng.angle();
        let rotation_speed = rng.centered(SPAWN_SPIN);

        let asteroid = Asteroid::new(
            pos,
            dir * speed,
            rotation,
            rotation_speed,
            AsteroidSize::Large,
            rng,
        );
        self.asteroids.push(asteroid);
        self.last_asteroid_spawn_ms = now_ms;
    }

    /// Spawn the full wave for the current level
    pub fn spawn_wave(&mut self, now_ms: f64, bounds: Bounds) {
        let count = wave_size(self.level);
        for _ in 0..count {
            self.spawn_random_asteroid(now_ms, bounds);
        }
    }

    /// Scatter `count` sparks at `pos`
    pub(crate) fn explode(&mut self, pos: Vec2, count: usize) {
        let sparks = Particle::burst(pos, count, &mut self.rng);
        self.particles.extend(sparks);
    }

    pub fn status(&self) -> HudStatus {
        HudStatus {
            score: self.score,
            lives: self.lives,
            level: self.level,
            game_over: self.game_over,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Deferred events not yet delivered
    pub fn pending_events(&self) -> usize {
        self.timers.pending()
    }

    /// Everything a renderer draws this frame, in draw order
    pub fn views(&self) -> impl Iterator<Item = EntityView<'_>> {
        let ship = self
            .ship
            .is_visible()
            .then_some(EntityView::Ship(&self.ship));
        ship.into_iter()
            .chain(self.bullets.iter().map(EntityView::Bullet))
            .chain(self.asteroids.iter().map(EntityView::Asteroid))
            .chain(self.particles.iter().map(EntityView::Particle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_new_state() {
        let state = GameState::with_seed(1, Tuning::default(), BOUNDS);
        let status = state.status();
        assert_eq!(status.score, 0);
        assert_eq!(status.lives, 3);
        assert_eq!(status.level, 1);
        assert!(!status.game_over);
        assert_eq!(state.ship().body.pos, Vec2::new(400.0, 300.0));
        assert!(state.asteroids().is_empty());
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_wave_size() {
        assert_eq!(wave_size(1), 5);
        assert_eq!(wave_size(2), 7);
        assert_eq!(wave_size(6), 15);
        assert_eq!(wave_size(40), 15);
    }

    #[test]
    fn test_start_spawns_wave_off_screen() {
        let mut state = GameState::with_seed(7, Tuning::default(), BOUNDS);
        state.start(500.0, BOUNDS);
        assert_eq!(state.asteroids().len(), 5);
        assert_eq!(state.last_asteroid_spawn_ms, 500.0);
        for a in state.asteroids() {
            assert_eq!(a.size(), AsteroidSize::Large);
            let p = a.body.pos;
            let outside = p.x <= -SPAWN_BUFFER + 1e-3
                || p.x >= BOUNDS.width + SPAWN_BUFFER - 1e-3
                || p.y <= -SPAWN_BUFFER + 1e-3
                || p.y >= BOUNDS.height + SPAWN_BUFFER - 1e-3;
            assert!(outside, "spawned inside the board at {p:?}");
            let speed = a.body.vel.length();
            assert!((SPAWN_BASE_SPEED - 1e-3..=SPAWN_BASE_SPEED + 30.0).contains(&speed));
        }
    }

    #[test]
    fn test_spawn_scripted_top_edge() {
        // edge 0 (top), x = 0.5 * width, no aim jitter, speed 50 + 0.5 * 30
        let rng = SequenceRng::new(vec![0.1, 0.5, 0.5, 0.5, 0.0, 0.5]);
        let mut state = GameState::new(Tuning::default(), rng, BOUNDS);
        state.spawn_random_asteroid(0.0, BOUNDS);
        let a = &state.asteroids()[0];
        assert_eq!(a.body.pos, Vec2::new(400.0, -SPAWN_BUFFER));
        assert!(a.body.vel.x.abs() < 1e-3);
        assert!((a.body.vel.y - 65.0).abs() < 1e-3);
    }

    #[test]
    fn test_spawn_speed_scales_with_level() {
        let mut state = GameState::new(Tuning::default(), SequenceRng::constant(0.99), BOUNDS);
        state.level = 3;
        state.spawn_random_asteroid(0.0, BOUNDS);
        let speed = state.asteroids()[0].body.vel.length();
        assert!((speed - (50.0 + 0.99 * 90.0)).abs() < 1e-2);

        state.level = 9;
        state.spawn_random_asteroid(0.0, BOUNDS);
        let speed = state.asteroids()[1].body.vel.length();
        assert!((speed - (50.0 + 0.99 * 150.0)).abs() < 1e-2);
    }

    #[test]
    fn test_views_order_and_hidden_ship() {
        let mut state = GameState::with_seed(3, Tuning::default(), BOUNDS);
        state.start(0.0, BOUNDS);
        state.bullets.push(Bullet::new(Vec2::new(10.0, 10.0), Vec2::ZERO));
        state.explode(Vec2::new(50.0, 50.0), 2);

        let views: Vec<_> = state.views().collect();
        assert_eq!(views.len(), 1 + 1 + 5 + 2);
        assert!(matches!(views[0], EntityView::Ship(_)));
        assert!(matches!(views[1], EntityView::Bullet(_)));
        assert!(matches!(views[2], EntityView::Asteroid(_)));
        assert!(matches!(views[8], EntityView::Particle(_)));

        state.ship.destroy();
        assert!(state.views().all(|v| !matches!(v, EntityView::Ship(_))));
    }
}
