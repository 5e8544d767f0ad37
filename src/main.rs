//! Asteroid Field headless host
//!
//! Drives a session on a simulated 60 Hz clock with a scripted pilot and logs
//! the HUD as it changes. Rendering and real keyboard capture belong to the
//! embedding front end; this binary exists to exercise the core end to end.
//!
//! Usage: `asteroid-field [tuning.json] [seconds]`
//!
//! `ASTEROID_FIELD_HOST` names the host the assets are served from; project
//! pages on `*.github.io` get their assets under `/<package name>`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use asteroid_field::assets::{
    AssetError, AssetSource, AsteroidArt, AsteroidSkin, ImageHandle, base_path_for_host,
};
use asteroid_field::sim::{Bounds, Frame, GameState, HudStatus, TickInput, tick};
use asteroid_field::{Action, KeyboardState, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_SECONDS: f64 = 120.0;
const BOARD: Bounds = Bounds {
    width: 800.0,
    height: 600.0,
};

/// Looks for asset files under a local directory
struct DirSource {
    root: PathBuf,
}

impl AssetSource for DirSource {
    fn fetch(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
        let full = self.root.join(path.trim_start_matches('/'));
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => Ok(ImageHandle {
                path: path.to_string(),
                width: 0,
                height: 0,
            }),
            Ok(_) => Err(AssetError::LoadFailed {
                path: path.to_string(),
                reason: "not a regular file".to_string(),
            }),
            Err(_) => Err(AssetError::NotFound(path.to_string())),
        }
    }
}

/// Holds keys the way a player would: sweep left, burst of thrust, fire constantly
struct Pilot {
    keys: KeyboardState,
}

impl Pilot {
    fn new() -> Self {
        Self {
            keys: KeyboardState::new(),
        }
    }

    fn set(&mut self, action: Action, held: bool) {
        let key = action.default_keys()[0];
        if held {
            self.keys.key_down(key);
        } else {
            self.keys.key_up(key);
        }
    }

    fn controls(&mut self, frame: u64) -> TickInput {
        let second = frame / 60;
        self.set(Action::RotateLeft, second % 4 != 3);
        self.set(Action::Thrust, frame % 90 < 12);
        self.set(Action::Fire, frame % 20 < 10);
        TickInput::sample(&self.keys)
    }
}

struct Game {
    state: GameState,
    pilot: Pilot,
    frame: u64,
    now_ms: f64,
    last_status: Option<HudStatus>,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        let seed = tuning.seed.unwrap_or_else(clock_seed);
        let mut state = GameState::with_seed(seed, tuning, BOARD);
        log::info!("Game initialized with seed: {}", state.seed());
        state.start(0.0, BOARD);
        Self {
            state,
            pilot: Pilot::new(),
            frame: 0,
            now_ms: 0.0,
            last_status: None,
        }
    }

    fn step(&mut self) -> HudStatus {
        self.frame += 1;
        self.now_ms += FRAME_MS;
        let input = self.pilot.controls(self.frame);
        let frame = Frame {
            dt: FRAME_DT,
            now_ms: self.now_ms,
            bounds: BOARD,
        };
        let status = tick(&mut self.state, &input, frame);

        if self.last_status != Some(status) {
            log::info!(
                "t={:.1}s score {} lives {} level {}",
                self.now_ms / 1000.0,
                status.score,
                status.lives,
                status.level
            );
            self.last_status = Some(status);
        }
        status
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(Path::new(path)) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Ignoring tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning = load_tuning(args.first().map(String::as_str));
    let seconds = match args.get(1).map(|s| s.parse::<f64>()) {
        Some(Ok(s)) if s > 0.0 => s,
        Some(_) => {
            log::warn!("Invalid duration, running for {} seconds", DEFAULT_SECONDS);
            DEFAULT_SECONDS
        }
        None => DEFAULT_SECONDS,
    };

    log::info!("Asteroid Field (headless) starting...");

    let host = std::env::var("ASTEROID_FIELD_HOST").unwrap_or_default();
    let mut art = AsteroidArt::new(base_path_for_host(&host, env!("CARGO_PKG_NAME")));
    let mut source = DirSource {
        root: PathBuf::from("."),
    };
    match art.skin(&mut source) {
        AsteroidSkin::Image(image) => log::info!("Drawing asteroids with {}", image.path),
        AsteroidSkin::Procedural => log::info!("Drawing asteroids as outlines"),
    }

    let mut game = Game::new(tuning);
    let max_frames = (seconds * 60.0) as u64;
    let mut status = game.state.status();
    while game.frame < max_frames {
        status = game.step();
        if status.game_over {
            break;
        }
    }

    if status.game_over {
        log::info!(
            "Game over after {:.1}s: score {}, level {}",
            game.now_ms / 1000.0,
            status.score,
            status.level
        );
    } else {
        log::info!(
            "Stopped after {:.1}s: score {}, lives {}, level {}",
            game.now_ms / 1000.0,
            status.score,
            status.lives,
            status.level
        );
    }
}
