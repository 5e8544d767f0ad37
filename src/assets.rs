//! Asteroid art lookup
//!
//! Renderer-side collaborator. It walks the fallback chain
//! `asteroid.png -> asteroid.svg -> procedural outline` once and caches the
//! answer. The simulation never reads any of this: a missing image only
//! changes how an asteroid is drawn, never how it collides.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to load asset {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// Opaque handle to a decoded image owned by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Loads images by path (browser image element, file system, ...)
pub trait AssetSource {
    fn fetch(&mut self, path: &str) -> Result<ImageHandle, AssetError>;
}

/// How asteroids should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsteroidSkin {
    Image(ImageHandle),
    /// Stroke `Asteroid::outline()` instead
    Procedural,
}

/// Candidate image paths, in preference order
pub fn asteroid_image_paths(base_path: &str) -> [String; 2] {
    [
        format!("{base_path}/assets/asteroid.png"),
        format!("{base_path}/assets/asteroid.svg"),
    ]
}

/// Path prefix for static assets: project pages on `*.github.io` live under `/<project>`
pub fn base_path_for_host(host: &str, project: &str) -> String {
    if host.ends_with("github.io") && !project.is_empty() {
        format!("/{project}")
    } else {
        String::new()
    }
}

/// Cached asteroid skin resolution
#[derive(Debug, Clone, Default)]
pub struct AsteroidArt {
    base_path: String,
    skin: Option<AsteroidSkin>,
}

impl AsteroidArt {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            skin: None,
        }
    }

    /// Resolve on first call, then return the cached skin
    pub fn skin(&mut self, source: &mut impl AssetSource) -> &AsteroidSkin {
        let base_path = &self.base_path;
        self.skin
            .get_or_insert_with(|| resolve_skin(base_path, source))
    }

    /// Skin if already resolved
    pub fn cached(&self) -> Option<&AsteroidSkin> {
        self.skin.as_ref()
    }

    /// Forget the cached skin (e.g. after the renderer lost its context)
    pub fn reset(&mut self) {
        self.skin = None;
    }
}

fn resolve_skin(base_path: &str, source: &mut impl AssetSource) -> AsteroidSkin {
    for path in asteroid_image_paths(base_path) {
        match source.fetch(&path) {
            Ok(image) => {
                log::info!("Asteroid image loaded from {}", image.path);
                return AsteroidSkin::Image(image);
            }
            Err(e) => log::warn!("Asteroid image unavailable: {e}"),
        }
    }
    log::warn!("Falling back to procedural asteroid outlines");
    AsteroidSkin::Procedural
}
