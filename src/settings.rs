//! Game settings and tuning
//!
//! Everything the host used to expose as globals (screen size, RNG seed) plus
//! the gameplay tuning values. Loaded from JSON; missing fields fall back to
//! the defaults in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as a float vector
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// True if `pos` lies inside the playfield
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= self.width as f32 && pos.y <= self.height as f32
    }
}

/// Player ship tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Movement speed in pixels per second
    pub speed: f32,
    /// Seconds the damage tint stays visible
    pub damage_flash_secs: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            speed: SHIP_SPEED,
            damage_flash_secs: DAMAGE_FLASH_SECS,
        }
    }
}

/// Laser tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserTuning {
    /// Travel speed in pixels per second (straight up)
    pub speed: f32,
    /// Minimum seconds between shots
    pub cooldown_secs: f32,
    /// Maximum lasers in flight at once
    pub max_active: usize,
}

impl Default for LaserTuning {
    fn default() -> Self {
        Self {
            speed: LASER_SPEED,
            cooldown_secs: FIRE_COOLDOWN_SECS,
            max_active: MAX_LASERS,
        }
    }
}

/// Asteroid tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Collision radius in pixels
    pub radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Number of frames in the explosion sheet
    pub explosion_frames: u32,
    /// Seconds each explosion frame is shown
    pub explosion_frame_secs: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            radius: ASTEROID_RADIUS,
            min_speed: ASTEROID_MIN_SPEED,
            max_speed: ASTEROID_MAX_SPEED,
            explosion_frames: EXPLOSION_FRAME_COUNT,
            explosion_frame_secs: EXPLOSION_FRAME_SECS,
        }
    }
}

impl AsteroidTuning {
    /// Total time from first hit to removal
    pub fn explosion_duration(&self) -> f32 {
        self.explosion_frames as f32 * self.explosion_frame_secs
    }
}

/// Complete session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield size
    pub screen: ScreenSize,
    /// Seed for asteroid spawns
    pub seed: u64,
    /// Fade-in alpha lost per second
    pub fade_speed: f32,

    pub ship: ShipTuning,
    pub laser: LaserTuning,
    pub asteroid: AsteroidTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            seed: 0x5eed_cafe,
            fade_speed: FADE_SPEED,
            ship: ShipTuning::default(),
            laser: LaserTuning::default(),
            asteroid: AsteroidTuning::default(),
        }
    }
}

impl Settings {
    /// Default settings with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject tuning values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen must be non-empty, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if !(self.fade_speed > 0.0) {
            return Err(ConfigError::Invalid("fade_speed must be positive".into()));
        }
        if !(self.ship.speed >= 0.0) || !(self.ship.damage_flash_secs >= 0.0) {
            return Err(ConfigError::Invalid("ship tuning must be non-negative".into()));
        }
        if !(self.laser.speed > 0.0) || !(self.laser.cooldown_secs >= 0.0) {
            return Err(ConfigError::Invalid("laser speed must be positive".into()));
        }
        if self.laser.max_active == 0 {
            return Err(ConfigError::Invalid("laser.max_active must be at least 1".into()));
        }
        let asteroid = &self.asteroid;
        if !(asteroid.radius > 0.0) {
            return Err(ConfigError::Invalid("asteroid.radius must be positive".into()));
        }
        if !(asteroid.min_speed >= 0.0) || asteroid.min_speed > asteroid.max_speed {
            return Err(ConfigError::Invalid(format!(
                "asteroid speed range {}..{} is empty",
                asteroid.min_speed, asteroid.max_speed
            )));
        }
        if asteroid.explosion_frames == 0 || !(asteroid.explosion_frame_secs > 0.0) {
            return Err(ConfigError::Invalid(
                "explosion needs at least one frame with a positive duration".into(),
            ));
        }
        Ok(())
    }
}
