//! Proxima Centauri - gameplay core of a small 2D asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, lasers, asteroid, collisions)
//! - `renderer`: Draw contract consumed by the host's sprite batch
//! - `assets`: Named asset loading capability
//! - `settings`: Data-driven tuning and screen configuration

pub mod assets;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetLoader, AssetRegistry, SoundHandle, Texture};
pub use error::{AssetError, ConfigError};
pub use settings::{ScreenSize, Settings};
pub use sim::Gameplay;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the host's fixed-step loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: u32 = 1920;
    pub const SCREEN_HEIGHT: u32 = 1080;

    /// Fade-in overlay alpha lost per second (0.02 per tick at 60 Hz)
    pub const FADE_SPEED: f32 = 1.2;

    /// Ship defaults
    pub const SHIP_SPEED: f32 = 420.0;
    /// Seconds the ship stays tinted after a hit
    pub const DAMAGE_FLASH_SECS: f32 = 0.5;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 900.0;
    pub const FIRE_COOLDOWN_SECS: f32 = 0.2;
    pub const MAX_LASERS: usize = 8;

    /// Asteroid defaults
    pub const ASTEROID_RADIUS: f32 = 48.0;
    pub const ASTEROID_MIN_SPEED: f32 = 80.0;
    pub const ASTEROID_MAX_SPEED: f32 = 200.0;

    /// Explosion sprite sheet
    pub const EXPLOSION_FRAME_COUNT: u32 = 8;
    pub const EXPLOSION_FRAME_SECS: f32 = 0.1;
}

/// Wrap a coordinate into `[-margin, extent + margin)`
///
/// Anything leaving one side re-enters on the opposite side.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32, margin: f32) -> f32 {
    let span = extent + 2.0 * margin;
    (value + margin).rem_euclid(span) - margin
}

/// Wrap a position around a playfield of `size`, allowing `margin` off-screen
#[inline]
pub fn wrap_position(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_coordinate(pos.x, size.x, margin),
        wrap_coordinate(pos.y, size.y, margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coordinate_inside_is_identity() {
        assert!((wrap_coordinate(100.0, 1920.0, 48.0) - 100.0).abs() < 0.001);
        assert!((wrap_coordinate(-10.0, 1920.0, 48.0) - -10.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_coordinate_crosses_edges() {
        // Past the right margin comes back in on the left
        let wrapped = wrap_coordinate(1920.0 + 48.0 + 5.0, 1920.0, 48.0);
        assert!((wrapped - (-48.0 + 5.0)).abs() < 0.001);

        // Past the left margin comes back in on the right
        let wrapped = wrap_coordinate(-48.0 - 5.0, 1920.0, 48.0);
        assert!((wrapped - (1920.0 + 48.0 - 5.0)).abs() < 0.001);
    }

    #[test]
    fn test_wrap_position() {
        let size = Vec2::new(100.0, 50.0);
        let p = wrap_position(Vec2::new(120.0, -20.0), size, 10.0);
        assert!((p.x - 0.0).abs() < 0.001);
        assert!((p.y - 50.0).abs() < 0.001);
    }
}
