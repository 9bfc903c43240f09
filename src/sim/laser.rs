//! Player lasers

use glam::Vec2;

use super::collision::Bounds;
use crate::settings::ScreenSize;

/// A single laser shot
#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite/collision size, centred on `pos`
    pub size: Vec2,
    /// Cleared once the laser leaves the playfield
    pub active: bool,
}

impl Laser {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            active: true,
        }
    }

    /// Move by one timestep and deactivate once fully off-screen
    pub fn advance(&mut self, dt: f32, screen: ScreenSize) {
        self.pos += self.vel * dt;
        if !self.is_visible(screen) {
            self.active = false;
        }
    }

    /// True while any part of the laser overlaps the playfield
    pub fn is_visible(&self, screen: ScreenSize) -> bool {
        let half = self.size / 2.0;
        let field = screen.as_vec2();
        self.pos.x + half.x >= 0.0
            && self.pos.y + half.y >= 0.0
            && self.pos.x - half.x <= field.x
            && self.pos.y - half.y <= field.y
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::rect_centered(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laser_moves_with_velocity() {
        let screen = ScreenSize::new(100, 100);
        let mut laser = Laser::new(Vec2::new(50.0, 50.0), Vec2::new(0.0, -60.0), Vec2::new(2.0, 8.0));
        laser.advance(0.5, screen);
        assert!((laser.pos.y - 20.0).abs() < 0.001);
        assert!(laser.active);
    }

    #[test]
    fn test_laser_deactivates_off_screen() {
        let screen = ScreenSize::new(100, 100);
        let mut laser = Laser::new(Vec2::new(50.0, 2.0), Vec2::new(0.0, -60.0), Vec2::new(2.0, 8.0));

        // Tail still on screen
        laser.advance(0.05, screen);
        assert!(laser.active);

        laser.advance(0.1, screen);
        assert!(!laser.active);
    }
}
