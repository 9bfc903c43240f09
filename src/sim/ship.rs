//! The player's ship and its lasers

use glam::Vec2;

use super::collision::Bounds;
use super::laser::Laser;
use crate::settings::{LaserTuning, ScreenSize, Settings, ShipTuning};

/// Input for a single tick, already polled by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipInput {
    /// Desired direction in screen space (y down). Longer than 1 is clamped.
    pub movement: Vec2,
    /// Fire button held
    pub fire: bool,
}

/// The player-controlled ship
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite/collision size, centred on `pos`
    pub size: Vec2,
    /// Lasers in flight, oldest first
    pub lasers: Vec<Laser>,
    /// Tinted red after a hit (visual only)
    pub damaged: bool,
    damage_timer: f32,
    fire_cooldown: f32,
    laser_size: Vec2,
    tuning: ShipTuning,
    laser_tuning: LaserTuning,
    playfield: ScreenSize,
}

impl PlayerShip {
    /// Ship parked at the bottom centre of the playfield
    pub fn new(settings: &Settings, size: Vec2, laser_size: Vec2) -> Self {
        let field = settings.screen.as_vec2();
        Self {
            pos: Vec2::new(field.x / 2.0, field.y - size.y / 2.0),
            vel: Vec2::ZERO,
            size,
            lasers: Vec::with_capacity(settings.laser.max_active),
            damaged: false,
            damage_timer: 0.0,
            fire_cooldown: 0.0,
            laser_size,
            tuning: settings.ship.clone(),
            laser_tuning: settings.laser.clone(),
            playfield: settings.screen,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::rect_centered(self.pos, self.size)
    }

    /// Where new lasers appear
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.size.y / 2.0)
    }

    /// Advance one tick. Returns true if a laser was fired.
    pub fn update(&mut self, dt: f32, input: &ShipInput) -> bool {
        if self.damaged {
            self.damage_timer -= dt;
            if self.damage_timer <= 0.0 {
                self.damaged = false;
                self.damage_timer = 0.0;
            }
        }

        self.vel = input.movement.clamp_length_max(1.0) * self.tuning.speed;
        self.pos += self.vel * dt;
        self.clamp_to_playfield();

        for laser in &mut self.lasers {
            laser.advance(dt, self.playfield);
        }
        self.lasers.retain(|laser| laser.active);

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        input.fire && self.try_fire()
    }

    fn clamp_to_playfield(&mut self) {
        let half = self.size / 2.0;
        let field = self.playfield.as_vec2();
        // A ship wider than the field sits in the middle
        let min = half.min(field / 2.0);
        let max = (field - half).max(field / 2.0);
        self.pos = self.pos.clamp(min, max);
    }

    fn try_fire(&mut self) -> bool {
        if self.fire_cooldown > 0.0 || self.lasers.len() >= self.laser_tuning.max_active {
            return false;
        }
        let vel = Vec2::new(0.0, -self.laser_tuning.speed);
        self.lasers.push(Laser::new(self.nose(), vel, self.laser_size));
        self.fire_cooldown = self.laser_tuning.cooldown_secs;
        log::trace!("Laser fired from {:?} ({} in flight)", self.pos, self.lasers.len());
        true
    }

    /// Remove and return the laser at `index` (fire order)
    pub fn remove_laser(&mut self, index: usize) -> Laser {
        self.lasers.remove(index)
    }

    /// Start (or restart) the damage tint
    pub fn mark_damaged(&mut self) {
        self.damaged = true;
        self.damage_timer = self.tuning.damage_flash_secs;
    }
}
