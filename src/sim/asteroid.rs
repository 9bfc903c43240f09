//! The asteroid and its explosion state machine
//!
//! ```text
//! Normal --hit--> Exploding { frame, elapsed } --last frame--> Removed
//! ```
//!
//! Anything past `Normal` is invulnerable, so a second hit during the
//! explosion is ignored. `Removed` is terminal; the owner swaps in a fresh
//! asteroid when it sees it.

use glam::Vec2;
use rand::Rng;

use super::collision::Bounds;
use crate::settings::{ScreenSize, Settings};
use crate::wrap_position;

/// Asteroid lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AsteroidState {
    /// Drifting at constant velocity, can be hit
    Normal,
    /// Frozen in place playing the explosion sheet
    Exploding {
        /// Explosion frame currently shown
        frame: u32,
        /// Time accumulated towards the next frame
        elapsed: f32,
    },
    /// Animation finished, waiting to be replaced
    Removed,
}

/// The single hazard the player shoots at
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    state: AsteroidState,
    explosion_frames: u32,
    explosion_frame_secs: f32,
    playfield: ScreenSize,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            vel,
            radius: settings.asteroid.radius,
            state: AsteroidState::Normal,
            explosion_frames: settings.asteroid.explosion_frames,
            explosion_frame_secs: settings.asteroid.explosion_frame_secs,
            playfield: settings.screen,
        }
    }

    /// A motionless asteroid at `pos`
    pub fn at_rest(pos: Vec2, settings: &Settings) -> Self {
        Self::new(pos, Vec2::ZERO, settings)
    }

    /// Spawn somewhere in the upper half of the playfield, drifting in a
    /// random direction
    pub fn spawn<R: Rng>(rng: &mut R, settings: &Settings) -> Self {
        let tuning = &settings.asteroid;
        let field = settings.screen.as_vec2();
        let r = tuning.radius;

        let x = range_or_mid(rng, r, field.x - r);
        let y = range_or_mid(rng, r, field.y / 2.0);
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = range_or_mid(rng, tuning.min_speed, tuning.max_speed);
        let vel = Vec2::from_angle(heading) * speed;

        Self::new(Vec2::new(x, y), vel, settings)
    }

    pub fn state(&self) -> AsteroidState {
        self.state
    }

    /// Hits are ignored in every state but `Normal`
    pub fn is_invulnerable(&self) -> bool {
        !matches!(self.state, AsteroidState::Normal)
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, AsteroidState::Exploding { .. })
    }

    pub fn is_marked_for_removal(&self) -> bool {
        matches!(self.state, AsteroidState::Removed)
    }

    /// Explosion frame to draw (0 before the explosion starts)
    pub fn explosion_frame(&self) -> u32 {
        match self.state {
            AsteroidState::Normal => 0,
            AsteroidState::Exploding { frame, .. } => frame,
            AsteroidState::Removed => self.explosion_frames,
        }
    }

    pub fn explosion_elapsed(&self) -> f32 {
        match self.state {
            AsteroidState::Exploding { elapsed, .. } => elapsed,
            _ => 0.0,
        }
    }

    pub fn explosion_frames(&self) -> u32 {
        self.explosion_frames
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::circle(self.pos, self.radius)
    }

    /// Register a hit. Returns true if this started the explosion.
    pub fn hit(&mut self) -> bool {
        match self.state {
            AsteroidState::Normal => {
                self.state = AsteroidState::Exploding {
                    frame: 0,
                    elapsed: 0.0,
                };
                self.vel = Vec2::ZERO;
                true
            }
            AsteroidState::Exploding { .. } | AsteroidState::Removed => false,
        }
    }

    /// Advance motion or the explosion animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        match self.state {
            AsteroidState::Normal => {
                self.pos += self.vel * dt;
                self.pos = wrap_position(self.pos, self.playfield.as_vec2(), self.radius);
            }
            AsteroidState::Exploding { mut frame, elapsed } => {
                // Carry the remainder so long runs stay within a tick of the
                // nominal duration
                let mut elapsed = elapsed + dt;
                while elapsed >= self.explosion_frame_secs && frame < self.explosion_frames {
                    elapsed -= self.explosion_frame_secs;
                    frame += 1;
                }

                self.state = if frame >= self.explosion_frames {
                    log::debug!("Asteroid explosion finished at {:?}", self.pos);
                    AsteroidState::Removed
                } else {
                    AsteroidState::Exploding { frame, elapsed }
                };
            }
            AsteroidState::Removed => {}
        }
    }
}

/// Uniform sample in `lo..hi`, or `lo` when the range is empty
fn range_or_mid<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_normal_moves_at_constant_velocity() {
        let mut asteroid = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, -30.0), &settings());
        asteroid.update(0.5);
        assert!((asteroid.pos - Vec2::new(130.0, 85.0)).length() < 0.001);
        assert_eq!(asteroid.state(), AsteroidState::Normal);
    }

    #[test]
    fn test_normal_wraps_around_edges() {
        let s = settings();
        let mut asteroid = Asteroid::new(Vec2::new(1920.0 + 40.0, 500.0), Vec2::new(100.0, 0.0), &s);
        asteroid.update(0.1);
        // 1970 is past 1920 + 48, re-enters on the left
        assert!(asteroid.pos.x < 0.0);
        assert!((asteroid.pos.y - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_starts_explosion_and_freezes() {
        let mut asteroid = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 0.0), &settings());
        assert!(!asteroid.is_invulnerable());

        assert!(asteroid.hit());
        assert!(asteroid.is_invulnerable());
        assert!(asteroid.is_exploding());
        assert_eq!(asteroid.vel, Vec2::ZERO);
        assert_eq!(asteroid.explosion_frame(), 0);
        assert_eq!(asteroid.explosion_elapsed(), 0.0);

        asteroid.update(SIM_DT);
        assert_eq!(asteroid.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_second_hit_is_ignored() {
        let mut asteroid = Asteroid::at_rest(Vec2::new(100.0, 100.0), &settings());
        assert!(asteroid.hit());
        asteroid.update(0.15);
        let before = asteroid.state();

        assert!(!asteroid.hit());
        assert_eq!(asteroid.state(), before);
    }

    #[test]
    fn test_explosion_advances_frames() {
        let mut asteroid = Asteroid::at_rest(Vec2::new(100.0, 100.0), &settings());
        asteroid.hit();

        asteroid.update(0.05);
        assert_eq!(asteroid.explosion_frame(), 0);
        asteroid.update(0.06);
        assert_eq!(asteroid.explosion_frame(), 1);
        assert!((asteroid.explosion_elapsed() - 0.01).abs() < 0.0001);
    }

    #[test]
    fn test_explosion_ends_in_removed() {
        let s = settings();
        let mut asteroid = Asteroid::at_rest(Vec2::new(100.0, 100.0), &s);
        asteroid.hit();

        let mut ticks = 0;
        while !asteroid.is_marked_for_removal() {
            asteroid.update(SIM_DT);
            ticks += 1;
            assert!(ticks < 1000, "explosion never finished");
        }

        let elapsed = ticks as f32 * SIM_DT;
        let expected = s.asteroid.explosion_duration();
        assert!(elapsed >= expected - 0.001);
        assert!(elapsed <= expected + SIM_DT + 0.001);

        // Terminal: nothing more happens
        asteroid.update(SIM_DT);
        assert!(asteroid.is_marked_for_removal());
        assert!(!asteroid.hit());
    }

    #[test]
    fn test_large_step_skips_frames() {
        let mut asteroid = Asteroid::at_rest(Vec2::new(100.0, 100.0), &settings());
        asteroid.hit();
        asteroid.update(0.35);
        assert_eq!(asteroid.explosion_frame(), 3);
        asteroid.update(10.0);
        assert!(asteroid.is_marked_for_removal());
    }

    #[test]
    fn test_spawn_is_in_upper_half_and_moving() {
        let s = settings();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let asteroid = Asteroid::spawn(&mut rng, &s);
            assert_eq!(asteroid.state(), AsteroidState::Normal);
            assert!(asteroid.pos.x >= s.asteroid.radius);
            assert!(asteroid.pos.x <= 1920.0 - s.asteroid.radius);
            assert!(asteroid.pos.y <= 540.0);
            let speed = asteroid.vel.length();
            assert!(speed >= s.asteroid.min_speed - 0.01);
            assert!(speed <= s.asteroid.max_speed + 0.01);
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let s = settings();
        let a = Asteroid::spawn(&mut Pcg32::seed_from_u64(99), &s);
        let b = Asteroid::spawn(&mut Pcg32::seed_from_u64(99), &s);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Hits during the explosion never change the outcome or its timing
            #[test]
            fn explosion_duration_ignores_extra_hits(
                hit_pattern in proptest::collection::vec(any::<bool>(), 1..200),
                dt in 0.005f32..0.05,
            ) {
                let s = Settings::default();
                let mut asteroid = Asteroid::at_rest(Vec2::new(500.0, 500.0), &s);
                prop_assert!(asteroid.hit());

                let mut ticks = 0usize;
                while !asteroid.is_marked_for_removal() {
                    if hit_pattern[ticks % hit_pattern.len()] {
                        prop_assert!(!asteroid.hit());
                    }
                    prop_assert!(asteroid.is_invulnerable());
                    asteroid.update(dt);
                    ticks += 1;
                    prop_assert!(ticks < 100_000);
                }

                let elapsed = ticks as f32 * dt;
                let expected = s.asteroid.explosion_duration();
                prop_assert!(elapsed >= expected - 0.001, "{} < {}", elapsed, expected);
                prop_assert!(elapsed <= expected + dt + 0.001, "{} > {}", elapsed, expected);
            }
        }
    }
}
