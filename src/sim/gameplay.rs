//! Gameplay controller
//!
//! Owns the ship and the single asteroid, advances both each tick, resolves
//! their contacts and replaces the asteroid once its explosion has played.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::collision::{self, HitCause};
use super::ship::{PlayerShip, ShipInput};
use crate::assets::{AssetLoader, SoundHandle, Texture, names};
use crate::error::AssetError;
use crate::renderer::{self, Canvas};
use crate::settings::Settings;

/// Things that happened during a tick, for audio and HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LaserFired,
    AsteroidDestroyed { cause: HitCause },
    ShipHit,
    AsteroidRespawned,
}

impl GameEvent {
    /// Sound the host should play for this event, if any
    pub fn sound(&self, sounds: &Sounds) -> Option<SoundHandle> {
        match self {
            GameEvent::LaserFired => Some(sounds.laser),
            GameEvent::AsteroidDestroyed { .. } => Some(sounds.explosion),
            GameEvent::ShipHit | GameEvent::AsteroidRespawned => None,
        }
    }
}

/// Textures used while drawing gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprites {
    pub background: Texture,
    pub ship: Texture,
    pub laser: Texture,
    pub asteroid: Texture,
    pub explosion: Texture,
}

impl Sprites {
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        Ok(Self {
            background: loader.texture(names::BACKGROUND)?,
            ship: loader.texture(names::SHIP)?,
            laser: loader.texture(names::LASER)?,
            asteroid: loader.texture(names::ASTEROID)?,
            explosion: loader.texture(names::EXPLOSION)?,
        })
    }
}

/// Sound effects triggered by gameplay events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sounds {
    pub laser: SoundHandle,
    pub explosion: SoundHandle,
}

impl Sounds {
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        Ok(Self {
            laser: loader.sound(names::LASER_SOUND)?,
            explosion: loader.sound(names::EXPLOSION_SOUND)?,
        })
    }
}

/// The gameplay screen
#[derive(Debug, Clone)]
pub struct Gameplay {
    settings: Settings,
    sprites: Sprites,
    sounds: Sounds,
    rng: Pcg32,
    /// Black overlay alpha, fades from 1 to 0 on entry
    fade_alpha: f32,
    ship: PlayerShip,
    asteroid: Asteroid,
    events: Vec<GameEvent>,
    time_ticks: u64,
    asteroids_spawned: u32,
}

impl Gameplay {
    /// Load assets and set up a fresh session
    ///
    /// Fails only if an asset is missing, which the host treats as fatal.
    pub fn new(settings: Settings, loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        let sprites = Sprites::load(loader)?;
        let sounds = Sounds::load(loader)?;

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let ship = PlayerShip::new(&settings, sprites.ship.size(), sprites.laser.size());
        let asteroid = Asteroid::spawn(&mut rng, &settings);

        log::info!(
            "Gameplay started: {}x{} playfield, seed {}",
            settings.screen.width,
            settings.screen.height,
            settings.seed
        );

        Ok(Self {
            settings,
            sprites,
            sounds,
            rng,
            fade_alpha: 1.0,
            ship,
            asteroid,
            events: Vec::new(),
            time_ticks: 0,
            asteroids_spawned: 1,
        })
    }

    /// Advance the session by one tick
    pub fn update(&mut self, dt: f32, input: &ShipInput) {
        self.time_ticks += 1;

        if self.fade_alpha > 0.0 {
            self.fade_alpha = (self.fade_alpha - self.settings.fade_speed * dt).clamp(0.0, 1.0);
        }

        if self.ship.update(dt, input) {
            self.events.push(GameEvent::LaserFired);
        }

        self.asteroid.update(dt);

        let contacts = collision::resolve(&mut self.ship, &mut self.asteroid);
        if let Some(cause) = contacts.cause {
            self.events.push(GameEvent::AsteroidDestroyed { cause });
        }
        if contacts.rammed {
            self.events.push(GameEvent::ShipHit);
        }

        if self.asteroid.is_marked_for_removal() {
            self.asteroid = Asteroid::spawn(&mut self.rng, &self.settings);
            self.asteroids_spawned += 1;
            self.events.push(GameEvent::AsteroidRespawned);
            log::info!(
                "Asteroid #{} spawned at ({:.0}, {:.0})",
                self.asteroids_spawned,
                self.asteroid.pos.x,
                self.asteroid.pos.y
            );
        }
    }

    /// Issue this frame's draw calls. Never mutates state.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        renderer::draw_gameplay(self, canvas);
    }

    pub fn ship(&self) -> &PlayerShip {
        &self.ship
    }

    pub fn asteroid(&self) -> &Asteroid {
        &self.asteroid
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sprites(&self) -> &Sprites {
        &self.sprites
    }

    pub fn sounds(&self) -> &Sounds {
        &self.sounds
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Asteroids created this session, including the first
    pub fn asteroids_spawned(&self) -> u32 {
        self.asteroids_spawned
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
