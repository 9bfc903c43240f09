//! Named asset loading
//!
//! The core never touches files. The host hands it an `AssetLoader` at
//! construction and the core asks for assets by name, getting back opaque
//! handles it later passes to the renderer.

use std::collections::HashMap;

use glam::Vec2;

use crate::error::AssetError;

/// Asset names the gameplay core requests
pub mod names {
    pub const BACKGROUND: &str = "background";
    pub const SHIP: &str = "ship";
    pub const LASER: &str = "laser";
    pub const ASTEROID: &str = "asteroid";
    /// Horizontal strip of explosion frames
    pub const EXPLOSION: &str = "explosion";

    pub const LASER_SOUND: &str = "sfx/laser";
    pub const EXPLOSION_SOUND: &str = "sfx/explosion";
}

/// A loaded texture: host-side id plus pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A loaded sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Capability to resolve assets by name
pub trait AssetLoader {
    fn texture(&mut self, name: &str) -> Result<Texture, AssetError>;
    fn sound(&mut self, name: &str) -> Result<SoundHandle, AssetError>;
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Texture(Texture),
    Sound(SoundHandle),
}

/// In-memory asset table
///
/// Hosts that preload content register it here; tests and the headless
/// binary use `with_defaults`.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    entries: HashMap<String, Entry>,
    next_id: u32,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every asset the gameplay core asks for
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_texture(names::BACKGROUND, 1920, 1080);
        registry.register_texture(names::SHIP, 64, 64);
        registry.register_texture(names::LASER, 6, 24);
        registry.register_texture(names::ASTEROID, 96, 96);
        registry.register_texture(names::EXPLOSION, 96 * 8, 96);
        registry.register_sound(names::LASER_SOUND);
        registry.register_sound(names::EXPLOSION_SOUND);
        registry
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register (or replace) a texture under `name`
    pub fn register_texture(&mut self, name: &str, width: u32, height: u32) -> Texture {
        let texture = Texture {
            id: self.allocate_id(),
            width,
            height,
        };
        self.entries.insert(name.to_string(), Entry::Texture(texture));
        texture
    }

    /// Register (or replace) a sound under `name`
    ///
    /// Sounds and textures share one namespace, so a sound registered under a
    /// texture's name replaces it.
    pub fn register_sound(&mut self, name: &str) -> SoundHandle {
        let sound = SoundHandle(self.allocate_id());
        self.entries.insert(name.to_string(), Entry::Sound(sound));
        sound
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetLoader for AssetRegistry {
    fn texture(&mut self, name: &str) -> Result<Texture, AssetError> {
        match self.entries.get(name) {
            Some(Entry::Texture(texture)) => Ok(*texture),
            Some(Entry::Sound(_)) => Err(AssetError::WrongKind {
                name: name.to_string(),
                expected: "texture",
            }),
            None => Err(AssetError::NotFound(name.to_string())),
        }
    }

    fn sound(&mut self, name: &str) -> Result<SoundHandle, AssetError> {
        match self.entries.get(name) {
            Some(Entry::Sound(sound)) => Ok(*sound),
            Some(Entry::Texture(_)) => Err(AssetError::WrongKind {
                name: name.to_string(),
                expected: "sound",
            }),
            None => Err(AssetError::NotFound(name.to_string())),
        }
    }
}
