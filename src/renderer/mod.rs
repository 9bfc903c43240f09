//! Rendering contract
//!
//! The core never talks to a GPU. Drawing produces a back-to-front sequence
//! of `SpriteInstance`s pushed into a `Canvas`; the host's sprite batch turns
//! them into draw calls.

pub mod scene;
pub mod sprite;

pub use scene::draw_gameplay;
pub use sprite::{SpriteInstance, colors};

/// Receives sprites in draw order (first = furthest back)
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: SpriteInstance);
}

/// Canvas that records every sprite for later upload or inspection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    sprites: Vec<SpriteInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    /// Raw instance bytes, ready for a vertex/instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }
}

impl Canvas for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteInstance) {
        self.sprites.push(sprite);
    }
}
