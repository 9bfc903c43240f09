//! Sprite instance records handed to the host's sprite batch

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::Texture;

/// One textured quad
///
/// `frame` selects a cell from a horizontal strip of `frames` equal cells;
/// single-image textures use frame 0 of 1.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub texture: u32,
    pub frame: u32,
    pub frames: u32,
    /// Top-left corner in screen pixels
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// RGBA multiplier
    pub tint: [f32; 4],
}

impl SpriteInstance {
    /// Whole texture stretched over a rectangle
    pub fn rect(texture: &Texture, top_left: Vec2, size: Vec2, tint: [f32; 4]) -> Self {
        Self {
            texture: texture.id,
            frame: 0,
            frames: 1,
            position: top_left.to_array(),
            size: size.to_array(),
            tint,
        }
    }

    /// Texture at its native size, centred on `center`
    pub fn centered(texture: &Texture, center: Vec2, tint: [f32; 4]) -> Self {
        let size = texture.size();
        Self::rect(texture, center - size / 2.0, size, tint)
    }

    /// One cell of a sprite strip, centred on `center`
    pub fn strip_frame(texture: &Texture, frame: u32, frames: u32, center: Vec2, tint: [f32; 4]) -> Self {
        let frames = frames.max(1);
        let size = Vec2::new(texture.width as f32 / frames as f32, texture.height as f32);
        Self {
            texture: texture.id,
            frame: frame.min(frames - 1),
            frames,
            position: (center - size / 2.0).to_array(),
            size: size.to_array(),
            tint,
        }
    }
}

/// Tints for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Ship after taking a hit
    pub const DAMAGED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// Black at the given opacity, for the fade-in overlay
    pub fn fade(alpha: f32) -> [f32; 4] {
        [0.0, 0.0, 0.0, alpha.clamp(0.0, 1.0)]
    }
}
