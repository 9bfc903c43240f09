//! Gameplay scene composition
//!
//! Back to front: background, fade overlay, lasers, ship, asteroid.

use glam::Vec2;

use super::Canvas;
use super::sprite::{SpriteInstance, colors};
use crate::sim::{AsteroidState, Gameplay};

/// Emit the gameplay screen into `canvas`
pub fn draw_gameplay(game: &Gameplay, canvas: &mut impl Canvas) {
    let sprites = game.sprites();
    let field = game.settings().screen.as_vec2();

    canvas.draw_sprite(SpriteInstance::rect(&sprites.background, Vec2::ZERO, field, colors::WHITE));

    if game.fade_alpha() > 0.0 {
        canvas.draw_sprite(SpriteInstance::rect(
            &sprites.background,
            Vec2::ZERO,
            field,
            colors::fade(game.fade_alpha()),
        ));
    }

    let ship = game.ship();
    for laser in &ship.lasers {
        canvas.draw_sprite(SpriteInstance::centered(&sprites.laser, laser.pos, colors::WHITE));
    }

    let ship_tint = if ship.damaged { colors::DAMAGED } else { colors::WHITE };
    canvas.draw_sprite(SpriteInstance::centered(&sprites.ship, ship.pos, ship_tint));

    let asteroid = game.asteroid();
    match asteroid.state() {
        AsteroidState::Normal => {
            canvas.draw_sprite(SpriteInstance::centered(&sprites.asteroid, asteroid.pos, colors::WHITE));
        }
        AsteroidState::Exploding { frame, .. } => {
            canvas.draw_sprite(SpriteInstance::strip_frame(
                &sprites.explosion,
                frame,
                asteroid.explosion_frames(),
                asteroid.pos,
                colors::WHITE,
            ));
        }
        AsteroidState::Removed => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRegistry;
    use crate::consts::SIM_DT;
    use crate::renderer::DrawList;
    use crate::settings::Settings;
    use crate::sim::ShipInput;

    fn game() -> Gameplay {
        let mut assets = AssetRegistry::with_defaults();
        Gameplay::new(Settings::with_seed(5), &mut assets).unwrap()
    }

    fn draw(game: &Gameplay) -> DrawList {
        let mut list = DrawList::new();
        game.draw(&mut list);
        list
    }

    #[test]
    fn test_first_frame_order() {
        let game = game();
        let list = draw(&game);
        let sprites = game.sprites();
        let textures: Vec<u32> = list.sprites().iter().map(|s| s.texture).collect();

        // Background, fade overlay, ship, asteroid
        assert_eq!(
            textures,
            vec![
                sprites.background.id,
                sprites.background.id,
                sprites.ship.id,
                sprites.asteroid.id
            ]
        );
        assert_eq!(list.sprites()[1].tint, colors::fade(1.0));
    }

    #[test]
    fn test_fade_overlay_disappears() {
        let mut game = game();
        for _ in 0..60 {
            game.update(SIM_DT, &ShipInput::default());
        }
        let list = draw(&game);
        let backgrounds = list
            .sprites()
            .iter()
            .filter(|s| s.texture == game.sprites().background.id)
            .count();
        assert_eq!(backgrounds, 1);
    }

    #[test]
    fn test_lasers_drawn_behind_ship() {
        let mut game = game();
        let fire = ShipInput {
            fire: true,
            ..Default::default()
        };
        game.update(SIM_DT, &fire);

        let list = draw(&game);
        let sprites = game.sprites();
        let laser_idx = list.sprites().iter().position(|s| s.texture == sprites.laser.id);
        let ship_idx = list.sprites().iter().position(|s| s.texture == sprites.ship.id);
        assert!(laser_idx.is_some());
        assert!(laser_idx < ship_idx);
    }
}
