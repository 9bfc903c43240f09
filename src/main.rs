//! Proxima Centauri headless driver
//!
//! Runs a scripted gameplay session at the fixed timestep and logs what
//! happens. Pass a settings JSON path as the first argument to override the
//! defaults; set `RUST_LOG=debug` to see every collision.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use proxima_centauri::consts::SIM_DT;
    use proxima_centauri::renderer::DrawList;
    use proxima_centauri::sim::{GameEvent, ShipInput};
    use proxima_centauri::{AssetRegistry, Gameplay, Settings};

    /// Twenty seconds of play
    const SESSION_TICKS: u32 = 20 * 60;

    env_logger::init();
    log::info!("Proxima Centauri (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut assets = AssetRegistry::with_defaults();
    let mut game = match Gameplay::new(settings, &mut assets) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to load content: {}", e);
            std::process::exit(1);
        }
    };

    let mut frame = DrawList::new();
    let mut destroyed = 0;
    let mut hits = 0;

    for tick in 0..SESSION_TICKS {
        // Sweep side to side, firing in bursts
        let sweep = (tick as f32 * SIM_DT * 0.8).sin();
        let input = ShipInput {
            movement: Vec2::new(sweep, 0.0),
            fire: (tick / 30) % 2 == 0,
        };

        game.update(SIM_DT, &input);

        frame.clear();
        game.draw(&mut frame);

        for event in game.drain_events() {
            match event {
                GameEvent::AsteroidDestroyed { cause } => {
                    destroyed += 1;
                    log::info!("tick {}: asteroid destroyed by {:?}", tick, cause);
                }
                GameEvent::ShipHit => {
                    hits += 1;
                    log::info!("tick {}: ship hit", tick);
                }
                GameEvent::LaserFired | GameEvent::AsteroidRespawned => {
                    log::debug!("tick {}: {:?}", tick, event);
                }
            }
        }
    }

    log::info!(
        "Session over after {} ticks: {} asteroids destroyed, {} ship hits, {} sprites in last frame ({} bytes)",
        game.time_ticks(),
        destroyed,
        hits,
        frame.len(),
        frame.as_bytes().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Gameplay` directly; nothing to run here
}
