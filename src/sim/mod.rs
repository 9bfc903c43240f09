//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single owner, single thread: only `Gameplay::update` mutates state
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod gameplay;
pub mod laser;
pub mod ship;

pub use asteroid::{Asteroid, AsteroidState};
pub use collision::{Bounds, Contacts, HitCause, first_laser_hit, resolve};
pub use gameplay::{GameEvent, Gameplay, Sounds, Sprites};
pub use laser::Laser;
pub use ship::{PlayerShip, ShipInput};
