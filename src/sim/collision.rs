//! Collision detection and response
//!
//! Overlap tests between circles and axis-aligned rectangles, and the
//! per-tick contact pass between the ship, its lasers and the asteroid.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::laser::Laser;
use super::ship::PlayerShip;

/// Bounding geometry for overlap tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned rectangle
    Rect { min: Vec2, max: Vec2 },
}

impl Bounds {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Bounds::Circle { center, radius }
    }

    /// Rectangle of `size` centred on `center`
    pub fn rect_centered(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() / 2.0;
        Bounds::Rect {
            min: center - half,
            max: center + half,
        }
    }

    /// True if the two shapes overlap. Touching edges do not count.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        match (*self, *other) {
            (Bounds::Circle { center: a, radius: ra }, Bounds::Circle { center: b, radius: rb }) => {
                circle_circle(a, ra, b, rb)
            }
            (Bounds::Circle { center, radius }, Bounds::Rect { min, max })
            | (Bounds::Rect { min, max }, Bounds::Circle { center, radius }) => {
                circle_rect(center, radius, min, max)
            }
            (Bounds::Rect { min: amin, max: amax }, Bounds::Rect { min: bmin, max: bmax }) => {
                rect_rect(amin, amax, bmin, bmax)
            }
        }
    }
}

#[inline]
fn circle_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

#[inline]
fn circle_rect(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let closest = center.clamp(min, max);
    center.distance_squared(closest) < radius * radius
}

#[inline]
fn rect_rect(amin: Vec2, amax: Vec2, bmin: Vec2, bmax: Vec2) -> bool {
    amin.x < bmax.x && bmin.x < amax.x && amin.y < bmax.y && bmin.y < amax.y
}

/// Index of the first laser (in fire order) overlapping `target`
///
/// Scanning stops at the first match, so at most one laser is ever consumed
/// per tick even when several overlap.
pub fn first_laser_hit(lasers: &[Laser], target: &Bounds) -> Option<usize> {
    lasers
        .iter()
        .position(|laser| laser.active && laser.bounds().overlaps(target))
}

/// What caused an asteroid to start exploding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitCause {
    Laser,
    Ship,
}

/// Outcome of one contact pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// Laser consumed by the asteroid this tick
    pub laser: Option<Laser>,
    /// Ship overlapped the asteroid and took damage
    pub rammed: bool,
    /// Set when this pass started the asteroid's explosion
    pub cause: Option<HitCause>,
}

/// Run the laser check then the ship check against the asteroid
///
/// Both checks see the asteroid as it was when the pass started: if it was
/// still vulnerable, a laser and the ship can both register in the same tick
/// and the explosion is attributed to the laser. An asteroid that is already
/// exploding consumes nothing and deals no damage.
pub fn resolve(ship: &mut PlayerShip, asteroid: &mut Asteroid) -> Contacts {
    if asteroid.is_invulnerable() {
        return Contacts::default();
    }

    let target = asteroid.bounds();
    let mut contacts = Contacts::default();

    if let Some(index) = first_laser_hit(&ship.lasers, &target) {
        contacts.laser = Some(ship.remove_laser(index));
    }

    if ship.bounds().overlaps(&target) {
        ship.mark_damaged();
        contacts.rammed = true;
    }

    let cause = match (&contacts.laser, contacts.rammed) {
        (Some(_), _) => Some(HitCause::Laser),
        (None, true) => Some(HitCause::Ship),
        (None, false) => None,
    };
    if let Some(cause) = cause {
        if asteroid.hit() {
            log::debug!("Asteroid hit by {:?} at {:?}", cause, asteroid.pos);
            contacts.cause = Some(cause);
        }
    }

    contacts
}
