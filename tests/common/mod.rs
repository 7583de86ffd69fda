//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use roche::bodies::{BodyColor, PlanetId};
use roche::interaction::InteractionController;
use roche::physics::circular_orbit_velocity;
use roche::types::{AU, G, SUN_MASS};
use roche::world::SimulationWorld;

pub const EARTH_MASS: f64 = 5.97e24;

/// Create a circular orbit state at the given distance from the sun.
pub fn circular_orbit(distance_au: f64) -> (DVec2, DVec2) {
    let r = distance_au * AU;
    let v = (G * SUN_MASS / r).sqrt();
    (DVec2::new(r, 0.0), DVec2::new(0.0, v))
}

/// A world with one planet on a circular orbit at `(distance_au, 0)`.
pub fn world_with_planet(distance_au: f64, radius: f64) -> (SimulationWorld, PlanetId) {
    let mut world = SimulationWorld::new(7).unwrap();
    let (pos, _) = circular_orbit(distance_au);
    let vel = circular_orbit_velocity(DVec2::ZERO, SUN_MASS, pos);
    let id = world
        .add_planet(pos, vel, radius, BodyColor([80, 160, 240]), EARTH_MASS)
        .unwrap();
    (world, id)
}

/// Pick up planet `id`, carry it to `to` and let go.
pub fn drag_and_release(
    world: &mut SimulationWorld,
    controller: &mut InteractionController,
    id: PlanetId,
    to: DVec2,
) {
    let at = world.planet(id).unwrap().body.pos();
    assert_eq!(controller.on_press(world, at), Some(id));
    controller.on_move(world, to);
    controller.on_release(world).unwrap();
}

/// Total linear momentum of every planet, sun included.
pub fn planet_momentum(world: &SimulationWorld) -> DVec2 {
    world
        .planets()
        .iter()
        .map(|p| p.body.vel() * p.body.mass())
        .sum()
}
