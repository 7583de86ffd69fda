//! Physics for planets and fragments.
//!
//! Pairwise Newtonian gravity, a fixed-step semi-implicit Euler integrator,
//! and the Bevy system that advances the [`SimulationWorld`] once per frame.

pub mod gravity;
pub mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{
    attraction, bearing, circular_orbit_speed, circular_orbit_velocity, deflected_attraction,
    separation, unit_vector,
};
pub use integrator::semi_implicit_euler;

use crate::time::SimulationClock;
use crate::types::SimulationSet;
use crate::world::SimulationWorld;

/// Plugin stepping the simulation world once per rendered frame.
///
/// Expects a [`SimulationWorld`] resource to be inserted by the caller
/// (see [`crate::scenario::ScenarioPlugin`]).
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Step, SimulationSet::Render).chain(),
        )
        .add_systems(
            Update,
            physics_step
                .in_set(SimulationSet::Step)
                .run_if(resource_exists::<SimulationWorld>),
        );
    }
}

/// Advance the world by one fixed timestep unless paused.
fn physics_step(mut world: ResMut<SimulationWorld>, mut clock: ResMut<SimulationClock>) {
    if clock.paused {
        return;
    }

    let report = world.step();
    clock.advance();

    for id in &report.destroyed {
        info!("Planet {:?} broke apart completely", id);
    }
    if report.dropped > 0 {
        warn!("Dropped {} bodies with non-finite state", report.dropped);
    }
}
