//! Drag-and-release protocol for planets.
//!
//! Press picks up a planet under the pointer, move carries it, release
//! throws it onto a fresh circular orbit around the sun. A planet let go
//! inside the Roche limit starts breaking up.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::bodies::PlanetId;
use crate::camera::RENDER_SCALE;
use crate::physics::{circular_orbit_velocity, separation};
use crate::world::SimulationWorld;

/// Result of letting go of a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub planet: PlanetId,
    /// Distance to the sun at release (meters)
    pub distance_to_sun: f64,
    /// Launch velocity (m/s)
    pub velocity: DVec2,
    /// Whether the planet was let go inside the Roche limit and is now breaking up
    pub inside_roche_limit: bool,
}

/// Tracks which planet, if any, the pointer is holding.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct InteractionController {
    selected: Option<PlanetId>,
}

impl InteractionController {
    pub fn selected(&self) -> Option<PlanetId> {
        self.selected
    }

    /// Forget the selection without touching the world (e.g. after a reset).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Pick up the first non-sun planet whose disc contains `point` (meters).
    ///
    /// Planet radii are render units, so the pick radius is scaled back to
    /// meters. Ignored while a planet is already held.
    pub fn on_press(&mut self, world: &mut SimulationWorld, point: DVec2) -> Option<PlanetId> {
        if self.selected.is_some() {
            return None;
        }

        let hit = world
            .planets()
            .iter()
            .filter(|p| !p.is_sun())
            .find(|p| (point - p.body.pos()).length() < p.body.radius / RENDER_SCALE)
            .map(|p| p.id)?;

        let planet = world.planet_mut(hit)?;
        planet.start_drag();
        self.selected = Some(hit);
        Some(hit)
    }

    /// Carry the held planet to `point` (meters).
    pub fn on_move(&mut self, world: &mut SimulationWorld, point: DVec2) {
        let Some(id) = self.selected else {
            return;
        };

        let sun_pos = world.sun().body.pos();
        match world.planet_mut(id) {
            Some(planet) => planet.drag_to(point, sun_pos),
            // Broke apart while held
            None => self.selected = None,
        }
    }

    /// Let go of the held planet, launching it on a circular orbit.
    pub fn on_release(&mut self, world: &mut SimulationWorld) -> Option<Release> {
        let id = self.selected.take()?;

        let roche_limit = world.roche_limit();
        let (sun_pos, sun_mass) = {
            let sun = world.sun();
            (sun.body.pos(), sun.body.mass())
        };
        let planet = world.planet_mut(id)?;

        let pos = planet.body.pos();
        let distance = separation(sun_pos, pos);
        let velocity = circular_orbit_velocity(sun_pos, sun_mass, pos);
        planet.release(velocity, distance);

        let inside_roche_limit = distance < roche_limit;
        if inside_roche_limit {
            planet.begin_breakup();
        } else {
            planet.clear_breakup();
        }

        Some(Release {
            planet: id,
            distance_to_sun: distance,
            velocity,
            inside_roche_limit,
        })
    }
}
