//! The simulation world: the sun, its planets and the debris they shed.
//!
//! One call to [`SimulationWorld::step`] is one frame of simulation:
//! breakup (shrink and spawn fragments), planet integration, fragment
//! integration, then removal of everything dead or corrupted.

use bevy::log::{debug, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bodies::{
    BodyColor, BodyError, BodyView, BreakupState, Fragment, GravitySource, Planet, PlanetId,
};
use crate::physics::{bearing, circular_orbit_speed, unit_vector};
use crate::types::{FRAGMENT_SPREAD, FRAGMENTS_PER_STEP, ROCHE_LIMIT};

/// What happened during one [`SimulationWorld::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Fragments created by breaking planets
    pub spawned: usize,
    /// Planets whose radius reached zero and were removed
    pub destroyed: Vec<PlanetId>,
    /// Bodies removed because their position or velocity stopped being finite
    pub dropped: usize,
}

/// Owner of every body in the simulation.
///
/// The sun is always the first planet and is never removed.
#[derive(Resource, Debug)]
pub struct SimulationWorld {
    planets: Vec<Planet>,
    fragments: Vec<Fragment>,
    roche_limit: f64,
    rng: StdRng,
    next_id: u32,
}

impl SimulationWorld {
    /// A world holding only the sun, with all randomness drawn from `seed`.
    pub fn new(seed: u64) -> Result<Self, BodyError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let sun = Planet::sun(PlanetId(0), BodyColor::random(&mut rng))?;

        Ok(Self {
            planets: vec![sun],
            fragments: Vec::new(),
            roche_limit: ROCHE_LIMIT,
            rng,
            next_id: 1,
        })
    }

    /// Add a planet at `pos` moving with `vel`.
    pub fn add_planet(
        &mut self,
        pos: DVec2,
        vel: DVec2,
        radius: f64,
        color: BodyColor,
        mass: f64,
    ) -> Result<PlanetId, BodyError> {
        if !vel.is_finite() {
            return Err(BodyError::NonFinite {
                name: "velocity",
                x: vel.x,
                y: vel.y,
            });
        }

        let id = PlanetId(self.next_id);
        let mut planet = Planet::new(id, pos, radius, color, mass)?;
        planet.body.state.vel = vel;
        planet.measure_distance_to_sun(self.planets[0].body.pos());

        self.next_id += 1;
        self.planets.push(planet);
        Ok(id)
    }

    pub fn sun(&self) -> &Planet {
        &self.planets[0]
    }

    /// All planets, sun first.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub(crate) fn planet_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.iter_mut().find(|p| p.id == id)
    }

    /// Distance from the sun inside which released planets break up (meters).
    pub fn roche_limit(&self) -> f64 {
        self.roche_limit
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Every planet then every fragment, for drawing.
    pub fn bodies(&self) -> impl Iterator<Item = BodyView<'_>> {
        self.planets
            .iter()
            .map(BodyView::Planet)
            .chain(self.fragments.iter().map(BodyView::Fragment))
    }

    /// Advance the whole world by one timestep.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        self.advance_breakups(&mut report);
        self.integrate_planets(&mut report);
        self.integrate_fragments(&mut report);

        report
    }

    /// Shrink every breaking planet, shed its fragments and drop the ones that are gone.
    fn advance_breakups(&mut self, report: &mut StepReport) {
        let sun = self.planets[0].body.state.clone();
        let mut shed = Vec::new();

        for planet in self.planets.iter_mut().filter(|p| p.is_breaking()) {
            let state = planet.advance_breakup();
            let fragment_radius = planet.body.radius / 2.0;

            if fragment_radius > 0.0 {
                let orbit_speed = circular_orbit_speed(sun.mass, planet.distance_to_sun());
                let to_sun = bearing(planet.body.pos(), sun.pos);

                for _ in 0..FRAGMENTS_PER_STEP {
                    let angle = to_sun + self.rng.gen_range(-FRAGMENT_SPREAD..=FRAGMENT_SPREAD);
                    let speed = (0.3 + 0.3 * self.rng.gen_range(0.0..1.0)) * orbit_speed;
                    let vel = planet.body.vel() + unit_vector(angle) * speed;

                    match Fragment::new(planet.body.pos(), vel, fragment_radius, planet.body.color) {
                        Ok(fragment) => shed.push(fragment),
                        Err(err) => debug!("Skipped fragment of {:?}: {}", planet.id, err),
                    }
                }
            } else {
                debug!("{:?} too small to shed fragments on its final step", planet.id);
            }

            if state == BreakupState::Destroyed {
                report.destroyed.push(planet.id);
            }
        }

        self.planets.retain(|p| p.breakup() != BreakupState::Destroyed);
        report.spawned += shed.len();
        self.fragments.append(&mut shed);
    }

    /// Move every planet under the pull of all the others.
    ///
    /// Forces come from a snapshot taken before anything moves.
    fn integrate_planets(&mut self, report: &mut StepReport) {
        let sources: Vec<GravitySource> = self.planets.iter().map(Planet::as_source).collect();

        for planet in &mut self.planets {
            planet.update_position(&sources);
        }

        let sun = &mut self.planets[0];
        if !sun.body.state.is_finite() {
            warn!("Sun state became non-finite, restoring it at rest");
            let before = &sources[0].state;
            sun.body.state.vel = DVec2::ZERO;
            sun.body.teleport(before.pos);
        }

        let before = self.planets.len();
        self.planets.retain(|p| {
            let keep = p.body.state.is_finite();
            if !keep {
                warn!("Dropping {:?}: non-finite position or velocity", p.id);
            }
            keep
        });
        report.dropped += before - self.planets.len();
    }

    /// Move fragments under the sun's pull and remove expired or corrupted ones.
    fn integrate_fragments(&mut self, report: &mut StepReport) {
        let sun = self.planets[0].body.state.clone();

        for fragment in &mut self.fragments {
            fragment.update_position(&sun, &mut self.rng);
        }

        let mut dropped = 0;
        self.fragments.retain(|f| {
            if !f.body.state.is_finite() {
                dropped += 1;
                return false;
            }
            !f.is_dead()
        });
        report.dropped += dropped;
    }
}
