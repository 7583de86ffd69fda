//! Random world generation and reset.
//!
//! A fresh world is the sun plus four or five planets on circular orbits,
//! all placed outside the Roche limit.

use std::ops::{Range, RangeInclusive};

use bevy::prelude::*;
use rand::Rng;

use crate::bodies::{BodyColor, BodyError};
use crate::interaction::InteractionController;
use crate::physics::{circular_orbit_velocity, unit_vector};
use crate::time::SimulationClock;
use crate::types::{AU, ROCHE_LIMIT, SimulationSet};
use crate::world::SimulationWorld;

/// Parameters for [`SimulationWorld::generate`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    /// How many planets to place besides the sun
    pub planet_count: RangeInclusive<usize>,
    /// Planet mass (kg)
    pub mass: Range<f64>,
    /// Distance from the sun (meters)
    pub distance: Range<f64>,
    /// Planet radius (render units)
    pub radius: Range<f64>,
    /// Fixed seed, or `None` to draw one from entropy
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            planet_count: 4..=5,
            mass: 3e23..1.3e24,
            distance: (ROCHE_LIMIT + 0.05 * AU)..(1.8 * AU),
            radius: 8.0..20.0,
            seed: None,
        }
    }
}

impl GenerationSettings {
    /// Seed to use for the next world.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    fn validate(&self) -> Result<(), BodyError> {
        let ranges = [
            ("mass", &self.mass),
            ("distance", &self.distance),
            ("radius", &self.radius),
        ];
        for (name, range) in ranges {
            if range.is_empty() || !range.start.is_finite() || !range.end.is_finite() {
                return Err(BodyError::InvalidParameter {
                    name,
                    value: range.start,
                });
            }
        }
        if self.planet_count.is_empty() {
            return Err(BodyError::InvalidParameter {
                name: "planet_count",
                value: *self.planet_count.start() as f64,
            });
        }
        Ok(())
    }
}

impl SimulationWorld {
    /// Build a random world. The same settings and seed always give the same world.
    pub fn generate(settings: &GenerationSettings, seed: u64) -> Result<Self, BodyError> {
        settings.validate()?;

        let mut world = Self::new(seed)?;
        let sun_pos = world.sun().body.pos();
        let sun_mass = world.sun().body.mass();

        let count = world.rng_mut().gen_range(settings.planet_count.clone());
        for _ in 0..count {
            let rng = world.rng_mut();
            let distance = rng.gen_range(settings.distance.clone());
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let radius = rng.gen_range(settings.radius.clone());
            let mass = rng.gen_range(settings.mass.clone());
            let color = BodyColor::random(rng);

            let pos = sun_pos + unit_vector(angle) * distance;
            let vel = circular_orbit_velocity(sun_pos, sun_mass, pos);
            world.add_planet(pos, vel, radius, color, mass)?;
        }

        info!("Generated world with {} planets (seed {})", count, seed);
        Ok(world)
    }
}

/// Request to throw the current world away and generate a new one.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetWorld;

/// Plugin creating the world at startup and regenerating it on [`ResetWorld`].
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GenerationSettings>()
            .init_resource::<InteractionController>()
            .add_message::<ResetWorld>()
            .add_systems(Startup, spawn_world)
            .add_systems(Update, handle_reset.in_set(SimulationSet::Input));
    }
}

fn spawn_world(mut commands: Commands, settings: Res<GenerationSettings>) {
    match SimulationWorld::generate(&settings, settings.resolve_seed()) {
        Ok(world) => commands.insert_resource(world),
        Err(err) => error!("Could not generate world: {}", err),
    }
}

fn handle_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetWorld>,
    settings: Res<GenerationSettings>,
    mut controller: ResMut<InteractionController>,
    mut clock: ResMut<SimulationClock>,
) {
    // Several presses in one frame still mean one reset
    if resets.read().count() == 0 {
        return;
    }

    match SimulationWorld::generate(&settings, settings.resolve_seed()) {
        Ok(world) => {
            commands.insert_resource(world);
            controller.clear();
            clock.reset();
            info!("World reset");
        }
        Err(err) => error!("Could not regenerate world: {}", err),
    }
}
