//! Simulation clock tracking steps taken and pause state.
//!
//! The world advances by a fixed [`TIMESTEP`] per rendered frame, so the
//! clock counts steps rather than integrating real elapsed time.

use bevy::prelude::*;

use crate::types::TIMESTEP;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Plugin providing the simulation clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>();
    }
}

/// Steps taken and pause flag for the running simulation.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SimulationClock {
    /// World steps completed since the last reset
    pub steps: u64,
    /// Whether stepping is suspended. Dragging still works while paused.
    pub paused: bool,
}

impl SimulationClock {
    /// Record one completed world step.
    pub fn advance(&mut self) {
        self.steps += 1;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to step zero, keeping the pause flag.
    pub fn reset(&mut self) {
        self.steps = 0;
    }

    /// Simulated seconds elapsed.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * TIMESTEP
    }

    /// Simulated days elapsed.
    pub fn days(&self) -> f64 {
        self.elapsed() / SECONDS_PER_DAY
    }
}
