//! Core physics types and constants for the Roche-limit simulation.

use bevy::math::DVec2;
use bevy::prelude::*;

/// System sets ordering one frame of the simulation.
///
/// Pointer input must be applied before the world step and the renderer
/// must only ever see a fully stepped world.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Drag/release handling and keyboard shortcuts.
    Input,
    /// One `SimulationWorld::step()`.
    Step,
    /// Gizmo and label drawing.
    Render,
}

// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// Simulated seconds advanced per world step (6 hours).
pub const TIMESTEP: f64 = 3600.0 * 6.0;

/// Distance from the sun inside which a released planet starts breaking up.
pub const ROCHE_LIMIT: f64 = 0.5 * AU;

/// Sun mass in kilograms
pub const SUN_MASS: f64 = 1.98892e30;

/// Sun radius in render units
pub const SUN_RADIUS: f64 = 30.0;

/// Smallest distance used by the force law. Closer bodies are treated as this far apart.
pub const MIN_DISTANCE: f64 = 1.0;

/// Maximum number of points kept in a planet's orbit trail.
pub const PLANET_TRAIL_CAP: usize = 3000;

/// Maximum number of points kept in a fragment's trail.
pub const FRAGMENT_TRAIL_CAP: usize = 500;

/// Radius lost by a breaking planet every step.
pub const BREAKUP_SHRINK: f64 = 0.2;

/// Fragments emitted by a breaking planet every step.
pub const FRAGMENTS_PER_STEP: usize = 5;

/// Steps a fragment lives for.
pub const FRAGMENT_LIFE: u32 = 200;

/// Kilograms of fragment mass per unit of fragment radius.
pub const FRAGMENT_MASS_PER_RADIUS: f64 = 1e22;

/// Geometric radius decay applied to fragments every step.
pub const FRAGMENT_RADIUS_DECAY: f64 = 0.995;

/// Half-width of the random deflection applied to fragment kicks and forces (radians).
pub const FRAGMENT_SPREAD: f64 = std::f64::consts::PI / 12.0;

/// Physical state shared by everything that moves under gravity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Position in meters, sun-centred frame at start
    pub pos: DVec2,
    /// Velocity in meters per second
    pub vel: DVec2,
    /// Mass in kilograms
    pub mass: f64,
}

impl BodyState {
    /// Create a new body state
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Whether position and velocity are both finite.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}
