//! Planets: the sun and the orbiting bodies that can be dragged and broken up.

use bevy::math::DVec2;

use super::{Body, BodyColor, BodyError};
use crate::physics::{attraction, integrator::semi_implicit_euler};
use crate::types::{BREAKUP_SHRINK, BodyState, PLANET_TRAIL_CAP, SUN_MASS, SUN_RADIUS, TIMESTEP};

/// Stable identifier of a planet inside a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub u32);

/// Tidal breakup progress of a planet.
///
/// `Stable → Breaking → Destroyed`. Entering `Breaking` also means the
/// planet is inside the Roche limit; `Destroyed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreakupState {
    #[default]
    Stable,
    Breaking {
        /// Steps spent breaking so far.
        break_timer: u32,
    },
    Destroyed,
}

/// Snapshot of a planet used as a gravity source during a step.
#[derive(Clone, Debug, PartialEq)]
pub struct GravitySource {
    pub id: PlanetId,
    pub is_sun: bool,
    pub state: BodyState,
}

/// A planet, or the sun when `is_sun` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub body: Body,
    is_sun: bool,
    is_dragging: bool,
    breakup: BreakupState,
    distance_to_sun: f64,
}

impl Planet {
    /// A planet at rest at `pos`. Velocity is set separately.
    pub fn new(
        id: PlanetId,
        pos: DVec2,
        radius: f64,
        color: BodyColor,
        mass: f64,
    ) -> Result<Self, BodyError> {
        Ok(Self {
            id,
            body: Body::new(pos, DVec2::ZERO, mass, radius, color, PLANET_TRAIL_CAP)?,
            is_sun: false,
            is_dragging: false,
            breakup: BreakupState::Stable,
            distance_to_sun: 0.0,
        })
    }

    /// The sun at the origin with zero velocity.
    pub fn sun(id: PlanetId, color: BodyColor) -> Result<Self, BodyError> {
        let mut sun = Self::new(id, DVec2::ZERO, SUN_RADIUS, color, SUN_MASS)?;
        sun.is_sun = true;
        Ok(sun)
    }

    pub fn is_sun(&self) -> bool {
        self.is_sun
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn breakup(&self) -> BreakupState {
        self.breakup
    }

    pub fn is_breaking(&self) -> bool {
        matches!(self.breakup, BreakupState::Breaking { .. })
    }

    /// Set together with `is_breaking` when a planet is released inside the limit.
    pub fn in_roche_limit(&self) -> bool {
        !matches!(self.breakup, BreakupState::Stable)
    }

    pub fn break_timer(&self) -> u32 {
        match self.breakup {
            BreakupState::Breaking { break_timer } => break_timer,
            _ => 0,
        }
    }

    /// Last measured distance to the sun in meters, 0 if never measured.
    pub fn distance_to_sun(&self) -> f64 {
        self.distance_to_sun
    }

    pub fn as_source(&self) -> GravitySource {
        GravitySource {
            id: self.id,
            is_sun: self.is_sun,
            state: self.body.state.clone(),
        }
    }

    /// Force this planet feels from `other`, remembering the distance when `other` is the sun.
    pub fn attraction(&mut self, other: &GravitySource) -> DVec2 {
        if other.is_sun {
            self.distance_to_sun = (other.state.pos - self.body.pos()).length();
        }
        attraction(&self.body.state, &other.state)
    }

    /// Integrate one step under the pull of every other source.
    ///
    /// Does nothing while the planet is held by the pointer.
    pub fn update_position(&mut self, sources: &[GravitySource]) {
        if self.is_dragging {
            return;
        }

        let mut total = DVec2::ZERO;
        let id = self.id;
        for source in sources.iter().filter(|s| s.id != id) {
            total += self.attraction(source);
        }

        semi_implicit_euler(&mut self.body.state, total, TIMESTEP);
        self.body.record_position();
    }

    /// Record the current distance to the sun at `sun_pos`.
    pub(crate) fn measure_distance_to_sun(&mut self, sun_pos: DVec2) {
        self.distance_to_sun = (sun_pos - self.body.pos()).length();
    }

    /// Pick the planet up where it is: freeze it, zero its velocity and restart
    /// its trail. It only moves on the next [`Planet::drag_to`].
    pub(crate) fn start_drag(&mut self) {
        self.is_dragging = true;
        self.body.state.vel = DVec2::ZERO;
        let pos = self.body.pos();
        self.body.teleport(pos);
    }

    /// Move a held planet to `at`, keeping only the current point in its trail.
    pub(crate) fn drag_to(&mut self, at: DVec2, sun_pos: DVec2) {
        self.body.teleport(at);
        self.measure_distance_to_sun(sun_pos);
    }

    /// Let go of the planet with a fresh velocity.
    pub(crate) fn release(&mut self, vel: DVec2, distance_to_sun: f64) {
        self.is_dragging = false;
        self.body.state.vel = vel;
        self.distance_to_sun = distance_to_sun;
    }

    /// Enter the breakup sequence. The sun never breaks up.
    pub(crate) fn begin_breakup(&mut self) {
        if self.is_sun {
            return;
        }
        if let BreakupState::Stable = self.breakup {
            self.breakup = BreakupState::Breaking { break_timer: 0 };
        }
    }

    /// Return to a stable planet.
    pub(crate) fn clear_breakup(&mut self) {
        if let BreakupState::Breaking { .. } = self.breakup {
            self.breakup = BreakupState::Stable;
        }
    }

    /// Advance the breakup by one step: tick the timer and shrink.
    ///
    /// Moves to `Destroyed` once the radius reaches zero. Returns the new state.
    pub(crate) fn advance_breakup(&mut self) -> BreakupState {
        if let BreakupState::Breaking { break_timer } = self.breakup {
            self.body.radius -= BREAKUP_SHRINK;
            self.breakup = if self.body.radius <= 0.0 {
                BreakupState::Destroyed
            } else {
                BreakupState::Breaking {
                    break_timer: break_timer + 1,
                }
            };
        }
        self.breakup
    }
}
