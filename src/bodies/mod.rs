//! Bodies under gravity: the shared physical record plus the planet and
//! fragment variants built on top of it.

mod fragment;
mod planet;
mod trail;

use bevy::math::DVec2;
use rand::Rng;

use crate::types::BodyState;

pub use fragment::Fragment;
pub use planet::{BreakupState, GravitySource, Planet, PlanetId};
pub use trail::Trail;

/// Errors raised when constructing a body from bad parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("invalid {name}: {value} (must be finite and greater than zero)")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("non-finite {name}: ({x}, {y})")]
    NonFinite { name: &'static str, x: f64, y: f64 },
}

/// Check that a scalar body parameter is finite and strictly positive.
fn positive(name: &'static str, value: f64) -> Result<f64, BodyError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BodyError::InvalidParameter { name, value })
    }
}

fn finite(name: &'static str, value: DVec2) -> Result<DVec2, BodyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BodyError::NonFinite {
            name,
            x: value.x,
            y: value.y,
        })
    }
}

/// Opaque display color carried by a body. Only the renderer interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyColor(pub [u8; 3]);

impl BodyColor {
    pub const WHITE: Self = Self([255, 255, 255]);

    /// Uniformly random 24-bit color.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.r#gen())
    }
}

/// Fields and behavior shared by every body moving under gravity.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Position, velocity and mass.
    pub state: BodyState,
    /// Radius in render units (pixels at default zoom).
    pub radius: f64,
    pub color: BodyColor,
    trail: Trail,
}

impl Body {
    /// Create a body, validating mass and radius.
    ///
    /// The trail starts with the initial position.
    pub fn new(
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f64,
        color: BodyColor,
        trail_cap: usize,
    ) -> Result<Self, BodyError> {
        let pos = finite("position", pos)?;
        let vel = finite("velocity", vel)?;
        let mass = positive("mass", mass)?;
        let radius = positive("radius", radius)?;

        Ok(Self {
            state: BodyState::new(pos, vel, mass),
            radius,
            color,
            trail: Trail::starting_at(trail_cap, pos),
        })
    }

    pub fn pos(&self) -> DVec2 {
        self.state.pos
    }

    pub fn vel(&self) -> DVec2 {
        self.state.vel
    }

    pub fn mass(&self) -> f64 {
        self.state.mass
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Record the current position at the end of the trail.
    pub(crate) fn record_position(&mut self) {
        self.trail.push(self.state.pos);
    }

    /// Place the body at `pos` and forget its history.
    pub(crate) fn teleport(&mut self, pos: DVec2) {
        self.state.pos = pos;
        self.trail.reset(pos);
    }
}

/// Read-only view over any body in the world, for renderers.
#[derive(Clone, Copy, Debug)]
pub enum BodyView<'a> {
    Planet(&'a Planet),
    Fragment(&'a Fragment),
}

impl<'a> BodyView<'a> {
    /// Shared body fields regardless of variant.
    pub fn body(&self) -> &'a Body {
        match self {
            BodyView::Planet(planet) => &planet.body,
            BodyView::Fragment(fragment) => &fragment.body,
        }
    }
}
