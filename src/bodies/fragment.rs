//! Fragments: short-lived debris shed by a breaking planet.

use bevy::math::DVec2;
use rand::Rng;

use super::{Body, BodyColor, BodyError};
use crate::physics::{deflected_attraction, integrator::semi_implicit_euler};
use crate::types::{
    BodyState, FRAGMENT_LIFE, FRAGMENT_MASS_PER_RADIUS, FRAGMENT_RADIUS_DECAY, FRAGMENT_SPREAD,
    FRAGMENT_TRAIL_CAP, TIMESTEP,
};

/// A debris particle attracted only by the sun.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub body: Body,
    life: u32,
}

impl Fragment {
    /// Spawn a fragment. Mass follows from radius.
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: BodyColor) -> Result<Self, BodyError> {
        let mass = radius * FRAGMENT_MASS_PER_RADIUS;
        Ok(Self {
            body: Body::new(pos, vel, mass, radius, color, FRAGMENT_TRAIL_CAP)?,
            life: FRAGMENT_LIFE,
        })
    }

    /// Steps left before the fragment expires.
    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0 || self.body.radius <= 0.0
    }

    /// Integrate one step under the sun's pull, then decay.
    ///
    /// The pull is rotated by a uniform random angle in
    /// `[-FRAGMENT_SPREAD, FRAGMENT_SPREAD]`, which spreads debris into a ring.
    pub fn update_position(&mut self, sun: &BodyState, rng: &mut impl Rng) {
        let deflection = rng.gen_range(-FRAGMENT_SPREAD..=FRAGMENT_SPREAD);
        let force = deflected_attraction(&self.body.state, sun, deflection);

        semi_implicit_euler(&mut self.body.state, force, TIMESTEP);
        self.body.record_position();

        self.body.radius *= FRAGMENT_RADIUS_DECAY;
        self.life = self.life.saturating_sub(1);
    }
}
