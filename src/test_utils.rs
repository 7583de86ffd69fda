//! Test utilities for the simulation.
//!
//! Provides fixtures for building planets on known orbits and
//! assertions for the invariants the world should keep.

use bevy::math::DVec2;

use crate::bodies::{BodyColor, Planet, PlanetId};
use crate::types::{AU, G, SUN_MASS};

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;

    /// Position and velocity of a circular orbit around a sun at the origin.
    ///
    /// The body is placed on the positive x-axis moving in +y.
    pub fn circular_orbit(distance_au: f64) -> (DVec2, DVec2) {
        let r = distance_au * AU;
        let v = (G * SUN_MASS / r).sqrt();
        (DVec2::new(r, 0.0), DVec2::new(0.0, v))
    }

    /// The sun with id 0.
    pub fn sun() -> Planet {
        Planet::sun(PlanetId(0), BodyColor::WHITE).unwrap()
    }

    /// A planet at rest at `(x_au, 0)` with the given radius.
    pub fn planet_at(id: u32, x_au: f64, radius: f64) -> Planet {
        Planet::new(
            PlanetId(id),
            DVec2::new(x_au * AU, 0.0),
            radius,
            BodyColor::WHITE,
            5.97e24,
        )
        .unwrap()
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Specific angular momentum about the origin (2D scalar).
    pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
        pos.perp_dot(vel)
    }

    /// Assert that two values agree to a relative tolerance.
    ///
    /// # Panics
    /// Panics if the relative drift exceeds `tolerance`.
    pub fn assert_conserved(what: &str, initial: f64, current: f64, tolerance: f64) {
        let drift = if initial.abs() > 1e-10 {
            ((current - initial) / initial).abs()
        } else {
            (current - initial).abs()
        };
        assert!(
            drift <= tolerance,
            "{what} not conserved: initial={initial:.6e}, current={current:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_speed_at_one_au() {
        let (_, vel) = fixtures::circular_orbit(1.0);
        // Earth's mean orbital speed, about 29.8 km/s
        assert_relative_eq!(vel.length(), 29_780.0, max_relative = 0.01);
    }

    #[test]
    fn test_angular_momentum_of_circular_orbit() {
        let (pos, vel) = fixtures::circular_orbit(1.0);
        assert_relative_eq!(assertions::angular_momentum(pos, vel), AU * vel.y);
    }
}
