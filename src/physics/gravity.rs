//! Newtonian gravity between pairs of bodies.
//!
//! Forces are resolved from the bearing between the two bodies, which lets
//! fragments rotate the sun's pull by a small random angle.

use bevy::math::DVec2;

use crate::types::{BodyState, G, MIN_DISTANCE};

/// Distance between two positions, clamped to [`MIN_DISTANCE`].
#[inline]
pub fn separation(from: DVec2, to: DVec2) -> f64 {
    (to - from).length().max(MIN_DISTANCE)
}

/// Angle of the vector pointing from `from` towards `to`, in radians.
#[inline]
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Unit vector at `angle` radians from the +x axis.
#[inline]
pub fn unit_vector(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Gravitational force `this` experiences from `other`.
///
/// `F = G·m₁·m₂ / d²`, directed from `this` towards `other`.
/// Coincident bodies are held [`MIN_DISTANCE`] apart.
///
/// # Returns
/// Force vector in newtons
#[inline]
pub fn attraction(this: &BodyState, other: &BodyState) -> DVec2 {
    deflected_attraction(this, other, 0.0)
}

/// Gravitational force from `other`, with its direction rotated by `deflection` radians.
///
/// Magnitude is unchanged by the deflection.
pub fn deflected_attraction(this: &BodyState, other: &BodyState, deflection: f64) -> DVec2 {
    let distance = separation(this.pos, other.pos);
    let force = G * this.mass * other.mass / (distance * distance);
    let theta = bearing(this.pos, other.pos) + deflection;

    unit_vector(theta) * force
}

/// Speed of a circular orbit at `distance` meters around a body of `central_mass` kg.
#[inline]
pub fn circular_orbit_speed(central_mass: f64, distance: f64) -> f64 {
    (G * central_mass / distance.max(MIN_DISTANCE)).sqrt()
}

/// Velocity of a counter-clockwise circular orbit for a body at `pos` around `center`.
///
/// The velocity is tangent to the radius: `(-v·sinθ, v·cosθ)` where θ is
/// the angle of `pos` seen from `center`.
pub fn circular_orbit_velocity(center: DVec2, central_mass: f64, pos: DVec2) -> DVec2 {
    let speed = circular_orbit_speed(central_mass, separation(center, pos));
    let angle = bearing(center, pos);

    DVec2::new(-speed * angle.sin(), speed * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AU, SUN_MASS};
    use approx::assert_relative_eq;

    fn sun() -> BodyState {
        BodyState::new(DVec2::ZERO, DVec2::ZERO, SUN_MASS)
    }

    #[test]
    fn test_attraction_points_towards_other() {
        let earth = BodyState::new(DVec2::new(AU, 0.0), DVec2::ZERO, 5.97e24);
        let force = attraction(&earth, &sun());

        assert!(force.x < 0.0, "Force should point towards the sun");
        assert_relative_eq!(force.y, 0.0, epsilon = 1e-3 * force.x.abs());

        let expected = G * 5.97e24 * SUN_MASS / (AU * AU);
        assert_relative_eq!(force.length(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_attraction_is_equal_and_opposite() {
        let a = BodyState::new(DVec2::new(0.3 * AU, -1.1 * AU), DVec2::ZERO, 4e23);
        let b = BodyState::new(DVec2::new(-0.7 * AU, 0.2 * AU), DVec2::ZERO, 9e23);

        let on_a = attraction(&a, &b);
        let on_b = attraction(&b, &a);

        assert_relative_eq!(on_a.x, -on_b.x, max_relative = 1e-9);
        assert_relative_eq!(on_a.y, -on_b.y, max_relative = 1e-9);
    }

    #[test]
    fn test_coincident_bodies_stay_finite() {
        let a = BodyState::new(DVec2::new(AU, AU), DVec2::ZERO, 1e24);
        let force = attraction(&a, &a.clone());

        assert!(force.is_finite(), "Clamped force should be finite");
    }

    #[test]
    fn test_deflection_rotates_without_scaling() {
        let p = BodyState::new(DVec2::new(AU, 0.0), DVec2::ZERO, 1e24);
        let straight = attraction(&p, &sun());
        let bent = deflected_attraction(&p, &sun(), std::f64::consts::PI / 12.0);

        assert_relative_eq!(bent.length(), straight.length(), max_relative = 1e-12);
        let angle = straight.angle_to(bent);
        assert_relative_eq!(angle.abs(), std::f64::consts::PI / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circular_velocity_is_tangent() {
        let pos = DVec2::new(0.0, AU);
        let vel = circular_orbit_velocity(DVec2::ZERO, SUN_MASS, pos);

        // At +y the counter-clockwise tangent points towards -x
        assert!(vel.x < 0.0);
        assert_relative_eq!(vel.dot(pos), 0.0, epsilon = 1e-3 * vel.length() * AU);

        // ~29.8 km/s at 1 AU
        assert_relative_eq!(vel.length(), 29_785.0, epsilon = 50.0);
    }
}
