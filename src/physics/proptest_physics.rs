//! Property-based tests for physics simulation using proptest.
//!
//! These tests check invariants of the force law, the integrator and the
//! bodies across a wide range of positions and masses.

use bevy::math::DVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{attraction, semi_implicit_euler};
use crate::bodies::{BodyColor, Fragment, Trail};
use crate::test_utils::{assertions, fixtures};
use crate::types::{AU, BodyState, SUN_MASS, TIMESTEP};

fn position() -> impl Strategy<Value = DVec2> {
    (-3.0f64..3.0, -3.0f64..3.0).prop_map(|(x, y)| DVec2::new(x * AU, y * AU))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The force `a` feels from `b` is exactly opposite to the force `b` feels from `a`.
    #[test]
    fn prop_newtons_third_law(
        pos_a in position(),
        pos_b in position(),
        mass_a in 1e20f64..1e31,
        mass_b in 1e20f64..1e31,
    ) {
        prop_assume!((pos_a - pos_b).length() > 1e3);

        let a = BodyState::new(pos_a, DVec2::ZERO, mass_a);
        let b = BodyState::new(pos_b, DVec2::ZERO, mass_b);

        let f_ab = attraction(&a, &b);
        let f_ba = attraction(&b, &a);
        let scale = f_ab.length();

        prop_assert!(((f_ab + f_ba).length() / scale) < 1e-9,
            "f_ab={:?} f_ba={:?}", f_ab, f_ba);
        // Attractive: points from a towards b
        prop_assert!(f_ab.dot(pos_b - pos_a) > 0.0);
    }

    /// Under a central force a semi-implicit Euler step keeps angular momentum.
    #[test]
    fn prop_step_keeps_angular_momentum(
        distance_au in 0.2f64..3.0,
        speed_factor in 0.8f64..1.2,
        angle in 0.0f64..std::f64::consts::TAU,
    ) {
        let (pos, vel) = fixtures::circular_orbit(distance_au);
        let rot = DVec2::from_angle(angle);
        let mut state = BodyState::new(rot.rotate(pos), rot.rotate(vel) * speed_factor, 1e24);
        let sun = BodyState::new(DVec2::ZERO, DVec2::ZERO, SUN_MASS);

        let initial = assertions::angular_momentum(state.pos, state.vel);
        for _ in 0..50 {
            let force = attraction(&state, &sun);
            semi_implicit_euler(&mut state, force, TIMESTEP);
        }
        let current = assertions::angular_momentum(state.pos, state.vel);

        assertions::assert_conserved("Angular momentum", initial, current, 1e-9);
    }

    /// A held planet does not move however strong the pull.
    #[test]
    fn prop_dragged_planet_is_frozen(
        x_au in 0.1f64..2.0,
        other in position(),
        other_mass in 1e20f64..1e31,
    ) {
        let mut planet = fixtures::planet_at(1, x_au, 10.0);
        planet.start_drag();
        let before = planet.clone();

        let mut source = fixtures::planet_at(2, 0.0, 10.0).as_source();
        source.state = BodyState::new(other, DVec2::ZERO, other_mass);
        planet.update_position(&[fixtures::sun().as_source(), source]);

        prop_assert_eq!(planet, before);
    }

    /// A trail never grows past its cap and always ends at the newest point.
    #[test]
    fn prop_trail_is_bounded_fifo(cap in 1usize..50, pushes in 0usize..200) {
        let mut trail = Trail::new(cap);
        for i in 0..pushes {
            trail.push(DVec2::new(i as f64, 0.0));
        }

        prop_assert_eq!(trail.len(), pushes.min(cap));
        if pushes > 0 {
            prop_assert_eq!(trail.latest(), Some(DVec2::new((pushes - 1) as f64, 0.0)));
            let oldest = trail.iter().next().map(|p| p.x as usize);
            prop_assert_eq!(oldest, Some(pushes.saturating_sub(cap)));
        }
    }

    /// Fragments only ever shrink and age.
    #[test]
    fn prop_fragment_decays_monotonically(
        radius in 0.1f64..10.0,
        distance_au in 0.2f64..2.0,
        seed in any::<u64>(),
    ) {
        let (pos, vel) = fixtures::circular_orbit(distance_au);
        let mut fragment = Fragment::new(pos, vel, radius, BodyColor::WHITE).unwrap();
        let sun = BodyState::new(DVec2::ZERO, DVec2::ZERO, SUN_MASS);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut last_radius = fragment.body.radius;
        let mut last_life = fragment.life();
        for _ in 0..20 {
            fragment.update_position(&sun, &mut rng);
            prop_assert!(fragment.body.radius < last_radius);
            prop_assert_eq!(fragment.life(), last_life - 1);
            last_radius = fragment.body.radius;
            last_life = fragment.life();
        }
    }
}
