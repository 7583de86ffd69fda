//! Fixed-step integration for planets and fragments.
//!
//! Uses semi-implicit (symplectic) Euler: velocity is advanced from the
//! accumulated force first, then position is advanced from the new velocity.

use bevy::math::DVec2;

use crate::types::BodyState;

/// Advance `state` by one step of `dt` seconds under a constant `force` (newtons).
///
/// ```text
/// v += (F / m)·dt
/// x += v·dt
/// ```
pub fn semi_implicit_euler(state: &mut BodyState, force: DVec2, dt: f64) {
    state.vel += force / state.mass * dt;
    state.pos += state.vel * dt;
}
