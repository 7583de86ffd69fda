//! Trail and Roche-limit rendering using Bevy Gizmos.

use bevy::prelude::*;

use crate::bodies::BodyView;
use crate::camera::{RENDER_SCALE, world_to_render};
use crate::world::SimulationWorld;

use super::RenderSettings;
use super::effects::body_color;

/// Endpoints of the dashes making up a dashed circle around `center`.
///
/// `dash` and `gap` are arc lengths in render units. The pattern restarts
/// at angle zero, so the last gap may be shorter than `gap`.
pub fn dashed_circle(center: Vec2, radius: f32, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    if radius <= 0.0 || dash <= 0.0 || gap < 0.0 {
        return Vec::new();
    }

    let circumference = std::f32::consts::TAU * radius;
    let count = (circumference / (dash + gap)).floor() as usize;
    let point = |arc: f32| center + Vec2::from_angle(arc / radius) * radius;

    (0..count)
        .map(|i| {
            let start = i as f32 * (dash + gap);
            (point(start), point(start + dash))
        })
        .collect()
}

/// Draw the dashed circle marking the Roche limit around the sun.
pub fn draw_roche_limit(
    mut gizmos: Gizmos,
    world: Res<SimulationWorld>,
    settings: Res<RenderSettings>,
) {
    let center = world_to_render(world.sun().body.pos());
    let radius = (world.roche_limit() * RENDER_SCALE) as f32;

    for (start, end) in dashed_circle(center, radius, settings.dash_length, settings.dash_gap) {
        gizmos.line_2d(start, end, Color::WHITE);
    }
}

/// Draw every body's trail as a polyline. Fragment trails are nearly transparent.
pub fn draw_trails(
    mut gizmos: Gizmos,
    world: Res<SimulationWorld>,
    settings: Res<RenderSettings>,
) {
    if !settings.show_trails {
        return;
    }

    for view in world.bodies() {
        let body = view.body();
        if !body.trail().is_drawable() {
            continue;
        }

        let alpha = match view {
            BodyView::Planet(_) => settings.planet_trail_alpha,
            BodyView::Fragment(_) => settings.fragment_trail_alpha,
        };
        gizmos.linestrip_2d(
            body.trail().iter().map(world_to_render),
            body_color(body.color, alpha),
        );
    }
}
