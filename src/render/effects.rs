//! Breakup, debris and drag-guide visuals.
//!
//! The geometry helpers are pure so they can be checked without a renderer.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::bodies::{BodyColor, Planet};
use crate::camera::world_to_render;
use crate::types::FRAGMENT_LIFE;
use crate::world::SimulationWorld;

use super::RenderSettings;

/// Elongation of a breaking planet along the sun direction.
///
/// Oscillates between 0.5 and 1.5 as the breakup progresses.
pub fn breakup_stretch(break_timer: u32) -> f32 {
    1.0 + 0.5 * (break_timer as f32 / 5.0).sin()
}

/// Axis scale for a planet disc: `(along sun direction, across it)`.
///
/// Stable planets are round. The radius never goes negative.
pub fn planet_scale(planet: &Planet) -> Vec2 {
    let radius = planet.body.radius.max(0.0) as f32;
    if planet.is_breaking() {
        let stretch = breakup_stretch(planet.break_timer());
        Vec2::new(radius * stretch, radius / stretch)
    } else {
        Vec2::splat(radius)
    }
}

/// Fragment opacity, fading linearly to zero over its lifetime.
pub fn fragment_alpha(life: u32) -> f32 {
    (life as f32 / FRAGMENT_LIFE as f32).clamp(0.0, 1.0)
}

/// Unit vector along which a planet at `pos` would be launched on release.
pub fn launch_direction(sun_pos: DVec2, pos: DVec2) -> DVec2 {
    let theta = (pos - sun_pos).to_angle();
    DVec2::new(-theta.sin(), theta.cos())
}

/// Convert a body color to a Bevy color with the given opacity.
pub fn body_color(color: BodyColor, alpha: f32) -> Color {
    let [r, g, b] = color.0;
    Color::srgba(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        alpha,
    )
}

/// Draw every fragment as a fading disc outline.
pub fn draw_fragments(mut gizmos: Gizmos, world: Res<SimulationWorld>) {
    for fragment in world.fragments() {
        let color = body_color(fragment.body.color, fragment_alpha(fragment.life()));
        let radius = fragment.body.radius.max(0.0) as f32;
        gizmos.circle_2d(world_to_render(fragment.body.pos()), radius, color);
    }
}

/// Show where a held planet would be thrown.
pub fn draw_drag_guide(
    mut gizmos: Gizmos,
    world: Res<SimulationWorld>,
    settings: Res<RenderSettings>,
) {
    let sun_pos = world.sun().body.pos();

    for planet in world.planets().iter().filter(|p| p.is_dragging()) {
        let start = world_to_render(planet.body.pos());
        let direction = launch_direction(sun_pos, planet.body.pos()).as_vec2();
        let end = start + direction * settings.guide_length;
        gizmos.line_2d(start, end, Color::srgb(0.0, 1.0, 0.0));
    }
}
