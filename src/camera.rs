//! 2D camera and the world/render coordinate mapping.
//!
//! The renderer and the pointer input share [`RENDER_SCALE`], so a planet
//! drawn under the cursor is also the one picked by it.

use bevy::{
    input::mouse::AccumulatedMouseScroll,
    math::DVec2,
    prelude::*,
};

use crate::types::AU;

/// Render units per meter: 1 AU spans 250 render units (pixels at zoom 1).
pub const RENDER_SCALE: f64 = 250.0 / AU;

/// Minimum zoom level (closest zoom).
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level (furthest zoom).
pub const MAX_ZOOM: f32 = 10.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, camera_zoom);
    }
}

/// Convert a physics position (meters) to render coordinates.
#[inline]
pub fn world_to_render(pos: DVec2) -> Vec2 {
    (pos * RENDER_SCALE).as_vec2()
}

/// Convert render coordinates back to a physics position (meters).
#[inline]
pub fn render_to_world(pos: Vec2) -> DVec2 {
    pos.as_dvec2() / RENDER_SCALE
}

/// Orthographic scale after a zoom step of `steps` (positive zooms in), clamped
/// to [`MIN_ZOOM`, `MAX_ZOOM`].
pub fn zoomed_scale(scale: f32, steps: f32) -> f32 {
    (scale * (1.0 - steps * ZOOM_SPEED)).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Spawn the main camera centred on the sun.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    // Logarithmic zoom: multiply scale by factor based on scroll direction
    ortho.scale = zoomed_scale(ortho.scale, mouse_scroll.delta.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_au_is_250_render_units() {
        let render = world_to_render(DVec2::new(AU, -AU));
        assert_relative_eq!(render.x, 250.0, epsilon = 1e-3);
        assert_relative_eq!(render.y, -250.0, epsilon = 1e-3);
    }

    #[test]
    fn test_render_round_trip() {
        let pos = DVec2::new(0.3 * AU, 1.2 * AU);
        let back = render_to_world(world_to_render(pos));
        assert_relative_eq!(back.x / AU, 0.3, epsilon = 1e-6);
        assert_relative_eq!(back.y / AU, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_steps_scale_and_clamp() {
        assert_relative_eq!(zoomed_scale(1.0, 1.0), 0.9);
        assert_relative_eq!(zoomed_scale(1.0, -1.0), 1.1);
        assert_eq!(zoomed_scale(MIN_ZOOM, 1.0), MIN_ZOOM);
        assert_eq!(zoomed_scale(MAX_ZOOM, -1.0), MAX_ZOOM);
    }
}
