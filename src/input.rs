//! Keyboard shortcuts and mouse dragging of planets.
//!
//! Space pauses, R regenerates the world, scroll zooms (see
//! [`crate::camera`]). Left mouse picks planets up and throws them.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{MainCamera, render_to_world, zoomed_scale};
use crate::interaction::InteractionController;
use crate::scenario::ResetWorld;
use crate::time::SimulationClock;
use crate::types::{AU, SimulationSet};
use crate::world::SimulationWorld;

/// Plugin providing keyboard input handling and mouse drag support.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                keyboard_shortcuts,
                handle_planet_drag.run_if(resource_exists::<SimulationWorld>),
            )
                .in_set(SimulationSet::Input),
        );
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
    mut resets: MessageWriter<ResetWorld>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // R: new random world
    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(ResetWorld);
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    // Plus/Equal: zoom in (reduce scale)
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        ortho.scale = zoomed_scale(ortho.scale, 1.0);
    }

    // Minus: zoom out (increase scale)
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        ortho.scale = zoomed_scale(ortho.scale, -1.0);
    }
}

/// Cursor position in physics coordinates (meters), if the cursor is over the window.
fn cursor_world_position(
    window_query: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<DVec2> {
    let window = window_query.single().ok()?;
    let (camera, camera_transform) = camera_query.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let render_pos = camera.viewport_to_world_2d(camera_transform, cursor_pos).ok()?;
    Some(render_to_world(render_pos))
}

/// Feed left-mouse press, motion and release to the [`InteractionController`].
fn handle_planet_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut controller: ResMut<InteractionController>,
    mut world: ResMut<SimulationWorld>,
    mut contexts: EguiContexts,
) {
    // A drag that is already running keeps going even over egui areas
    if controller.selected().is_none()
        && let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    if let Some(point) = cursor_world_position(&window_query, &camera_query) {
        if mouse.just_pressed(MouseButton::Left) {
            controller.on_press(&mut world, point);
        } else if mouse.pressed(MouseButton::Left) {
            controller.on_move(&mut world, point);
        }
    }

    // Release even when the cursor left the window
    if mouse.just_released(MouseButton::Left)
        && let Some(release) = controller.on_release(&mut world)
    {
        info!(
            "Released {:?} at {:.3} AU ({})",
            release.planet,
            release.distance_to_sun / AU,
            if release.inside_roche_limit {
                "inside Roche limit, breaking up"
            } else {
                "stable orbit"
            }
        );
    }
}
