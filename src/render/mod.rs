//! Rendering systems for the Roche limit simulator.
//!
//! Planet discs are mesh entities; trails, debris, the Roche circle and the
//! drag guide are immediate-mode gizmos; text goes through egui.

pub mod bodies;
pub mod effects;
mod labels;
pub mod orbits;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::SimulationSet;
use crate::world::SimulationWorld;

use self::bodies::{setup_disc_mesh, sync_planet_visuals};
use self::effects::{draw_drag_guide, draw_fragments};
use self::labels::{draw_distance_labels, draw_status_overlay};
use self::orbits::{draw_roche_limit, draw_trails};

pub use self::bodies::PlanetVisual;
pub use self::labels::{distance_label, status_line};

/// Settings for world rendering.
#[derive(Resource, Clone, Debug)]
pub struct RenderSettings {
    /// Whether body trails are drawn.
    pub show_trails: bool,
    /// Whether distance labels are drawn.
    pub show_labels: bool,
    pub planet_trail_alpha: f32,
    pub fragment_trail_alpha: f32,
    /// Roche circle dash length (render units).
    pub dash_length: f32,
    /// Roche circle gap length (render units).
    pub dash_gap: f32,
    /// Length of the launch guide shown while dragging (render units).
    pub guide_length: f32,
    /// Label distance above the planet centre (screen pixels).
    pub label_offset: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_trails: true,
            show_labels: true,
            planet_trail_alpha: 1.0,
            fragment_trail_alpha: 0.03,
            dash_length: 5.0,
            dash_gap: 5.0,
            guide_length: 100.0,
            label_offset: 10.0,
        }
    }
}

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSettings>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_disc_mesh)
            .add_systems(
                Update,
                (
                    draw_roche_limit,
                    draw_trails,
                    draw_fragments,
                    sync_planet_visuals,
                    draw_drag_guide,
                )
                    .in_set(SimulationSet::Render)
                    .run_if(resource_exists::<SimulationWorld>),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (draw_distance_labels, draw_status_overlay)
                    .run_if(resource_exists::<SimulationWorld>),
            );
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Planet discs, above gizmo lines.
    pub const PLANETS: f32 = 1.0;
}
