//! Distance labels and the status overlay, drawn with egui.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::{MainCamera, world_to_render};
use crate::time::SimulationClock;
use crate::world::SimulationWorld;

use super::RenderSettings;

/// Distance to the sun as whole kilometers, e.g. `"74800000 km"`.
pub fn distance_label(distance_m: f64) -> String {
    format!("{} km", (distance_m / 1000.0).round() as i64)
}

/// One-line summary of the world for the overlay.
pub fn status_line(world: &SimulationWorld, clock: &SimulationClock) -> String {
    let planets = world.planets().len().saturating_sub(1);
    let mut line = format!(
        "Planets: {}  Fragments: {}  Day {:.0}",
        planets,
        world.fragments().len(),
        clock.days()
    );
    if clock.paused {
        line.push_str("  (paused)");
    }
    line
}

/// Write each planet's distance to the sun just above it.
pub(super) fn draw_distance_labels(
    mut contexts: EguiContexts,
    world: Res<SimulationWorld>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<RenderSettings>,
) -> Result {
    if !settings.show_labels {
        return Ok(());
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;
    egui::Area::new(egui::Id::new("distance_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(12.0);

            for planet in world.planets().iter().filter(|p| !p.is_sun()) {
                let render_pos = world_to_render(planet.body.pos()).extend(0.0);
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, render_pos) else {
                    continue;
                };

                painter.text(
                    egui::pos2(screen_pos.x, screen_pos.y - settings.label_offset),
                    egui::Align2::CENTER_BOTTOM,
                    distance_label(planet.distance_to_sun()),
                    font.clone(),
                    egui::Color32::WHITE,
                );
            }
        });

    Ok(())
}

/// Counts, elapsed days and key hints in the top-left corner.
pub(super) fn draw_status_overlay(
    mut contexts: EguiContexts,
    world: Res<SimulationWorld>,
    clock: Res<SimulationClock>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::Area::new(egui::Id::new("status_overlay"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(status_line(&world, &clock))
                    .color(egui::Color32::from_rgb(220, 220, 220)),
            );
            ui.label(
                egui::RichText::new("Drag a planet inside the dashed circle.  Space: pause  R: new system")
                    .small()
                    .color(egui::Color32::from_rgb(140, 140, 140)),
            );
        });

    Ok(())
}
