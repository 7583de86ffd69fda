//! Roche - Tidal Breakup Sandbox
//!
//! A desktop toy: a sun with a handful of planets on circular orbits.
//! Drag a planet inside the Roche limit and watch tides tear it apart.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use roche::camera::CameraPlugin;
use roche::input::InputPlugin;
use roche::physics::PhysicsPlugin;
use roche::render::RenderPlugin;
use roche::scenario::ScenarioPlugin;
use roche::time::TimePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Roche".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Simulation plugins
        .add_plugins((
            TimePlugin,
            PhysicsPlugin,
            ScenarioPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
        ))
        .run();
}
