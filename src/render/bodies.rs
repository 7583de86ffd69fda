//! Planet disc rendering.
//!
//! Each planet in the [`SimulationWorld`] gets a circle mesh entity that
//! follows it around. Visuals are spawned for new planets and despawned
//! once their planet is gone.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::bodies::{BodyColor, PlanetId};
use crate::camera::world_to_render;
use crate::render::z_layers;
use crate::world::SimulationWorld;

use super::effects::{body_color, planet_scale};

/// Component linking a rendered disc to its planet.
#[derive(Component, Debug)]
pub struct PlanetVisual {
    pub id: PlanetId,
    /// Color the material was built with
    pub color: BodyColor,
}

/// Unit circle shared by every planet disc.
#[derive(Resource)]
pub struct DiscMesh(pub Handle<Mesh>);

pub(super) fn setup_disc_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(DiscMesh(meshes.add(Circle::new(1.0))));
}

/// Keep planet discs in step with the world.
///
/// Breaking planets are stretched along the line to the sun.
pub(super) fn sync_planet_visuals(
    mut commands: Commands,
    world: Res<SimulationWorld>,
    disc: Res<DiscMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut visuals: Query<(
        Entity,
        &mut PlanetVisual,
        &mut Transform,
        &mut MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let mut existing: HashMap<PlanetId, Entity> = HashMap::new();
    for (entity, visual, _, _) in visuals.iter() {
        if world.planet(visual.id).is_some() {
            existing.insert(visual.id, entity);
        } else {
            commands.entity(entity).despawn();
        }
    }

    let sun_pos = world.sun().body.pos();

    for planet in world.planets() {
        let translation = world_to_render(planet.body.pos()).extend(z_layers::PLANETS);
        let rotation = Quat::from_rotation_z((sun_pos - planet.body.pos()).to_angle() as f32);
        let transform = Transform {
            translation,
            rotation,
            scale: planet_scale(planet).extend(1.0),
        };

        let Some(entity) = existing.get(&planet.id).copied() else {
            commands.spawn((
                PlanetVisual {
                    id: planet.id,
                    color: planet.body.color,
                },
                Mesh2d(disc.0.clone()),
                MeshMaterial2d(materials.add(body_color(planet.body.color, 1.0))),
                transform,
            ));
            continue;
        };

        let Ok((_, mut visual, mut current, mut material)) = visuals.get_mut(entity) else {
            continue;
        };
        *current = transform;

        // Ids restart after a reset, so a visual may now stand for a new planet
        if visual.color != planet.body.color {
            visual.color = planet.body.color;
            *material = MeshMaterial2d(materials.add(body_color(planet.body.color, 1.0)));
        }
    }
}
