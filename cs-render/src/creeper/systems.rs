use bevy::prelude::*;
use cs_model::Creeper;
use cs_model::model::{CREEPER_MODEL, creeper_ground_clearance};
use tracing::info;

use super::{
    ActiveCreeper, BevySceneHost, CreeperCommand, CreeperSettings, CreeperVisuals,
    ExplosionEntities,
};
use crate::components::{CreeperPart, CreeperRoot, ExplosionParticle, StageAnchor};
use crate::mesh::{ModelMaterials, spawn_model};

const CREEPER_GREEN: Color = Color::srgb(0.36, 0.7, 0.3);

fn skin_material() -> StandardMaterial {
    StandardMaterial {
        base_color: CREEPER_GREEN.with_alpha(0.9),
        perceptual_roughness: 0.3,
        metallic: 0.8,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

fn face_material() -> StandardMaterial {
    StandardMaterial {
        base_color: CREEPER_GREEN,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    }
}

pub fn spawn_creeper(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut bursts: ResMut<ExplosionEntities>,
    settings: Res<CreeperSettings>,
) {
    let config = &settings.0;
    let anchor = commands
        .spawn((
            Name::new("StageAnchor"),
            StageAnchor,
            Transform::from_xyz(0.0, creeper_ground_clearance(), 0.0),
            Visibility::Visible,
        ))
        .id();

    let model_materials = ModelMaterials {
        body: materials.add(skin_material()),
        face: materials.add(face_material()),
    };
    let spawned = spawn_model(
        &mut commands,
        &mut meshes,
        &model_materials,
        &CREEPER_MODEL,
        anchor,
    );

    let visuals = CreeperVisuals {
        anchor,
        root: spawned.root,
        parts: spawned.parts,
        materials: model_materials,
        textured: default(),
        particle_mesh: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        particle_size: config.particle_size,
    };

    let creeper = {
        let mut host = BevySceneHost {
            commands: &mut commands,
            materials: &mut *materials,
            bursts: &mut *bursts,
            visuals: &visuals,
        };
        if config.self_register {
            Creeper::spawn(config, &mut host)
        } else {
            Creeper::new(config)
        }
    };
    info!(
        "spawned creeper ({} parts, attached: {})",
        visuals.parts.len(),
        creeper.is_attached()
    );

    commands.insert_resource(visuals);
    commands.insert_resource(ActiveCreeper(creeper));
}

pub fn handle_creeper_commands(
    mut events: EventReader<CreeperCommand>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut bursts: ResMut<ExplosionEntities>,
    visuals: Option<Res<CreeperVisuals>>,
    creeper: Option<ResMut<ActiveCreeper>>,
) {
    let (Some(visuals), Some(mut creeper)) = (visuals, creeper) else {
        events.clear();
        return;
    };

    for command in events.read() {
        match command {
            CreeperCommand::ToggleAnimate => creeper.0.toggle_animate(),
            CreeperCommand::Trigger => {
                creeper.0.trigger();
            }
            CreeperCommand::Reset => {
                let mut host = BevySceneHost {
                    commands: &mut commands,
                    materials: &mut *materials,
                    bursts: &mut *bursts,
                    visuals: &*visuals,
                };
                creeper.0.reset(&mut host);
            }
        }
    }
}

pub fn tick_creeper(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut bursts: ResMut<ExplosionEntities>,
    visuals: Option<Res<CreeperVisuals>>,
    creeper: Option<ResMut<ActiveCreeper>>,
) {
    let (Some(visuals), Some(mut creeper)) = (visuals, creeper) else {
        return;
    };
    let mut host = BevySceneHost {
        commands: &mut commands,
        materials: &mut *materials,
        bursts: &mut *bursts,
        visuals: &*visuals,
    };
    creeper.0.tick(time.delta(), &mut host);
}

pub fn apply_creeper_pose(
    creeper: Option<Res<ActiveCreeper>>,
    visuals: Option<Res<CreeperVisuals>>,
    mut transforms: Query<&mut Transform, Or<(With<CreeperPart>, With<CreeperRoot>)>>,
) {
    let (Some(creeper), Some(visuals)) = (creeper, visuals) else {
        return;
    };
    let rig = creeper.0.rig();

    if creeper.0.is_attached()
        && let Ok(mut transform) = transforms.get_mut(visuals.root)
    {
        transform.set_if_neq(rig.root.transform());
    }
    for (idx, entity) in visuals.parts.iter().enumerate() {
        if let Ok(mut transform) = transforms.get_mut(*entity) {
            transform.set_if_neq(rig.part(idx).transform());
        }
    }
}

pub fn sync_explosion_particles(
    creeper: Option<Res<ActiveCreeper>>,
    mut particles: Query<(&ExplosionParticle, &mut Transform)>,
) {
    let Some(creeper) = creeper else {
        return;
    };
    if !creeper.0.is_exploded() {
        return;
    }
    let explosions = creeper.0.explosions();
    for (particle, mut transform) in &mut particles {
        let Some(p) = explosions
            .get(particle.slot)
            .and_then(|e| e.particles().get(particle.index))
        else {
            continue;
        };
        transform.translation = p.position;
    }
}
