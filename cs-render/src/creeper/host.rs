use bevy::prelude::*;
use cs_model::{Explosion, RootPose, SceneHost};
use tracing::warn;

use super::{CreeperVisuals, ExplosionEntities};
use crate::components::{ExplosionBurst, ExplosionParticle};

pub struct BevySceneHost<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub bursts: &'a mut ExplosionEntities,
    pub visuals: &'a CreeperVisuals,
}

impl SceneHost for BevySceneHost<'_, '_, '_> {
    fn attach_model(&mut self, root: &RootPose) {
        self.commands
            .entity(self.visuals.root)
            .insert((root.transform(), Visibility::Visible));
    }

    fn detach_model(&mut self) {
        self.commands
            .entity(self.visuals.root)
            .insert(Visibility::Hidden);
    }

    fn spawn_explosion(&mut self, slot: usize, explosion: &Explosion) {
        let [r, g, b] = explosion.spec().rgb();
        let material = self.materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            unlit: true,
            ..default()
        });

        let burst = self
            .commands
            .spawn((
                Name::new(format!("ExplosionBurst[{}]", slot)),
                ExplosionBurst { slot },
                Transform::IDENTITY,
                Visibility::Visible,
            ))
            .id();
        self.commands.entity(self.visuals.anchor).add_child(burst);

        let mesh = self.visuals.particle_mesh.clone();
        let scale = Vec3::splat(self.visuals.particle_size);
        self.commands.entity(burst).with_children(|parent| {
            for (index, particle) in explosion.particles().iter().enumerate() {
                parent.spawn((
                    ExplosionParticle { slot, index },
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(particle.position).with_scale(scale),
                ));
            }
        });

        if let Some(stale) = self.bursts.by_slot.insert(slot, burst) {
            warn!("explosion slot {} was still occupied, despawning old burst", slot);
            self.commands.entity(stale).despawn();
        }
    }

    fn destroy_explosion(&mut self, slot: usize) {
        if let Some(burst) = self.bursts.by_slot.remove(&slot) {
            self.commands.entity(burst).despawn();
        }
    }
}
