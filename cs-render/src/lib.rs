use bevy::prelude::*;
use cs_model::CreeperConfig;

mod components;
pub mod creeper;
mod input;
pub mod mesh;
pub mod textures;
mod world;

pub use components::{
    CreeperPart, CreeperRoot, ExplosionBurst, ExplosionParticle, StageAnchor, StageCamera,
};
pub use creeper::{ActiveCreeper, CreeperCommand, CreeperSettings, CreeperVisuals};
pub use world::{StageSettings, default_texture_root};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreeperSystems;

/// The creeper itself: spawning, commands, the per-frame tick and pose sync.
/// Needs only asset storage and a clock, so it runs headless.
pub struct CreeperPlugin {
    pub config: CreeperConfig,
}

impl Plugin for CreeperPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CreeperSettings(self.config.clone()))
            .init_resource::<creeper::ExplosionEntities>()
            .add_event::<CreeperCommand>()
            .add_systems(Startup, creeper::spawn_creeper)
            .add_systems(
                Update,
                (
                    creeper::handle_creeper_commands,
                    creeper::tick_creeper,
                    creeper::apply_creeper_pose,
                    creeper::sync_explosion_particles,
                )
                    .chain()
                    .in_set(CreeperSystems),
            );
    }
}

/// Ground, lights, camera, axes, textures and keyboard shortcuts.
pub struct StagePlugin {
    pub settings: StageSettings,
}

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(self.settings.clear_color))
            .insert_resource(self.settings.clone())
            .insert_resource(textures::SkinTextureCache::new(
                self.settings.texture_root.clone(),
            ))
            .add_systems(
                Startup,
                (world::setup_stage, textures::request_creeper_textures),
            )
            .add_systems(
                Update,
                (
                    input::creeper_hotkeys.before(CreeperSystems),
                    world::draw_axes,
                    textures::skin_texture_cache_tick,
                    textures::apply_creeper_textures.after(textures::skin_texture_cache_tick),
                ),
            );
    }
}
