//! Bevy side of the creeper: entity spawning, the [`SceneHost`] the model
//! drives, and the per-frame systems.

mod host;
mod systems;

pub use host::BevySceneHost;
pub use systems::*;

use std::collections::HashMap;

use bevy::prelude::*;
use cs_model::{Creeper, CreeperConfig};

use crate::mesh::ModelMaterials;

#[derive(Resource, Debug, Clone, Default)]
pub struct CreeperSettings(pub CreeperConfig);

#[derive(Resource)]
pub struct ActiveCreeper(pub Creeper);

#[derive(Debug, Clone, Copy, Default)]
pub struct TexturedFlags {
    pub body: bool,
    pub face: bool,
}

/// Entities and assets backing the model in the scene.
#[derive(Resource, Debug, Clone)]
pub struct CreeperVisuals {
    pub anchor: Entity,
    pub root: Entity,
    /// Same order as the model's parts.
    pub parts: Vec<Entity>,
    pub materials: ModelMaterials,
    pub textured: TexturedFlags,
    pub particle_mesh: Handle<Mesh>,
    pub particle_size: f32,
}

/// Live explosion bursts, by slot.
#[derive(Resource, Debug, Default)]
pub struct ExplosionEntities {
    pub by_slot: HashMap<usize, Entity>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreeperCommand {
    ToggleAnimate,
    Trigger,
    Reset,
}
