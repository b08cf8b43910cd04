use bevy::prelude::*;

#[derive(Component)]
pub struct StageCamera;

/// Lifts the model so its feet rest on the ground plane. Everything the
/// creeper puts in the scene hangs off this entity.
#[derive(Component)]
pub struct StageAnchor;

#[derive(Component)]
pub struct CreeperRoot;

#[derive(Component, Debug, Clone, Copy)]
pub struct CreeperPart(pub usize);

#[derive(Component, Debug, Clone, Copy)]
pub struct ExplosionBurst {
    pub slot: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ExplosionParticle {
    pub slot: usize,
    pub index: usize,
}
