//! Procedural creeper model, its animation channels and the
//! trigger / explosion / reset sequencer.
//!
//! Nothing in this crate renders. A host implements [`SceneHost`] and calls
//! [`Creeper::tick`] once per frame.

pub mod anim;
pub mod config;
pub mod creeper;
pub mod explosion;
pub mod host;
pub mod model;
pub mod sequencer;

pub use anim::{AnimationState, Channel, ChannelState};
pub use config::{ConfigError, CreeperConfig};
pub use creeper::Creeper;
pub use explosion::{EXPLOSION_LAYOUT, Explosion, ExplosionSpec, Particle};
pub use host::SceneHost;
pub use model::{BodyPart, CREEPER_MODEL, Rig, RootPose};
pub use sequencer::{Sequencer, SequencerState, TriggerOutcome};

#[cfg(test)]
mod tests;
