use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::anim::{AnimationState, Channel};
use crate::config::CreeperConfig;
use crate::explosion::{EXPLOSION_LAYOUT, Explosion};
use crate::host::SceneHost;
use crate::model::{CREEPER_MODEL, Rig};
use crate::sequencer::{Sequencer, SequencerState, TriggerOutcome};

#[derive(Debug, Clone, Copy, PartialEq)]
struct BurstParams {
    particles: usize,
    speed: f32,
}

/// The creeper: a rig, its animation channels, and the trigger sequencer.
///
/// All scene side effects go through the [`SceneHost`] passed into each call.
#[derive(Debug, Clone)]
pub struct Creeper {
    rig: Rig,
    animation: AnimationState,
    sequencer: Sequencer,
    explosions: Vec<Explosion>,
    attached: bool,
    phase_step: f32,
    burst: BurstParams,
    rng: StdRng,
}

impl Creeper {
    /// Builds the model without putting it in any scene.
    pub fn new(config: &CreeperConfig) -> Self {
        Self {
            rig: Rig::build(&CREEPER_MODEL),
            animation: AnimationState::default(),
            sequencer: Sequencer::new(config.trigger_threshold, config.explosion_delay()),
            explosions: Vec::new(),
            attached: false,
            phase_step: config.phase_step,
            burst: BurstParams {
                particles: config.particles_per_explosion,
                speed: config.particle_speed,
            },
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Builds the model and attaches it to `host` straight away.
    pub fn spawn(config: &CreeperConfig, host: &mut impl SceneHost) -> Self {
        let mut creeper = Self::new(config);
        creeper.attach(host);
        creeper
    }

    pub fn attach(&mut self, host: &mut impl SceneHost) {
        if self.attached {
            return;
        }
        host.attach_model(&self.rig.root);
        self.attached = true;
        info!("creeper attached at {:?}", self.rig.root.translation);
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_exploded(&self) -> bool {
        self.sequencer.is_exploded()
    }

    pub fn trigger_count(&self) -> u32 {
        self.sequencer.trigger_count()
    }

    pub fn toggle_animate(&mut self) {
        self.animation.toggle_all();
        debug!(
            walking = self.animation.is_active(Channel::Walk),
            head_swing = self.animation.is_active(Channel::HeadSwing),
            body_scale = self.animation.is_active(Channel::BodyScale),
            "toggled creeper animation"
        );
    }

    pub fn trigger(&mut self) -> TriggerOutcome {
        let outcome = self.sequencer.trigger();
        match outcome {
            TriggerOutcome::Counted(n) => {
                debug!("creeper trigger {}/{}", n, self.sequencer.threshold())
            }
            TriggerOutcome::Armed => {
                info!("creeper fuse lit, exploding in {:?}", self.sequencer.delay())
            }
            TriggerOutcome::AlreadyArmed(n) => {
                debug!("creeper trigger {} while fuse is burning", n)
            }
            TriggerOutcome::Ignored => debug!("creeper trigger ignored, already exploded"),
        }
        outcome
    }

    /// One frame: animate active channels, move explosion particles, burn
    /// the fuse by `delta` and detonate if it ran out.
    pub fn tick(&mut self, delta: Duration, host: &mut impl SceneHost) {
        self.animation.advance(self.phase_step, &mut self.rig);

        if self.is_exploded() {
            for explosion in &mut self.explosions {
                explosion.update();
            }
        }

        if self.sequencer.tick(delta) {
            self.explosion(host);
        }
    }

    /// Blows the model up. Returns `false` if it already had.
    pub fn explosion(&mut self, host: &mut impl SceneHost) -> bool {
        if self.is_exploded() {
            warn!("creeper explosion requested while already exploded");
            return false;
        }

        self.animation.clear();
        self.sequencer.mark_exploded();

        if self.attached {
            host.detach_model();
            self.attached = false;
        }

        self.explosions = EXPLOSION_LAYOUT
            .iter()
            .map(|spec| {
                Explosion::new(*spec, self.burst.particles, self.burst.speed, &mut self.rng)
            })
            .collect();
        for (slot, explosion) in self.explosions.iter().enumerate() {
            host.spawn_explosion(slot, explosion);
        }

        info!("creeper exploded into {} bursts", self.explosions.len());
        true
    }

    /// Puts out a burning fuse, or clears an explosion and puts the model
    /// back at the origin in its rest pose. Otherwise does nothing.
    pub fn reset(&mut self, host: &mut impl SceneHost) -> bool {
        match self.sequencer.state() {
            SequencerState::Pending { .. } => {
                self.sequencer.cancel();
                info!("creeper fuse put out");
                true
            }
            SequencerState::Exploded => {
                for (slot, _) in self.explosions.drain(..).enumerate() {
                    host.destroy_explosion(slot);
                }
                self.sequencer.rearm();
                self.animation.clear();
                self.rig.rest();
                self.attach(host);
                info!("creeper reset");
                true
            }
            SequencerState::Rest | SequencerState::Triggered(_) => false,
        }
    }
}
