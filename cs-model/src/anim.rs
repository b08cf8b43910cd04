//! Animation channels and the pose updater.
//!
//! Each channel owns an unbounded phase that only moves while the channel is
//! active. Phases are fed straight into `sin`, so they never need wrapping.

use crate::model::{GAIT_PAIR_A, GAIT_PAIR_B, HEAD, Rig};

pub const DEFAULT_PHASE_STEP: f32 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Walk,
    HeadSwing,
    BodyScale,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Walk, Self::HeadSwing, Self::BodyScale];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Walk => "walking",
            Self::HeadSwing => "head swing",
            Self::BodyScale => "body scale",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelState {
    pub active: bool,
    pub phase: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    walk: ChannelState,
    head_swing: ChannelState,
    body_scale: ChannelState,
}

impl AnimationState {
    pub fn channel(&self, channel: Channel) -> &ChannelState {
        match channel {
            Channel::Walk => &self.walk,
            Channel::HeadSwing => &self.head_swing,
            Channel::BodyScale => &self.body_scale,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::Walk => &mut self.walk,
            Channel::HeadSwing => &mut self.head_swing,
            Channel::BodyScale => &mut self.body_scale,
        }
    }

    pub fn is_active(&self, channel: Channel) -> bool {
        self.channel(channel).active
    }

    pub fn phase(&self, channel: Channel) -> f32 {
        self.channel(channel).phase
    }

    pub fn any_active(&self) -> bool {
        Channel::ALL.iter().any(|c| self.is_active(*c))
    }

    /// Flips every channel at once. Phases are kept.
    pub fn toggle_all(&mut self) {
        for channel in Channel::ALL {
            let state = self.channel_mut(channel);
            state.active = !state.active;
        }
    }

    /// All channels idle, all phases zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advances every active channel by `step` and writes its pose into `rig`.
    /// Idle channels leave their part of the pose untouched.
    pub fn advance(&mut self, step: f32, rig: &mut Rig) {
        for channel in Channel::ALL {
            let state = self.channel_mut(channel);
            if !state.active {
                continue;
            }
            state.phase += step;
            apply_channel(channel, state.phase, rig);
        }
    }
}

pub fn foot_pitch(phase: f32) -> f32 {
    phase.sin() / 4.0
}

pub fn head_yaw(phase: f32) -> f32 {
    phase.sin()
}

/// Uniform model scale, always within `[1.0, 1.0625]`.
pub fn body_scale(phase: f32) -> f32 {
    phase.sin().abs() / 16.0 + 1.0
}

pub fn apply_channel(channel: Channel, phase: f32, rig: &mut Rig) {
    match channel {
        Channel::Walk => {
            let pitch = foot_pitch(phase);
            for idx in GAIT_PAIR_A {
                rig.part_mut(idx).rotation.x = pitch;
            }
            for idx in GAIT_PAIR_B {
                rig.part_mut(idx).rotation.x = -pitch;
            }
        }
        Channel::HeadSwing => {
            rig.part_mut(HEAD).rotation.y = head_yaw(phase);
        }
        Channel::BodyScale => {
            rig.root.scale = body_scale(phase);
        }
    }
}
