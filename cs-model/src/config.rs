use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anim::DEFAULT_PHASE_STEP;
use crate::explosion::{DEFAULT_PARTICLE_SPEED, DEFAULT_PARTICLES_PER_EXPLOSION};
use crate::sequencer::{DEFAULT_EXPLOSION_DELAY, DEFAULT_TRIGGER_THRESHOLD};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for {field}: {value}")]
    Invalid { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreeperConfig {
    /// Phase advance per tick for every active channel, in radians.
    pub phase_step: f32,
    /// Triggers needed to light the fuse.
    pub trigger_threshold: u32,
    /// Fuse length once the threshold is reached.
    pub explosion_delay_ms: u64,
    /// Particles in each of the five bursts.
    pub particles_per_explosion: usize,
    /// Width of the per-update velocity range of a particle, per axis.
    pub particle_speed: f32,
    /// Edge length of a rendered particle cube.
    pub particle_size: f32,
    /// Seed for particle directions.
    pub seed: u64,
    /// Attach the model to the scene as soon as it is created.
    pub self_register: bool,
    /// Texture file names, relative to the texture root.
    pub face_texture: String,
    pub skin_texture: String,
}

impl Default for CreeperConfig {
    fn default() -> Self {
        Self {
            phase_step: DEFAULT_PHASE_STEP,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            explosion_delay_ms: DEFAULT_EXPLOSION_DELAY.as_millis() as u64,
            particles_per_explosion: DEFAULT_PARTICLES_PER_EXPLOSION,
            particle_speed: DEFAULT_PARTICLE_SPEED,
            particle_size: 0.5,
            seed: 0x00c0_ffee,
            self_register: true,
            face_texture: "creeper_face.png".to_string(),
            skin_texture: "creeper_skin.png".to_string(),
        }
    }
}

impl CreeperConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects float settings that are negative, infinite or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("phase_step", self.phase_step),
            ("particle_speed", self.particle_speed),
            ("particle_size", self.particle_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn explosion_delay(&self) -> Duration {
        Duration::from_millis(self.explosion_delay_ms)
    }
}
