use bevy::math::Vec3;
use rand::Rng;

pub const DEFAULT_PARTICLES_PER_EXPLOSION: usize = 120;
pub const DEFAULT_PARTICLE_SPEED: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionSpec {
    pub origin: Vec3,
    /// 0xRRGGBB
    pub color: u32,
}

impl ExplosionSpec {
    pub const fn rgb(&self) -> [u8; 3] {
        [
            ((self.color >> 16) & 0xff) as u8,
            ((self.color >> 8) & 0xff) as u8,
            (self.color & 0xff) as u8,
        ]
    }
}

/// Where each burst goes off when the model blows up, darkest first.
pub const EXPLOSION_LAYOUT: [ExplosionSpec; 5] = [
    ExplosionSpec {
        origin: Vec3::new(0.0, 0.0, 0.0),
        color: 0x000000,
    },
    ExplosionSpec {
        origin: Vec3::new(5.0, 5.0, 5.0),
        color: 0x333333,
    },
    ExplosionSpec {
        origin: Vec3::new(-5.0, 5.0, 10.0),
        color: 0x666666,
    },
    ExplosionSpec {
        origin: Vec3::new(-5.0, 5.0, 5.0),
        color: 0x999999,
    },
    ExplosionSpec {
        origin: Vec3::new(5.0, 5.0, -5.0),
        color: 0xcccccc,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Displacement applied on every update.
    pub velocity: Vec3,
}

/// A burst of particles flying away from a fixed origin.
#[derive(Debug, Clone)]
pub struct Explosion {
    spec: ExplosionSpec,
    particles: Vec<Particle>,
    age: u32,
}

impl Explosion {
    pub fn new(spec: ExplosionSpec, count: usize, speed: f32, rng: &mut impl Rng) -> Self {
        let half = speed / 2.0;
        let particles = (0..count)
            .map(|_| {
                let velocity = if half.is_finite() && half > 0.0 {
                    Vec3::new(
                        rng.gen_range(-half..=half),
                        rng.gen_range(-half..=half),
                        rng.gen_range(-half..=half),
                    )
                } else {
                    Vec3::ZERO
                };
                Particle {
                    position: spec.origin,
                    velocity,
                }
            })
            .collect();
        Self {
            spec,
            particles,
            age: 0,
        }
    }

    pub fn spec(&self) -> &ExplosionSpec {
        &self.spec
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of updates since the burst went off.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.position += particle.velocity;
        }
        self.age += 1;
    }
}
