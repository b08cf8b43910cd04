use bevy::math::{EulerRot, Quat, Vec3};
use bevy::transform::components::Transform;

/// One side of an axis-aligned box, named after the axis it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// +X
    East,
    /// -X
    West,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z, the side the model looks out of.
    South,
    /// -Z
    North,
}

impl CubeFace {
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::West,
        Self::Top,
        Self::Bottom,
        Self::South,
        Self::North,
    ];

    pub const fn normal(self) -> [f32; 3] {
        match self {
            Self::East => [1.0, 0.0, 0.0],
            Self::West => [-1.0, 0.0, 0.0],
            Self::Top => [0.0, 1.0, 0.0],
            Self::Bottom => [0.0, -1.0, 0.0],
            Self::South => [0.0, 0.0, 1.0],
            Self::North => [0.0, 0.0, -1.0],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CubeDef {
    /// Dimensions (w, h, d) in model units. The box is centred on its part.
    pub size: [f32; 3],
    /// Side that shows the face texture instead of the skin.
    pub face: Option<CubeFace>,
}

#[derive(Debug, Clone, Copy)]
pub struct PartDef {
    pub name: &'static str,
    /// Index of the parent part, if any.
    pub parent: Option<usize>,
    /// Rest-pose offset from the parent (or the model root).
    pub offset: [f32; 3],
    /// Empty for pure grouping nodes.
    pub cubes: &'static [CubeDef],
}

#[derive(Debug, Clone, Copy)]
pub struct ModelDef {
    pub name: &'static str,
    pub parts: &'static [PartDef],
}

impl ModelDef {
    pub fn part_index(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }
}

/// A rigid part of a built rig. The offset never changes after build; rotation
/// and scale are what the animation writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    pub name: &'static str,
    pub parent: Option<usize>,
    pub offset: Vec3,
    /// Euler angles (XYZ order) in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl BodyPart {
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.offset,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: self.scale,
        }
    }

    fn rest(&mut self) {
        self.rotation = Vec3::ZERO;
        self.scale = Vec3::ONE;
    }
}

/// Placement of the whole model in its scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootPose {
    pub translation: Vec3,
    pub scale: f32,
}

impl Default for RootPose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl RootPose {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_scale(Vec3::splat(self.scale))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rig {
    pub root: RootPose,
    /// Same order as `ModelDef::parts`.
    pub parts: Vec<BodyPart>,
}

impl Rig {
    pub fn build(model: &ModelDef) -> Self {
        let parts = model
            .parts
            .iter()
            .map(|def| BodyPart {
                name: def.name,
                parent: def.parent,
                offset: Vec3::from_array(def.offset),
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
            })
            .collect();
        Self {
            root: RootPose::default(),
            parts,
        }
    }

    pub fn part(&self, idx: usize) -> &BodyPart {
        &self.parts[idx]
    }

    pub fn part_mut(&mut self, idx: usize) -> &mut BodyPart {
        &mut self.parts[idx]
    }

    /// Back to the as-built pose at the scene origin.
    pub fn rest(&mut self) {
        self.root = RootPose::default();
        for part in &mut self.parts {
            part.rest();
        }
    }
}
