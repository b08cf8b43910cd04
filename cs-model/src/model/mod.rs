//! Box-built character models.
//!
//! Models are hardcoded as Rust static data (parts + cuboids) and turned into
//! a mutable [`Rig`] at spawn time. Textures are opaque paths handed to the
//! host; nothing in here touches the filesystem.

mod creeper;
mod types;

pub use creeper::*;
pub use types::*;

// Small DSL macros to keep the model tables readable.

#[macro_export]
macro_rules! cube {
    (
        size: ($w:expr, $h:expr, $d:expr),
        face: $face:expr $(,)?
    ) => {
        $crate::model::CubeDef {
            size: [$w as f32, $h as f32, $d as f32],
            face: $face,
        }
    };
}

#[macro_export]
macro_rules! part {
    (
        name: $name:expr,
        parent: $parent:expr,
        offset: ($x:expr, $y:expr, $z:expr),
        cubes: [ $($cube:expr),* $(,)? ] $(,)?
    ) => {
        $crate::model::PartDef {
            name: $name,
            parent: $parent,
            offset: [$x as f32, $y as f32, $z as f32],
            cubes: &[$($cube),*],
        }
    };
}
