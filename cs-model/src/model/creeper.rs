use super::{CubeFace, ModelDef};
use crate::{cube, part};

pub const HEAD: usize = 0;
pub const BODY: usize = 1;
pub const FEET: usize = 2;
pub const FOOT_FRONT_LEFT: usize = 3;
pub const FOOT_BACK_LEFT: usize = 4;
pub const FOOT_FRONT_RIGHT: usize = 5;
pub const FOOT_BACK_RIGHT: usize = 6;

/// Feet that swing with `+sin(phase)`.
pub const GAIT_PAIR_A: [usize; 2] = [FOOT_FRONT_LEFT, FOOT_BACK_RIGHT];
/// Feet that swing with `-sin(phase)`.
pub const GAIT_PAIR_B: [usize; 2] = [FOOT_BACK_LEFT, FOOT_FRONT_RIGHT];

pub static CREEPER_MODEL: ModelDef = ModelDef {
    name: "creeper",
    parts: &[
        part! {
            name: "head",
            parent: None,
            offset: (0.0, 6.0, 0.0),
            cubes: [
                cube! { size: (4.0, 4.0, 4.0), face: Some(CubeFace::South) },
            ],
        },
        part! {
            name: "body",
            parent: None,
            offset: (0.0, 0.0, 0.0),
            cubes: [
                cube! { size: (4.0, 8.0, 2.0), face: None },
            ],
        },
        part! {
            name: "feet",
            parent: None,
            offset: (0.0, 0.0, 0.0),
            cubes: [],
        },
        part! {
            name: "foot_front_left",
            parent: Some(FEET),
            offset: (-1.0, -5.5, 2.0),
            cubes: [
                cube! { size: (2.0, 3.0, 2.0), face: None },
            ],
        },
        part! {
            name: "foot_back_left",
            parent: Some(FEET),
            offset: (-1.0, -5.5, -2.0),
            cubes: [
                cube! { size: (2.0, 3.0, 2.0), face: None },
            ],
        },
        part! {
            name: "foot_front_right",
            parent: Some(FEET),
            offset: (1.0, -5.5, 2.0),
            cubes: [
                cube! { size: (2.0, 3.0, 2.0), face: None },
            ],
        },
        part! {
            name: "foot_back_right",
            parent: Some(FEET),
            offset: (1.0, -5.5, -2.0),
            cubes: [
                cube! { size: (2.0, 3.0, 2.0), face: None },
            ],
        },
    ],
};

/// Distance from the model origin down to the soles of its feet.
pub fn creeper_ground_clearance() -> f32 {
    let foot = &CREEPER_MODEL.parts[FOOT_FRONT_LEFT];
    -(foot.offset[1] - foot.cubes[0].size[1] / 2.0)
}
