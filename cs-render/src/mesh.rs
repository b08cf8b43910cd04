use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use cs_model::model::{CubeDef, CubeFace, ModelDef};

use crate::components::{CreeperPart, CreeperRoot};

#[derive(Debug, Clone)]
pub struct SpawnedModel {
    pub root: Entity,
    /// Bevy entities for each part, in the same order as `model.parts`.
    pub parts: Vec<Entity>,
}

/// Which material a mesh should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Body,
    Face,
}

#[derive(Debug, Clone)]
pub struct ModelMaterials {
    pub body: Handle<StandardMaterial>,
    pub face: Handle<StandardMaterial>,
}

impl ModelMaterials {
    fn get(&self, skin: Skin) -> Handle<StandardMaterial> {
        match skin {
            Skin::Body => self.body.clone(),
            Skin::Face => self.face.clone(),
        }
    }
}

/// Splits a cube into one mesh per material. The face side (if any) gets its
/// own mesh so it can carry a different texture.
pub fn cube_meshes(cube: &CubeDef) -> Vec<(Skin, Mesh)> {
    let body_faces: Vec<CubeFace> = CubeFace::ALL
        .into_iter()
        .filter(|f| Some(*f) != cube.face)
        .collect();

    let mut out = vec![(Skin::Body, box_mesh(cube.size, &body_faces))];
    if let Some(face) = cube.face {
        out.push((Skin::Face, box_mesh(cube.size, &[face])));
    }
    out
}

pub fn box_mesh(size: [f32; 3], faces: &[CubeFace]) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for face in faces {
        add_quad(
            &mut positions,
            &mut normals,
            &mut uvs,
            &mut indices,
            face_corners(size, *face),
            face.normal(),
        );
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn spawn_model(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &ModelMaterials,
    model: &'static ModelDef,
    parent: Entity,
) -> SpawnedModel {
    let root = commands
        .spawn((
            Name::new(format!("ModelRoot[{}]", model.name)),
            CreeperRoot,
            Transform::IDENTITY,
            Visibility::Hidden,
        ))
        .id();
    commands.entity(parent).add_child(root);

    let mut part_entities: Vec<Entity> = vec![Entity::PLACEHOLDER; model.parts.len()];

    // First spawn all part pivots.
    for (idx, part) in model.parts.iter().enumerate() {
        let e = commands
            .spawn((
                Name::new(format!("ModelPart[{}]", part.name)),
                CreeperPart(idx),
                Transform::from_translation(Vec3::from_array(part.offset)),
                Visibility::Inherited,
            ))
            .id();
        part_entities[idx] = e;
    }

    // Then attach to the appropriate parent and spawn meshes.
    for (idx, part) in model.parts.iter().enumerate() {
        let part_entity = part_entities[idx];
        let parent_entity = part
            .parent
            .and_then(|p| part_entities.get(p).copied())
            .unwrap_or(root);
        commands.entity(parent_entity).add_child(part_entity);

        for cube in part.cubes {
            for (skin, mesh) in cube_meshes(cube) {
                let mesh_entity = commands
                    .spawn((
                        Name::new(format!("ModelMesh[{}]", part.name)),
                        Mesh3d(meshes.add(mesh)),
                        MeshMaterial3d(materials.get(skin)),
                        Transform::IDENTITY,
                        Visibility::Inherited,
                    ))
                    .id();
                commands.entity(part_entity).add_child(mesh_entity);
            }
        }
    }

    SpawnedModel {
        root,
        parts: part_entities,
    }
}

/// Corners in bottom-left, bottom-right, top-right, top-left order as seen
/// from outside the box.
fn face_corners(size: [f32; 3], face: CubeFace) -> [[f32; 3]; 4] {
    let [hx, hy, hz] = size.map(|s| s / 2.0);
    match face {
        CubeFace::East => [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz]],
        CubeFace::West => [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]],
        CubeFace::Top => [[-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz], [-hx, hy, -hz]],
        CubeFace::Bottom => [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]],
        CubeFace::South => [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]],
        CubeFace::North => [[hx, -hy, -hz], [-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz]],
    }
}

fn add_quad(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    mut verts: [[f32; 3]; 4],
    normal: [f32; 3],
) {
    // Whole texture on every side, top-left UV origin.
    let mut uv = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    // Ensure both triangles are consistently front-facing.
    let a = Vec3::from_array(verts[0]);
    let b = Vec3::from_array(verts[1]);
    let c = Vec3::from_array(verts[2]);
    let actual = (b - a).cross(c - a);
    let expected = Vec3::from_array(normal);
    if actual.dot(expected) < 0.0 {
        verts = [verts[0], verts[3], verts[2], verts[1]];
        uv = [uv[0], uv[3], uv[2], uv[1]];
    }

    let base = positions.len() as u32;
    for i in 0..4 {
        positions.push(verts[i]);
        normals.push(normal);
        uvs.push(uv[i]);
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
