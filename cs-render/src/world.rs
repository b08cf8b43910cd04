use std::path::PathBuf;

use bevy::prelude::*;

use crate::components::StageCamera;

#[derive(Resource, Debug, Clone)]
pub struct StageSettings {
    pub ground_size: f32,
    pub ground_color: Color,
    pub clear_color: Color,
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    pub point_light_color: Color,
    pub point_light_intensity: f32,
    pub point_light_range: f32,
    pub point_light_position: Vec3,
    pub camera_position: Vec3,
    pub camera_fov_degrees: f32,
    pub axes_length: f32,
    /// Directory the creeper textures are read from.
    pub texture_root: PathBuf,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            ground_size: 300.0,
            ground_color: Color::WHITE,
            clear_color: Color::srgb_u8(0xee, 0xee, 0xee),
            ambient_color: Color::srgb_u8(0x40, 0x40, 0x40),
            ambient_brightness: 400.0,
            point_light_color: Color::srgb_u8(0xf0, 0xf0, 0xf0),
            point_light_intensity: 4_000_000.0,
            point_light_range: 100.0,
            point_light_position: Vec3::new(-30.0, 30.0, 30.0),
            camera_position: Vec3::new(24.0, 18.0, 30.0),
            camera_fov_degrees: 75.0,
            axes_length: 20.0,
            texture_root: default_texture_root(),
        }
    }
}

pub fn default_texture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets/img")
}

pub fn setup_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StageSettings>,
) {
    let ground_mesh = Mesh::from(Plane3d::default());
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(ground_mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: settings.ground_color,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(settings.ground_size)),
    ));

    commands.spawn((
        Name::new("PointLight"),
        PointLight {
            color: settings.point_light_color,
            intensity: settings.point_light_intensity,
            range: settings.point_light_range,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(settings.point_light_position),
    ));

    commands.insert_resource(AmbientLight {
        color: settings.ambient_color,
        brightness: settings.ambient_brightness,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        Name::new("StageCamera"),
        Camera3d::default(),
        StageCamera,
        Projection::from(PerspectiveProjection {
            fov: settings.camera_fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(settings.camera_position)
            .looking_at(Vec3::new(0.0, 7.0, 0.0), Vec3::Y),
    ));
}

pub fn draw_axes(mut gizmos: Gizmos, settings: Res<StageSettings>) {
    gizmos.axes(Transform::IDENTITY, settings.axes_length);
}
