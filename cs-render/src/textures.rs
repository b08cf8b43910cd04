use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::thread;

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use crossbeam::channel::{Receiver, Sender, unbounded};
use tracing::{debug, warn};

use crate::creeper::{CreeperSettings, CreeperVisuals};

#[derive(Debug)]
struct TextureResult {
    path: String,
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

/// Decodes skin textures on a worker thread and hands them back as images.
#[derive(Resource)]
pub struct SkinTextureCache {
    request_tx: Sender<String>,
    result_rx: Receiver<TextureResult>,
    requested: HashSet<String>,
    loaded: HashMap<String, Handle<Image>>,
}

impl SkinTextureCache {
    pub fn new(root: PathBuf) -> Self {
        let (request_tx, request_rx) = unbounded::<String>();
        let (result_tx, result_rx) = unbounded::<TextureResult>();
        thread::spawn(move || texture_worker(root, request_rx, result_tx));
        Self {
            request_tx,
            result_rx,
            requested: HashSet::new(),
            loaded: HashMap::new(),
        }
    }

    pub fn request(&mut self, path: &str) {
        if self.requested.insert(path.to_string()) {
            let _ = self.request_tx.send(path.to_string());
        }
    }

    pub fn image(&self, path: &str) -> Option<Handle<Image>> {
        self.loaded.get(path).cloned()
    }
}

pub fn request_creeper_textures(
    mut cache: ResMut<SkinTextureCache>,
    settings: Res<CreeperSettings>,
) {
    cache.request(&settings.0.face_texture);
    cache.request(&settings.0.skin_texture);
}

pub fn skin_texture_cache_tick(
    mut cache: ResMut<SkinTextureCache>,
    mut images: ResMut<Assets<Image>>,
) {
    while let Ok(result) = cache.result_rx.try_recv() {
        let mut image = Image::new_fill(
            Extent3d {
                width: result.width,
                height: result.height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[0, 0, 0, 0],
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        image.data = Some(result.rgba);

        // Pixel-art skins: keep texels sharp.
        let mut sampler = ImageSamplerDescriptor::nearest();
        sampler.address_mode_u = ImageAddressMode::ClampToEdge;
        sampler.address_mode_v = ImageAddressMode::ClampToEdge;
        sampler.address_mode_w = ImageAddressMode::ClampToEdge;
        image.sampler = ImageSampler::Descriptor(sampler);

        debug!("loaded creeper texture {}", result.path);
        let handle = images.add(image);
        cache.loaded.insert(result.path, handle);
    }
}

/// Swaps the flat placeholder colour for the real texture once it is decoded.
pub fn apply_creeper_textures(
    cache: Res<SkinTextureCache>,
    settings: Res<CreeperSettings>,
    visuals: Option<ResMut<CreeperVisuals>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(mut visuals) = visuals else {
        return;
    };
    if visuals.textured.body && visuals.textured.face {
        return;
    }

    if !visuals.textured.body
        && let Some(image) = cache.image(&settings.0.skin_texture)
        && let Some(material) = materials.get_mut(&visuals.materials.body)
    {
        material.base_color = Color::WHITE.with_alpha(material.base_color.alpha());
        material.base_color_texture = Some(image);
        visuals.textured.body = true;
    }

    if !visuals.textured.face
        && let Some(image) = cache.image(&settings.0.face_texture)
        && let Some(material) = materials.get_mut(&visuals.materials.face)
    {
        material.base_color = Color::WHITE;
        material.base_color_texture = Some(image);
        visuals.textured.face = true;
    }
}

fn texture_worker(root: PathBuf, request_rx: Receiver<String>, result_tx: Sender<TextureResult>) {
    while let Ok(path) = request_rx.recv() {
        let full = root.join(&path);
        let Some(decoded) = std::fs::read(&full)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
        else {
            warn!("failed to load creeper texture: {:?}", full);
            continue;
        };
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let _ = result_tx.send(TextureResult {
            path,
            rgba: rgba.into_raw(),
            width,
            height,
        });
    }
}
