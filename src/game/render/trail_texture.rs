use bevy::{
    asset::RenderAssetUsages,
    image::ImageSampler,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

use crate::core::simulation::Simulation;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Resource)]
pub struct TrailTextureHandle(pub Handle<Image>);

/// Copies trail intensities into an RGBA8 buffer as opaque gray `(v, v, v, 255)`.
/// Stops at whichever of the two runs out first.
pub fn write_grayscale(trail: &[u8], pixels: &mut [u8]) {
    for (value, pixel) in trail.iter().zip(pixels.chunks_exact_mut(BYTES_PER_PIXEL)) {
        pixel.copy_from_slice(&[*value, *value, *value, u8::MAX]);
    }
}

pub fn setup_trail_texture(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    simulation: Res<Simulation>,
) {
    let trail = simulation.trail();
    let mut image = Image::new_fill(
        Extent3d {
            width: trail.width() as u32,
            height: trail.height() as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, u8::MAX],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    // One trail cell per texel, no smoothing
    image.sampler = ImageSampler::nearest();
    let handle = images.add(image);

    commands.spawn(Camera2d);
    commands.spawn((
        Sprite::from_image(handle.clone()),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.insert_resource(TrailTextureHandle(handle));
}

pub fn upload_trail_texture(
    simulation: Res<Simulation>,
    texture: Res<TrailTextureHandle>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(image) = images.get_mut(&texture.0) else {
        return;
    };
    if let Some(pixels) = image.data.as_deref_mut() {
        write_grayscale(simulation.trail().as_slice(), pixels);
    }
}
