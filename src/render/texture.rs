//! Texture-Utilities für wgpu.

use eframe::wgpu;
use image::RgbaImage;

/// Hochgeladene Sprite-Texture mit View und Sampler.
pub struct SpriteTexture {
    /// Texture-View für die Bind-Group
    pub view: wgpu::TextureView,
    /// Sampler (linear, Clamp)
    pub sampler: wgpu::Sampler,
}

/// Erstellt eine wgpu-Texture aus einem RGBA-Bild
///
/// # Parameter
/// - `device`: wgpu-Device für Texture-Erstellung
/// - `queue`: wgpu-Queue für Daten-Upload
/// - `image`: Bilddaten (RGBA8, sRGB)
/// - `label`: Debug-Label für die Texture
pub fn create_sprite_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &RgbaImage,
    label: &str,
) -> SpriteTexture {
    let (width, height) = image.dimensions();

    log::debug!(
        "Erstelle Sprite-Texture '{}': {}x{} Pixel, {} Bytes",
        label,
        width,
        height,
        image.len()
    );

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    // Sprites werden nur leicht skaliert, ein Mip-Level reicht
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        image,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(&format!("{}_sampler", label)),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    SpriteTexture { view, sampler }
}
