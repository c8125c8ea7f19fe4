//! Sprite-Bilder des Fallback-Pfads: Hit-Circle und Overlay.
//!
//! Ohne Skin werden beide Bilder prozedural erzeugt. Ein Skin-Ordner mit
//! `hitcircle.png` und `hitcircleoverlay.png` ersetzt sie.

use super::target::SpriteKind;
use anyhow::Context;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Kantenlänge der erzeugten Sprites in Pixeln.
pub const SPRITE_RESOLUTION: u32 = 128;

/// Innerer Radius des Overlay-Rings (Anteil am Außenradius).
const OVERLAY_INNER_RADIUS: f32 = 0.86;

/// RGBA-Bilder für beide Sprites.
#[derive(Debug, Clone)]
pub struct SpriteImages {
    /// Körper (wird mit der Körperfarbe getönt)
    pub hit_circle: RgbaImage,
    /// Overlay (neutral getönt)
    pub hit_circle_overlay: RgbaImage,
}

impl SpriteImages {
    /// Erzeugt beide Sprites prozedural.
    pub fn generate(resolution: u32) -> Self {
        let resolution = resolution.max(2);
        Self {
            hit_circle: render_disc(resolution, |r| {
                // leicht abgedunkelter Rand, damit gestempelte Kreise Tiefe bekommen
                let shade = 1.0 - 0.25 * r * r;
                Some(shade)
            }),
            hit_circle_overlay: render_disc(resolution, |r| {
                (r >= OVERLAY_INNER_RADIUS).then_some(1.0)
            }),
        }
    }

    /// Lädt die Sprites aus einem Skin-Ordner.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        let load = |name: &str| -> anyhow::Result<RgbaImage> {
            let path = dir.join(name);
            let image = image::open(&path)
                .with_context(|| format!("Sprite nicht lesbar: {}", path.display()))?;
            Ok(image.to_rgba8())
        };
        let images = Self {
            hit_circle: load("hitcircle.png")?,
            hit_circle_overlay: load("hitcircleoverlay.png")?,
        };
        log::info!("Skin-Sprites geladen aus: {}", dir.display());
        Ok(images)
    }

    /// Skin-Sprites, falls vorhanden und lesbar, sonst die erzeugten.
    pub fn load_or_generate(dir: Option<&Path>) -> Self {
        match dir.map(Self::load_from_dir) {
            Some(Ok(images)) => images,
            Some(Err(e)) => {
                log::warn!("Skin-Sprites nicht verfügbar, verwende Standard: {:#}", e);
                Self::generate(SPRITE_RESOLUTION)
            }
            None => Self::generate(SPRITE_RESOLUTION),
        }
    }

    /// Bild eines Sprites.
    pub fn get(&self, kind: SpriteKind) -> &RgbaImage {
        match kind {
            SpriteKind::HitCircle => &self.hit_circle,
            SpriteKind::HitCircleOverlay => &self.hit_circle_overlay,
        }
    }
}

impl Default for SpriteImages {
    fn default() -> Self {
        Self::generate(SPRITE_RESOLUTION)
    }
}

/// Rendert eine Kreisscheibe; `shade(r)` liefert die Helligkeit für den
/// normierten Radius `r` oder `None` für transparent.
fn render_disc(resolution: u32, shade: impl Fn(f32) -> Option<f32>) -> RgbaImage {
    let half = resolution as f32 * 0.5;
    // Kantenglättung über einen Pixel
    let pixel = 1.0 / half;

    RgbaImage::from_fn(resolution, resolution, |x, y| {
        let dx = (x as f32 + 0.5 - half) / half;
        let dy = (y as f32 + 0.5 - half) / half;
        let r = (dx * dx + dy * dy).sqrt();
        let coverage = ((1.0 - r) / pixel).clamp(0.0, 1.0);

        match shade(r.min(1.0)) {
            Some(value) if coverage > 0.0 => {
                let v = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
                Rgba([v, v, v, (coverage * 255.0).round() as u8])
            }
            _ => Rgba([0, 0, 0, 0]),
        }
    })
}
