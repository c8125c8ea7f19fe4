//! Zentrale Konfiguration für das Kurven-Rendering.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::skin::SliderStyle;
use serde::{Deserialize, Serialize};

// ── Spielfeld ───────────────────────────────────────────────────────

/// Breite des Spielfelds in Roh-Koordinaten.
pub const PLAYFIELD_WIDTH: f32 = 512.0;
/// Höhe des Spielfelds in Roh-Koordinaten.
pub const PLAYFIELD_HEIGHT: f32 = 384.0;

// ── Kurven-Abtastung ────────────────────────────────────────────────

/// Ziel-Abstand zwischen zwei abgetasteten Kurvenpunkten (Display-Einheiten).
pub const CURVE_POINTS_SEPARATION: f32 = 2.5;

// ── Fallback-Rendering ──────────────────────────────────────────────

/// Tönung der Overlay-Sprites im Fallback-Pfad (RGBA: Weiß).
pub const FALLBACK_OVERLAY_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Körperfarbe im Fallback-Pfad (RGB 20/20/20). Alpha wird pro Draw ersetzt.
pub const FALLBACK_BODY_COLOR: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0];

// ── Erweitertes Rendering ───────────────────────────────────────────

/// Standard-Randfarbe der Slider (RGBA: Weiß).
pub const SLIDER_BORDER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Standard-Kreisdurchmesser in Display-Einheiten.
pub const CIRCLE_DIAMETER: f32 = 64.0;
/// Anteil des Slider-Körpers am Hit-Circle-Sprite (118 von 128 Pixeln).
pub const SLIDER_BODY_SCALE: f32 = 118.0 / 128.0;
/// Anteil des Randes am Radius des Slider-Körpers.
pub const SLIDER_BORDER_FRACTION: f32 = 0.15;
/// Segmente pro Kegel (Dreiecksfächer) eines Kurvenpunkts.
pub const CONE_SEGMENTS: usize = 30;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kurven-Optionen.
/// Wird als `playfield_curves.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveOptions {
    /// Erzwingt das Sprite-Fallback-Rendering, auch wenn die GPU mehr kann
    #[serde(default)]
    pub force_fallback_sliders: bool,
    /// Slider-Stil des aktiven Skins
    #[serde(default)]
    pub slider_style: SliderStyle,
    /// Randfarbe der Slider (RGBA)
    pub slider_border_color: [f32; 4],
    /// Kreisdurchmesser in Display-Einheiten
    pub circle_diameter: f32,
    /// Skin-Ordner mit `hitcircle.png` und `hitcircleoverlay.png`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_directory: Option<std::path::PathBuf>,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            force_fallback_sliders: false,
            slider_style: SliderStyle::default(),
            slider_border_color: SLIDER_BORDER_COLOR,
            circle_diameter: CIRCLE_DIAMETER,
            skin_directory: None,
        }
    }
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("playfield_curves"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("playfield_curves.toml")
    }
}
