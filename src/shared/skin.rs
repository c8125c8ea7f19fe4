//! Slider-Stil des aktiven Skins (shared zwischen Optionen und Renderer).

use serde::{Deserialize, Serialize};

/// Vom Skin deklarierter Darstellungsstil für Slider-Körper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderStyle {
    /// Klassischer Stil aus gestempelten Hit-Circles (bevorzugt Fallback)
    Peppy,
    /// Geglätteter Körper aus Kurven-Geometrie
    #[default]
    Mm,
    /// Weiterer Geometrie-Stil des Skins; wird wie `Mm` gerendert
    Toon,
}
