//! Prozessweite Kurven-Konfiguration: einmalige Initialisierung vor dem ersten Draw.

use crate::shared::options::SLIDER_BODY_SCALE;
use crate::shared::{select_render_mode, CurveOptions, RenderMode, SliderStyle};
use eframe::wgpu;

/// Init-Record für das Kurven-Rendering.
///
/// Wird einmal vor dem ersten Draw erstellt und danach nur gelesen. Die
/// Fähigkeitsprüfung steht damit für die Laufzeit des Prozesses fest.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveEnvironment {
    circle_diameter: f32,
    border_color: [f32; 4],
    advanced_supported: bool,
}

impl CurveEnvironment {
    /// Erstellt den Record mit bereits bekannter Fähigkeit (z.B. headless).
    pub fn new(circle_diameter: f32, border_color: [f32; 4], advanced_supported: bool) -> Self {
        Self {
            circle_diameter,
            border_color,
            advanced_supported,
        }
    }

    /// Initialisiert die Kurven für einen Kreisdurchmesser und prüft die GPU.
    ///
    /// Fehlt die Fähigkeit für den erweiterten Pfad, wird das einmalig
    /// gemeldet (außer der Skin bevorzugt ohnehin den Fallback-Stil).
    pub fn init(
        circle_diameter: f32,
        border_color: [f32; 4],
        capabilities: &wgpu::DownlevelCapabilities,
        slider_style: SliderStyle,
    ) -> Self {
        let advanced_supported = advanced_rendering_supported(capabilities);
        if advanced_supported {
            log::info!(
                "Erweitertes Slider-Rendering verfügbar (Durchmesser {:.1})",
                circle_diameter
            );
        } else if slider_style != SliderStyle::Peppy {
            log::warn!(
                "Neuer Slider-Stil benötigt Shader-Model 4 ({:?} gefunden), verwende Fallback",
                capabilities.shader_model
            );
        }
        Self::new(circle_diameter, border_color, advanced_supported)
    }

    /// Kreisdurchmesser in Display-Einheiten.
    pub fn circle_diameter(&self) -> f32 {
        self.circle_diameter
    }

    /// Radius des Slider-Körpers im erweiterten Pfad.
    pub fn curve_radius(&self) -> f32 {
        self.circle_diameter * SLIDER_BODY_SCALE * 0.5
    }

    /// Randfarbe der Slider.
    pub fn border_color(&self) -> [f32; 4] {
        self.border_color
    }

    /// Ob der erweiterte Pfad auf dieser GPU nutzbar ist.
    pub fn advanced_supported(&self) -> bool {
        self.advanced_supported
    }
}

/// Prüft, ob die GPU den erweiterten Pfad unterstützt (Shader-Model ≥ 4).
pub fn advanced_rendering_supported(capabilities: &wgpu::DownlevelCapabilities) -> bool {
    !matches!(capabilities.shader_model, wgpu::ShaderModel::Sm2)
}

/// Gemeinsamer, nur lesender Kontext für alle Kurven-Draws eines Frames.
#[derive(Debug, Clone, Copy)]
pub struct CurveRenderContext<'a> {
    /// Init-Record
    pub environment: &'a CurveEnvironment,
    /// Aktuelle Optionen (können sich zwischen Frames ändern)
    pub options: &'a CurveOptions,
}

impl CurveRenderContext<'_> {
    /// Strategie für den aktuellen Draw-Aufruf.
    pub fn render_mode(&self) -> RenderMode {
        select_render_mode(
            self.options.force_fallback_sliders,
            self.options.slider_style,
            self.environment.advanced_supported(),
        )
    }
}
