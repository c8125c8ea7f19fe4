//! Auswahl der Render-Strategie (Fallback-Sprites vs. gecachte GPU-Geometrie).

use super::SliderStyle;

/// Render-Strategie für einen einzelnen Draw-Aufruf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Gestempelte Sprites pro Kurvenpunkt
    Fallback,
    /// Gecachte Kurven-Geometrie auf der GPU
    Advanced,
}

/// Wählt die Strategie für den aktuellen Draw-Aufruf.
///
/// Wird bei jedem Draw neu ausgewertet, da sich Option und Skin zwischen
/// zwei Frames ändern können. Nur `advanced_supported` steht nach `init` fest.
pub fn select_render_mode(
    force_fallback: bool,
    slider_style: SliderStyle,
    advanced_supported: bool,
) -> RenderMode {
    if force_fallback || slider_style == SliderStyle::Peppy || !advanced_supported {
        RenderMode::Fallback
    } else {
        RenderMode::Advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [SliderStyle; 3] = [SliderStyle::Peppy, SliderStyle::Mm, SliderStyle::Toon];

    #[test]
    fn test_force_fallback_wins_over_everything() {
        for style in STYLES {
            for supported in [false, true] {
                assert_eq!(
                    select_render_mode(true, style, supported),
                    RenderMode::Fallback
                );
            }
        }
    }

    #[test]
    fn test_missing_capability_always_falls_back() {
        for style in STYLES {
            assert_eq!(
                select_render_mode(false, style, false),
                RenderMode::Fallback
            );
        }
    }

    #[test]
    fn test_peppy_style_prefers_fallback() {
        assert_eq!(
            select_render_mode(false, SliderStyle::Peppy, true),
            RenderMode::Fallback
        );
        assert_eq!(
            select_render_mode(false, SliderStyle::Mm, true),
            RenderMode::Advanced
        );
        assert_eq!(
            select_render_mode(false, SliderStyle::Toon, true),
            RenderMode::Advanced
        );
    }
}
