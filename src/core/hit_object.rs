//! Hit-Object-Deskriptor mit Kontrollpunkten in Roh- und Display-Koordinaten.

use crate::shared::options::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use glam::Vec2;

/// Kurven-Familie eines Sliders (Buchstabe aus der Beatmap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    /// `L`: Gerade Segmente zwischen allen Kontrollpunkten
    Linear,
    /// `B`: Bezier-Segmente, getrennt an doppelten Punkten
    #[default]
    Bezier,
    /// `P`: Kreisbogen durch genau drei Punkte
    PerfectCircle,
    /// `C`: Catmull-Rom-Spline durch alle Punkte
    Catmull,
}

impl CurveType {
    /// Bildet den Buchstaben aus der Beatmap ab. Unbekannte Buchstaben → Bezier.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'L' => Self::Linear,
            'P' => Self::PerfectCircle,
            'C' => Self::Catmull,
            _ => Self::Bezier,
        }
    }
}

/// Umrechnung von Roh-Spielfeld-Koordinaten (512×384) in Display-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayfieldScale {
    /// Multiplikator für x
    pub x_multiplier: f32,
    /// Multiplikator für y
    pub y_multiplier: f32,
    /// Verschiebung in x (zentriert das Spielfeld)
    pub x_offset: f32,
    /// Verschiebung in y
    pub y_offset: f32,
}

impl PlayfieldScale {
    /// Identität: Display- und Roh-Koordinaten stimmen überein.
    pub const IDENTITY: Self = Self {
        x_multiplier: 1.0,
        y_multiplier: 1.0,
        x_offset: 0.0,
        y_offset: 0.0,
    };

    /// Berechnet die Skalierung für einen Viewport.
    ///
    /// Das Spielfeld wird in ein 4:3-Rechteck eingepasst und zentriert.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let (mut fit_width, mut fit_height) = (width, height);
        if fit_width * 3.0 > fit_height * 4.0 {
            fit_width = fit_height * 4.0 / 3.0;
        } else {
            fit_height = fit_width * 3.0 / 4.0;
        }

        let x_multiplier = fit_width / 640.0;
        let y_multiplier = fit_height / 480.0;
        Self {
            x_multiplier,
            y_multiplier,
            x_offset: ((width - PLAYFIELD_WIDTH * x_multiplier) / 2.0).trunc(),
            y_offset: ((height - PLAYFIELD_HEIGHT * y_multiplier) / 2.0).trunc(),
        }
    }

    /// Wendet die Skalierung auf einen Punkt an.
    pub fn apply(&self, raw: Vec2) -> Vec2 {
        Vec2::new(
            raw.x * self.x_multiplier + self.x_offset,
            raw.y * self.y_multiplier + self.y_offset,
        )
    }

    /// Mittlerer Längenfaktor (für Pixel-Längen in Display-Einheiten).
    pub fn length_factor(&self) -> f32 {
        (self.x_multiplier + self.y_multiplier) * 0.5
    }
}

/// Quelle einer Kurve: Startpunkt, Zwischenpunkte und Slider-Länge.
///
/// Die skalierten Koordinaten werden einmalig bei der Konstruktion berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct HitObject {
    /// Eindeutige ID innerhalb der Beatmap
    pub id: u64,
    /// Kurven-Familie
    pub curve_type: CurveType,
    /// Slider-Länge in Roh-Einheiten (0 = unbegrenzt)
    pub pixel_length: f32,
    start: Vec2,
    slider_points: Vec<Vec2>,
    scaled_start: Vec2,
    scaled_slider_points: Vec<Vec2>,
    length_factor: f32,
}

impl HitObject {
    /// Erstellt einen Hit-Object-Deskriptor und cacht die Display-Koordinaten.
    pub fn new(
        id: u64,
        curve_type: CurveType,
        start: Vec2,
        slider_points: Vec<Vec2>,
        pixel_length: f32,
        scale: &PlayfieldScale,
    ) -> Self {
        let scaled_slider_points = slider_points.iter().map(|&p| scale.apply(p)).collect();
        Self {
            id,
            curve_type,
            pixel_length,
            start,
            scaled_start: scale.apply(start),
            slider_points,
            scaled_slider_points,
            length_factor: scale.length_factor(),
        }
    }

    /// Startpunkt in Roh-Koordinaten.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Zwischenpunkte in Roh-Koordinaten.
    pub fn slider_points(&self) -> &[Vec2] {
        &self.slider_points
    }

    /// Startpunkt in Display-Koordinaten.
    pub fn scaled_start(&self) -> Vec2 {
        self.scaled_start
    }

    /// Zwischenpunkte in Display-Koordinaten.
    pub fn scaled_slider_points(&self) -> &[Vec2] {
        &self.scaled_slider_points
    }

    /// Slider-Länge im gewählten Koordinatenraum.
    pub fn length_in(&self, scaled: bool) -> f32 {
        if scaled {
            self.pixel_length * self.length_factor
        } else {
            self.pixel_length
        }
    }
}

/// Kontrollpunkte einer Kurve im aktiven Koordinatenraum.
///
/// Index 0 ist der Startpunkt, Index i > 0 der Zwischenpunkt i - 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    start: Vec2,
    slider_points: Vec<Vec2>,
}

impl ControlPointSet {
    /// Kopiert die Kontrollpunkte des Hit-Objects im gewählten Raum.
    pub fn from_hit_object(hit_object: &HitObject, scaled: bool) -> Self {
        if scaled {
            Self {
                start: hit_object.scaled_start(),
                slider_points: hit_object.scaled_slider_points().to_vec(),
            }
        } else {
            Self {
                start: hit_object.start(),
                slider_points: hit_object.slider_points().to_vec(),
            }
        }
    }

    /// Anzahl der Kontrollpunkte inkl. Startpunkt.
    pub fn len(&self) -> usize {
        self.slider_points.len() + 1
    }

    /// Ein Kontrollpunkt-Set enthält immer mindestens den Startpunkt.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Kontrollpunkt an Index `i`.
    pub fn get(&self, i: usize) -> Option<Vec2> {
        if i == 0 {
            Some(self.start)
        } else {
            self.slider_points.get(i - 1).copied()
        }
    }

    /// Alle Kontrollpunkte in Reihenfolge (Startpunkt zuerst).
    pub fn to_vec(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.len());
        points.push(self.start);
        points.extend_from_slice(&self.slider_points);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_type_from_char() {
        assert_eq!(CurveType::from_char('L'), CurveType::Linear);
        assert_eq!(CurveType::from_char('p'), CurveType::PerfectCircle);
        assert_eq!(CurveType::from_char('C'), CurveType::Catmull);
        assert_eq!(CurveType::from_char('B'), CurveType::Bezier);
        assert_eq!(CurveType::from_char('?'), CurveType::Bezier);
    }

    #[test]
    fn test_playfield_scale_centers_4_3_area() {
        let scale = PlayfieldScale::for_viewport(1280.0, 720.0);

        // 720 * 4/3 = 960 breit → 1.5 pro Einheit
        assert_relative_eq!(scale.x_multiplier, 1.5);
        assert_relative_eq!(scale.y_multiplier, 1.5);
        assert_relative_eq!(scale.x_offset, 256.0);
        assert_relative_eq!(scale.y_offset, 72.0);
        assert_eq!(scale.apply(Vec2::ZERO), Vec2::new(256.0, 72.0));
    }

    #[test]
    fn test_scaled_points_are_cached_at_construction() {
        let scale = PlayfieldScale {
            x_multiplier: 2.0,
            y_multiplier: 3.0,
            x_offset: 10.0,
            y_offset: 0.0,
        };
        let hit = HitObject::new(
            1,
            CurveType::Linear,
            Vec2::new(1.0, 1.0),
            vec![Vec2::new(2.0, 2.0)],
            100.0,
            &scale,
        );

        assert_eq!(hit.scaled_start(), Vec2::new(12.0, 3.0));
        assert_eq!(hit.scaled_slider_points(), &[Vec2::new(14.0, 6.0)]);
        assert_relative_eq!(hit.length_in(true), 250.0);
        assert_relative_eq!(hit.length_in(false), 100.0);
    }

    #[test]
    fn test_control_point_set_indexing() {
        let hit = HitObject::new(
            1,
            CurveType::Linear,
            Vec2::new(5.0, 5.0),
            vec![Vec2::new(9.0, 9.0)],
            0.0,
            &PlayfieldScale::IDENTITY,
        );
        let set = ControlPointSet::from_hit_object(&hit, false);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(set.get(1), Some(Vec2::new(9.0, 9.0)));
        assert_eq!(set.get(2), None);
    }
}
