//! Zeichenziel für Kurven: Sprite-Stempel (Fallback) und Kurven-Geometrie.

use super::types::CurveVertex;
use glam::Vec2;
use std::ops::Range;

/// Sprites des Fallback-Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    /// Hit-Circle (Körper, mit Körperfarbe getönt)
    HitCircle,
    /// Hit-Circle-Overlay (neutral getönt)
    HitCircleOverlay,
}

/// Von einem Zeichenziel erzeugte Kurven-Geometrie.
pub trait GeometryHandle {
    /// Eindeutige Kennung dieser Allokation (ändert sich bei Neuaufbau).
    fn serial(&self) -> u64;
}

/// Ziel, in das Kurven gezeichnet werden.
///
/// Die Geometrie gehört dem Aufrufer (dem Render-State der Kurve) und wird
/// durch `Drop` freigegeben.
pub trait CurveTarget {
    /// Geometrie-Allokation dieses Ziels.
    type Geometry: GeometryHandle;

    /// Stempelt ein Sprite von Kurve `object_id` zentriert auf `center`.
    ///
    /// Overlays einer Kurve liegen unter allen Körpern derselben Kurve im
    /// laufenden Zeichenlauf, unabhängig von der Aufrufreihenfolge.
    fn draw_sprite(
        &mut self,
        object_id: u64,
        sprite: SpriteKind,
        center: Vec2,
        size: f32,
        tint: [f32; 4],
    );

    /// Reserviert Geometrie für `vertex_count` Vertices (Inhalt undefiniert).
    fn create_geometry(&mut self, vertex_count: usize) -> Self::Geometry;

    /// Schreibt Vertices ab Vertex-Index `first_vertex`.
    fn write_geometry(
        &mut self,
        geometry: &Self::Geometry,
        first_vertex: usize,
        vertices: &[CurveVertex],
    );

    /// Zeichnet den Vertex-Bereich `vertices` der Geometrie von Kurve `object_id`.
    fn draw_geometry(
        &mut self,
        geometry: &Self::Geometry,
        object_id: u64,
        vertices: Range<u32>,
        fill: [f32; 4],
        border: [f32; 4],
    );
}
