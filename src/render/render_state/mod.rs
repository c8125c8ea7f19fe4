//! Gecachte Kurven-Geometrie einer einzelnen Kurve (erweiterter Render-Pfad).
//!
//! Aufgeteilt in:
//! - `coverage`: welche Punktbereiche bereits hochgeladen sind
//! - `mesh`: Kegel-Vertices pro Kurvenpunkt

mod coverage;
mod mesh;

use super::target::{CurveTarget, GeometryHandle};
use super::types::CurveVertex;
use crate::shared::options::CONE_SEGMENTS;
use coverage::CoveredRanges;
use glam::Vec2;
use std::ops::Range;

/// Art des Render-States.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderVariant {
    /// Hochgeladene Bereiche bleiben gültig, bis der State verworfen wird
    #[default]
    Static,
    /// Jeder Draw/Splice lädt seinen Bereich neu hoch
    Dynamic,
}

/// GPU-seitige Darstellung des abgetasteten Pfads einer Kurve.
///
/// Wird beim ersten Draw/Splice aus dem vollständigen Pfad angelegt. Die
/// Geometrie wird für alle Punkte reserviert, Vertices aber nur für die
/// angeforderten Bereiche erzeugt und hochgeladen.
pub struct CurveRenderState<G> {
    object_id: u64,
    variant: RenderVariant,
    points: Vec<Vec2>,
    radius: f32,
    ring: Vec<Vec2>,
    geometry: G,
    covered: CoveredRanges,
    /// Wiederverwendbarer Scratch-Buffer für Vertex-Daten
    scratch: Vec<CurveVertex>,
}

impl<G: GeometryHandle> CurveRenderState<G> {
    /// Legt den State für den vollständigen Pfad `points` an.
    pub fn new<T>(
        target: &mut T,
        object_id: u64,
        points: &[Vec2],
        radius: f32,
        variant: RenderVariant,
    ) -> Self
    where
        T: CurveTarget<Geometry = G>,
    {
        let ring = mesh::cone_ring(CONE_SEGMENTS);
        let geometry = target.create_geometry(points.len() * mesh::vertices_per_cone(&ring));
        log::debug!(
            "CurveRenderState für Objekt {} angelegt: {} Punkte, Geometrie #{}",
            object_id,
            points.len(),
            geometry.serial()
        );

        Self {
            object_id,
            variant,
            points: points.to_vec(),
            radius,
            ring,
            geometry,
            covered: CoveredRanges::default(),
            scratch: Vec::new(),
        }
    }

    /// ID des Objekts, zu dem die Geometrie gehört.
    pub fn object_id(&self) -> u64 {
        self.object_id
    }

    /// Art des States.
    pub fn variant(&self) -> RenderVariant {
        self.variant
    }

    /// Anzahl der Punkte im zugrunde liegenden Pfad.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der bereits hochgeladenen Punkte.
    pub fn uploaded_point_count(&self) -> usize {
        self.covered.covered_len()
    }

    /// Zeichnet den Punktbereich `[from, to)`.
    ///
    /// Fehlende Punkte werden vorher hochgeladen; bereits gecachte Bereiche
    /// werden nicht neu erzeugt.
    pub fn draw<T>(
        &mut self,
        target: &mut T,
        fill: [f32; 4],
        border: [f32; 4],
        from: usize,
        to: usize,
    ) where
        T: CurveTarget<Geometry = G>,
    {
        let range = self.clamp(from, to);
        if range.is_empty() {
            return;
        }
        self.upload(target, range.clone());

        let per_cone = mesh::vertices_per_cone(&self.ring);
        let vertices = (range.start * per_cone) as u32..(range.end * per_cone) as u32;
        target.draw_geometry(&self.geometry, self.object_id, vertices, fill, border);
    }

    /// Nimmt den Punktbereich `[from, to)` in die Geometrie auf, ohne zu zeichnen.
    ///
    /// Arbeit fällt nur für noch nicht hochgeladene Punkte an.
    pub fn splice<T>(&mut self, target: &mut T, from: usize, to: usize)
    where
        T: CurveTarget<Geometry = G>,
    {
        let range = self.clamp(from, to);
        self.upload(target, range);
    }

    fn clamp(&self, from: usize, to: usize) -> Range<usize> {
        let to = to.min(self.points.len());
        from.min(to)..to
    }

    fn upload<T>(&mut self, target: &mut T, range: Range<usize>)
    where
        T: CurveTarget<Geometry = G>,
    {
        let gaps = match self.variant {
            RenderVariant::Static => self.covered.missing(range),
            RenderVariant::Dynamic => vec![range],
        };

        let per_cone = mesh::vertices_per_cone(&self.ring);
        for gap in gaps {
            if gap.is_empty() {
                continue;
            }
            self.scratch.clear();
            for &point in &self.points[gap.clone()] {
                mesh::push_cone(&mut self.scratch, point, self.radius, &self.ring);
            }
            target.write_geometry(&self.geometry, gap.start * per_cone, &self.scratch);
            self.covered.insert(gap);
        }
    }
}

#[cfg(test)]
mod tests;
