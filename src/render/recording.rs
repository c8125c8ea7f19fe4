//! Aufzeichnendes Zeichenziel ohne GPU.
//!
//! Hält Geometrie-Inhalte, Sprite-Stempel und die zusammengefassten
//! Draw-Befehle fest. Genutzt von Tests und Benchmarks, um den CPU-Anteil
//! beider Render-Pfade ohne Grafikkarte zu messen und zu prüfen.

use super::commands::{FrameCommand, FrameCommands};
use super::target::{CurveTarget, GeometryHandle, SpriteKind};
use super::types::CurveVertex;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ops::Range;
use std::rc::Rc;

/// Geometrie-Allokation eines `RecordingTarget`.
#[derive(Debug)]
pub struct RecordedGeometry {
    serial: u64,
    live: Rc<Cell<usize>>,
    released: Rc<RefCell<Vec<u64>>>,
}

impl GeometryHandle for RecordedGeometry {
    fn serial(&self) -> u64 {
        self.serial
    }
}

impl Drop for RecordedGeometry {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
        self.released.borrow_mut().push(self.serial);
    }
}

/// Ein gestempeltes Sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteStamp {
    /// Sprite
    pub kind: SpriteKind,
    /// Mittelpunkt
    pub center: Vec2,
    /// Kantenlänge
    pub size: f32,
    /// Tönung
    pub tint: [f32; 4],
}

/// Ein (zusammengefasster) Geometrie-Draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDraw {
    /// Kennung der Geometrie-Allokation
    pub serial: u64,
    /// Vertex-Bereich
    pub vertices: Range<u32>,
    /// Füllfarbe
    pub fill: [f32; 4],
    /// Randfarbe
    pub border: [f32; 4],
}

/// Zeichenziel, das alle Aufrufe aufzeichnet.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    next_serial: u64,
    live: Rc<Cell<usize>>,
    released: Rc<RefCell<Vec<u64>>>,
    buffers: HashMap<u64, Vec<Option<CurveVertex>>>,
    written_vertices: usize,
    frame: FrameCommands<()>,
}

impl RecordingTarget {
    /// Erstellt ein leeres Ziel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beginnt einen neuen Frame: Befehle verwerfen, lebende Geometrie behalten.
    pub fn begin_frame(&mut self) {
        self.frame.clear();
        for serial in self.released.borrow_mut().drain(..) {
            self.buffers.remove(&serial);
        }
    }

    /// Anzahl aktuell lebender Geometrie-Allokationen.
    pub fn live_geometries(&self) -> usize {
        self.live.get()
    }

    /// Anzahl aller jemals angelegten Geometrie-Allokationen.
    pub fn created_geometries(&self) -> u64 {
        self.next_serial
    }

    /// Summe aller geschriebenen Vertices seit Erstellung.
    pub fn written_vertex_count(&self) -> usize {
        self.written_vertices
    }

    /// Zusammengefasste Befehle des aktuellen Frames.
    pub fn commands(&self) -> &[FrameCommand<()>] {
        self.frame.commands()
    }

    /// Alle Sprite-Stempel des Frames in Zeichenreihenfolge.
    pub fn sprite_stamps(&self) -> Vec<SpriteStamp> {
        let sprites = self.frame.sprites();
        self.frame
            .commands()
            .iter()
            .filter_map(|command| match command {
                FrameCommand::Sprites { kind, instances } => Some((*kind, instances.clone())),
                FrameCommand::Geometry { .. } => None,
            })
            .flat_map(|(kind, instances)| {
                sprites[instances.start as usize..instances.end as usize]
                    .iter()
                    .map(move |instance| SpriteStamp {
                        kind,
                        center: Vec2::from(instance.center),
                        size: instance.size,
                        tint: instance.tint,
                    })
            })
            .collect()
    }

    /// Alle Geometrie-Draws des Frames in Zeichenreihenfolge.
    pub fn geometry_draws(&self) -> Vec<GeometryDraw> {
        let styles = self.frame.styles();
        self.frame
            .commands()
            .iter()
            .filter_map(|command| match command {
                FrameCommand::Geometry {
                    serial,
                    vertices,
                    style,
                    ..
                } => {
                    let style = styles[*style as usize];
                    Some(GeometryDraw {
                        serial: *serial,
                        vertices: vertices.clone(),
                        fill: style.fill,
                        border: style.border,
                    })
                }
                FrameCommand::Sprites { .. } => None,
            })
            .collect()
    }

    /// Inhalt aller gezeichneten Vertex-Bereiche in Zeichenreihenfolge.
    ///
    /// `None`, wenn ein gezeichneter Vertex nie geschrieben wurde.
    pub fn drawn_vertices(&self) -> Option<Vec<CurveVertex>> {
        let mut result = Vec::new();
        for draw in self.geometry_draws() {
            let buffer = self.buffers.get(&draw.serial)?;
            for index in draw.vertices {
                result.push((*buffer.get(index as usize)?)?);
            }
        }
        Some(result)
    }
}

impl CurveTarget for RecordingTarget {
    type Geometry = RecordedGeometry;

    fn draw_sprite(
        &mut self,
        object_id: u64,
        sprite: SpriteKind,
        center: Vec2,
        size: f32,
        tint: [f32; 4],
    ) {
        self.frame.push_sprite(
            object_id,
            sprite,
            super::types::SpriteInstance::new([center.x, center.y], size, tint),
        );
    }

    fn create_geometry(&mut self, vertex_count: usize) -> RecordedGeometry {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.buffers.insert(serial, vec![None; vertex_count]);
        self.live.set(self.live.get() + 1);
        RecordedGeometry {
            serial,
            live: Rc::clone(&self.live),
            released: Rc::clone(&self.released),
        }
    }

    fn write_geometry(
        &mut self,
        geometry: &RecordedGeometry,
        first_vertex: usize,
        vertices: &[CurveVertex],
    ) {
        let Some(buffer) = self.buffers.get_mut(&geometry.serial) else {
            log::error!("RecordingTarget: unbekannte Geometrie #{}", geometry.serial);
            return;
        };
        for (slot, vertex) in buffer[first_vertex..].iter_mut().zip(vertices) {
            *slot = Some(*vertex);
        }
        self.written_vertices += vertices.len();
    }

    fn draw_geometry(
        &mut self,
        geometry: &RecordedGeometry,
        object_id: u64,
        vertices: Range<u32>,
        fill: [f32; 4],
        border: [f32; 4],
    ) {
        self.frame
            .push_geometry((), geometry.serial, object_id, vertices, fill, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_geometry_is_pruned_on_next_frame() {
        let mut target = RecordingTarget::new();
        let geometry = target.create_geometry(6);
        assert_eq!(target.live_geometries(), 1);

        drop(geometry);
        assert_eq!(target.live_geometries(), 0);
        target.begin_frame();
        assert!(target.buffers.is_empty(), "Freigegebene Geometrie muss entfernt sein");
        assert_eq!(target.created_geometries(), 1);
    }

    #[test]
    fn test_unwritten_vertices_are_reported() {
        let mut target = RecordingTarget::new();
        let geometry = target.create_geometry(6);
        target.write_geometry(&geometry, 0, &[CurveVertex::new([1.0, 2.0], 0.0); 3]);

        target.draw_geometry(&geometry, 1, 0..3, [1.0; 4], [1.0; 4]);
        assert_eq!(target.drawn_vertices().map(|v| v.len()), Some(3));

        target.draw_geometry(&geometry, 1, 3..6, [1.0; 4], [1.0; 4]);
        assert_eq!(target.drawn_vertices(), None);
    }
}
