//! Frame-Aufzeichnung: Draw-Befehle, Instanzdaten und Tiefen-Schichten.
//!
//! Aufeinanderfolgende Befehle werden zusammengefasst, wenn sie dieselbe
//! Arbeit fortsetzen (gleiche Geometrie + Stil bei lückenlosem Bereich,
//! gleiches Sprite desselben Objekts). Dadurch erzeugt `draw(a, b); draw(b, c)`
//! dieselben Befehle wie `draw(a, c)`.
//!
//! Sprites eines Objekts bilden einen Lauf: alle Overlays des Laufs liegen
//! vor allen Körpern, auch wenn der Lauf aus mehreren Draws besteht.

use super::target::SpriteKind;
use super::types::{CurveStyleInstance, SpriteInstance};
use std::collections::HashMap;
use std::ops::Range;

/// Maximale Anzahl unterscheidbarer Kurven-Schichten pro Frame.
pub const MAX_DEPTH_LAYERS: u32 = 1024;

/// Tiefen-Spanne einer Schicht.
const LAYER_SPAN: f32 = 1.0 / (MAX_DEPTH_LAYERS + 1) as f32;

/// Ein aufgezeichneter Draw-Befehl.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameCommand<H> {
    /// Instanzbereich eines Sprites
    Sprites {
        /// Gestempeltes Sprite
        kind: SpriteKind,
        /// Bereich in den Sprite-Instanzen des Frames
        instances: Range<u32>,
    },
    /// Vertex-Bereich einer Kurven-Geometrie
    Geometry {
        /// Zielspezifische Referenz auf die Geometrie
        handle: H,
        /// Kennung der Geometrie-Allokation
        serial: u64,
        /// Vertex-Bereich
        vertices: Range<u32>,
        /// Index in den Stil-Instanzen des Frames
        style: u32,
    },
}

/// Alle Draw-Befehle eines Frames in Aufrufreihenfolge.
#[derive(Debug)]
pub struct FrameCommands<H> {
    commands: Vec<FrameCommand<H>>,
    sprites: Vec<SpriteInstance>,
    styles: Vec<CurveStyleInstance>,
    layers: HashMap<u64, u32>,
    sprite_run: Option<SpriteRun>,
}

/// Offener Sprite-Lauf eines Objekts (Indizes in `commands`).
#[derive(Debug, Clone, Copy)]
struct SpriteRun {
    object_id: u64,
    overlays: Option<usize>,
    bodies: Option<usize>,
}

impl<H> Default for FrameCommands<H> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            sprites: Vec::new(),
            styles: Vec::new(),
            layers: HashMap::new(),
            sprite_run: None,
        }
    }
}

impl<H> FrameCommands<H> {
    /// Verwirft alle Befehle (Kapazitäten bleiben erhalten).
    pub fn clear(&mut self) {
        self.commands.clear();
        self.sprites.clear();
        self.styles.clear();
        self.layers.clear();
        self.sprite_run = None;
    }

    /// Aufgezeichnete Befehle.
    pub fn commands(&self) -> &[FrameCommand<H>] {
        &self.commands
    }

    /// Sprite-Instanzen des Frames.
    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    /// Stil-Instanzen des Frames.
    pub fn styles(&self) -> &[CurveStyleInstance] {
        &self.styles
    }

    /// Stempelt ein Sprite für Objekt `object_id`.
    ///
    /// Ein Overlay, das nach Körpern desselben Laufs eintrifft, wird vor
    /// diesen Körpern eingefügt.
    pub fn push_sprite(&mut self, object_id: u64, kind: SpriteKind, instance: SpriteInstance) {
        let mut run = match self.sprite_run {
            Some(run) if run.object_id == object_id => run,
            _ => SpriteRun {
                object_id,
                overlays: None,
                bodies: None,
            },
        };

        match kind {
            SpriteKind::HitCircleOverlay => self.push_overlay(&mut run, instance),
            SpriteKind::HitCircle => {
                let index = self.sprites.len() as u32;
                self.sprites.push(instance);
                match run.bodies {
                    Some(command) => self.extend_sprites(command, 1),
                    None => {
                        run.bodies = Some(self.commands.len());
                        self.commands.push(FrameCommand::Sprites {
                            kind,
                            instances: index..index + 1,
                        });
                    }
                }
            }
        }
        self.sprite_run = Some(run);
    }

    fn push_overlay(&mut self, run: &mut SpriteRun, instance: SpriteInstance) {
        let Some(bodies) = run.bodies else {
            let index = self.sprites.len() as u32;
            self.sprites.push(instance);
            match run.overlays {
                Some(command) => self.extend_sprites(command, 1),
                None => {
                    run.overlays = Some(self.commands.len());
                    self.commands.push(FrameCommand::Sprites {
                        kind: SpriteKind::HitCircleOverlay,
                        instances: index..index + 1,
                    });
                }
            }
            return;
        };

        // Körper des Laufs liegen am Ende: Overlay davor einschieben
        let FrameCommand::Sprites { instances, .. } = &mut self.commands[bodies] else {
            return;
        };
        let at = instances.start;
        instances.start += 1;
        instances.end += 1;
        self.sprites.insert(at as usize, instance);

        match run.overlays {
            Some(command) => self.extend_sprites(command, 1),
            None => {
                self.commands.insert(
                    bodies,
                    FrameCommand::Sprites {
                        kind: SpriteKind::HitCircleOverlay,
                        instances: at..at + 1,
                    },
                );
                run.overlays = Some(bodies);
                run.bodies = Some(bodies + 1);
            }
        }
    }

    fn extend_sprites(&mut self, command: usize, count: u32) {
        if let Some(FrameCommand::Sprites { instances, .. }) = self.commands.get_mut(command) {
            instances.end += count;
        }
    }

    /// Zeichnet einen Geometrie-Bereich.
    ///
    /// Schließt der Bereich lückenlos an den letzten Befehl derselben
    /// Geometrie mit identischem Stil an, wird dieser verlängert.
    pub fn push_geometry(
        &mut self,
        handle: H,
        serial: u64,
        object_id: u64,
        vertices: Range<u32>,
        fill: [f32; 4],
        border: [f32; 4],
    ) {
        if vertices.is_empty() {
            return;
        }
        self.sprite_run = None;
        let style = CurveStyleInstance::new(fill, border, self.depth_for(object_id));

        if let Some(FrameCommand::Geometry {
            serial: last_serial,
            vertices: last_vertices,
            style: last_style,
            ..
        }) = self.commands.last_mut()
        {
            if *last_serial == serial
                && last_vertices.end == vertices.start
                && self.styles[*last_style as usize] == style
            {
                last_vertices.end = vertices.end;
                return;
            }
        }

        let style_index = self.styles.len() as u32;
        self.styles.push(style);
        self.commands.push(FrameCommand::Geometry {
            handle,
            serial,
            vertices,
            style: style_index,
        });
    }

    /// Tiefen-Schicht einer Kurve: [Basis, Spanne].
    ///
    /// Später zuerst gezeichnete Kurven liegen weiter vorne (kleinere Tiefe).
    fn depth_for(&mut self, object_id: u64) -> [f32; 2] {
        let next = self.layers.len() as u32;
        let layer = *self.layers.entry(object_id).or_insert_with(|| {
            if next >= MAX_DEPTH_LAYERS {
                log::debug!(
                    "Mehr als {} Kurven im Frame, Schichten werden geteilt",
                    MAX_DEPTH_LAYERS
                );
            }
            next.min(MAX_DEPTH_LAYERS - 1)
        });
        let base = 1.0 - (layer + 1) as f32 * LAYER_SPAN;
        [base, LAYER_SPAN * 0.9]
    }
}
