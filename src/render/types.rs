//! Rendering-Typen: Vertex- und Instanz-Layouts, Uniforms, Projektion.

use bytemuck::{Pod, Zeroable};
use eframe::wgpu;
use glam::Mat4;

/// Vertex eines Kurvenkegels.
///
/// `radial` ist 0 im Kegelzentrum und 1 am Rand; der Shader leitet daraus
/// Tiefe und Rand-/Füllfarbe ab.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    /// Position in Display-Koordinaten
    pub position: [f32; 2],
    /// Radialer Abstand zum Kegelzentrum (0..=1)
    pub radial: f32,
}

impl CurveVertex {
    /// Erstellt einen neuen CurveVertex.
    pub fn new(position: [f32; 2], radial: f32) -> Self {
        Self { position, radial }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Instanz-Daten für einen Kurven-Draw (eine Instanz pro Draw-Befehl).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveStyleInstance {
    /// Füllfarbe des Körpers
    pub fill: [f32; 4],
    /// Randfarbe
    pub border: [f32; 4],
    /// Tiefen-Schicht: [Basis, Spanne]
    pub depth: [f32; 2],
    _padding: [f32; 2],
}

impl CurveStyleInstance {
    /// Erstellt eine neue Stil-Instanz.
    pub fn new(fill: [f32; 4], border: [f32; 4], depth: [f32; 2]) -> Self {
        Self {
            fill,
            border,
            depth,
            _padding: [0.0; 2],
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu (CurveStyleInstance).
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveStyleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Eckpunkt des Sprite-Quads ([-1, 1]²)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position im Einheitsquadrat
    pub position: [f32; 2],
}

impl QuadVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für ein gestempeltes Sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Mittelpunkt in Display-Koordinaten
    pub center: [f32; 2],
    /// Kantenlänge in Display-Einheiten
    pub size: f32,
    _padding: f32,
    /// Tönung (RGBA-Multiplikator)
    pub tint: [f32; 4],
}

impl SpriteInstance {
    /// Erstellt eine neue Sprite-Instanz.
    pub fn new(center: [f32; 2], size: f32, tint: [f32; 4]) -> Self {
        Self {
            center,
            size,
            _padding: 0.0,
            tint,
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu (SpriteInstance).
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für Projektion und Kurven-Parameter
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// x: Randanteil des Kurvenkörpers, yzw: reserviert
    pub curve_params: [f32; 4],
}

/// Orthografische Projektion für Display-Koordinaten.
///
/// (0, 0) liegt oben links, (width, height) unten rechts.
pub(crate) fn build_view_projection(viewport_size: [f32; 2]) -> Mat4 {
    Mat4::orthographic_rh(0.0, viewport_size[0], viewport_size[1], 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4Swizzles};

    #[test]
    fn test_projection_maps_corners_to_ndc() {
        let proj = build_view_projection([800.0, 600.0]);

        let top_left = proj * Vec3::new(0.0, 0.0, 0.0).extend(1.0);
        let bottom_right = proj * Vec3::new(800.0, 600.0, 0.0).extend(1.0);

        assert!((top_left.xy() - glam::Vec2::new(-1.0, 1.0)).length() < 1e-5);
        assert!((bottom_right.xy() - glam::Vec2::new(1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_instance_layouts_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<CurveVertex>(), 12);
        assert_eq!(std::mem::size_of::<CurveStyleInstance>(), 48);
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
    }
}
