//! wgpu-Renderer für Slider-Kurven.
//!
//! Aufgeteilt in:
//! - `pipeline`: Sprite-Pipeline, Tiefen-Vorpass und Farb-Pass der Kurven
//!
//! Ein Frame läuft in zwei Phasen: `begin_frame` liefert ein `CurveFrame`,
//! in das Kurven gezeichnet werden (Aufzeichnung + Geometrie-Upload);
//! `paint` spielt die aufgezeichneten Befehle in den Render-Pass ab.

mod pipeline;

pub use pipeline::{DEPTH_FORMAT, SAMPLE_COUNT};

use super::commands::{FrameCommand, FrameCommands};
use super::sprites::SpriteImages;
use super::target::{CurveTarget, GeometryHandle, SpriteKind};
use super::texture::create_sprite_texture;
use super::types::{build_view_projection, CurveVertex, QuadVertex, SpriteInstance, Uniforms};
use crate::shared::options::SLIDER_BORDER_FRACTION;
use eframe::{egui_wgpu, wgpu};
use glam::Vec2;
use pipeline::Pipelines;
use std::ops::Range;
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// GPU-Geometrie einer Kurve (Vertex-Buffer mit allen Kegeln).
///
/// Der Buffer wird freigegeben, sobald der Render-State und alle
/// aufgezeichneten Befehle des laufenden Frames ihn losgelassen haben.
#[derive(Debug)]
pub struct GpuCurveGeometry {
    buffer: Arc<wgpu::Buffer>,
    serial: u64,
}

impl GeometryHandle for GpuCurveGeometry {
    fn serial(&self) -> u64 {
        self.serial
    }
}

/// Renderer für Kurven beider Pfade (Sprites und Kegel-Geometrie).
///
/// Setzt einen egui-Render-Pass mit Tiefenpuffer (`DEPTH_FORMAT`) und
/// `SAMPLE_COUNT` MSAA-Samples voraus.
pub struct CurveRenderer {
    pipelines: Pipelines,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    hit_circle_bind_group: wgpu::BindGroup,
    overlay_bind_group: wgpu::BindGroup,
    quad_buffer: wgpu::Buffer,
    sprite_buffer: Option<wgpu::Buffer>,
    sprite_capacity: usize,
    style_buffer: Option<wgpu::Buffer>,
    style_capacity: usize,
    frame: FrameCommands<Arc<wgpu::Buffer>>,
    next_serial: u64,
}

impl CurveRenderer {
    /// Erstellt Pipelines, Sprite-Texturen und den Quad-Buffer.
    pub fn new(render_state: &egui_wgpu::RenderState, sprites: &SpriteImages) -> Self {
        let device = &render_state.device;
        let queue = &render_state.queue;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Curve Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders.wgsl").into()),
        });
        let pipelines = Pipelines::new(device, &shader, render_state.target_format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Curve Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Curve Uniform Bind Group"),
            layout: &pipelines.uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let sprite_bind_group = |kind: SpriteKind, label: &str| {
            let texture = create_sprite_texture(device, queue, sprites.get(kind), label);
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &pipelines.texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&texture.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&texture.sampler),
                    },
                ],
            })
        };
        let hit_circle_bind_group = sprite_bind_group(SpriteKind::HitCircle, "Hit Circle");
        let overlay_bind_group =
            sprite_bind_group(SpriteKind::HitCircleOverlay, "Hit Circle Overlay");

        // Quad für Sprite-Instanzen (2 Dreiecke)
        let corners: [QuadVertex; 6] = [
            QuadVertex {
                position: [-1.0, -1.0],
            },
            QuadVertex {
                position: [1.0, -1.0],
            },
            QuadVertex {
                position: [1.0, 1.0],
            },
            QuadVertex {
                position: [-1.0, -1.0],
            },
            QuadVertex {
                position: [1.0, 1.0],
            },
            QuadVertex {
                position: [-1.0, 1.0],
            },
        ];
        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Quad Buffer"),
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::info!(
            "CurveRenderer erstellt (Zielformat {:?}, {} MSAA-Samples)",
            render_state.target_format,
            SAMPLE_COUNT
        );

        Self {
            pipelines,
            uniform_buffer,
            uniform_bind_group,
            hit_circle_bind_group,
            overlay_bind_group,
            quad_buffer,
            sprite_buffer: None,
            sprite_capacity: 0,
            style_buffer: None,
            style_capacity: 0,
            frame: FrameCommands::default(),
            next_serial: 0,
        }
    }

    /// Beginnt einen Frame und verwirft die Befehle des vorherigen.
    ///
    /// `viewport_size` ist die Größe der Zeichenfläche in Display-Einheiten;
    /// (0, 0) liegt oben links.
    pub fn begin_frame<'a>(
        &'a mut self,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        viewport_size: [f32; 2],
    ) -> CurveFrame<'a> {
        self.frame.clear();
        CurveFrame {
            renderer: self,
            device,
            queue,
            viewport_size,
        }
    }

    /// Spielt die Befehle des zuletzt beendeten Frames ab.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        for command in self.frame.commands() {
            match command {
                FrameCommand::Sprites { kind, instances } => {
                    let Some(sprite_buffer) = self.sprite_buffer.as_ref() else {
                        log::error!("CurveRenderer: Sprite-Buffer fehlt vor dem Draw-Call");
                        return;
                    };
                    render_pass.set_pipeline(&self.pipelines.sprite);
                    render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                    render_pass.set_bind_group(1, self.sprite_bind_group(*kind), &[]);
                    render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                    render_pass.set_vertex_buffer(1, sprite_buffer.slice(..));
                    render_pass.draw(0..6, instances.clone());
                }
                FrameCommand::Geometry {
                    handle,
                    vertices,
                    style,
                    ..
                } => {
                    let Some(style_buffer) = self.style_buffer.as_ref() else {
                        log::error!("CurveRenderer: Stil-Buffer fehlt vor dem Draw-Call");
                        return;
                    };
                    let instance = *style..*style + 1;
                    render_pass.set_vertex_buffer(0, handle.slice(..));
                    render_pass.set_vertex_buffer(1, style_buffer.slice(..));

                    render_pass.set_pipeline(&self.pipelines.curve_depth);
                    render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                    render_pass.draw(vertices.clone(), instance.clone());

                    render_pass.set_pipeline(&self.pipelines.curve_color);
                    render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                    render_pass.draw(vertices.clone(), instance);
                }
            }
        }
    }

    fn sprite_bind_group(&self, kind: SpriteKind) -> &wgpu::BindGroup {
        match kind {
            SpriteKind::HitCircle => &self.hit_circle_bind_group,
            SpriteKind::HitCircleOverlay => &self.overlay_bind_group,
        }
    }
}

/// Zeichenziel für einen Frame des `CurveRenderer`.
///
/// Geometrie-Uploads gehen sofort an die Queue, Sprite- und Stil-Instanzen
/// erst bei `finish`.
pub struct CurveFrame<'a> {
    renderer: &'a mut CurveRenderer,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    viewport_size: [f32; 2],
}

impl CurveFrame<'_> {
    /// Größe der Zeichenfläche in Display-Einheiten.
    pub fn viewport_size(&self) -> [f32; 2] {
        self.viewport_size
    }

    /// Anzahl der aufgezeichneten Draw-Befehle.
    pub fn command_count(&self) -> usize {
        self.renderer.frame.commands().len()
    }

    /// Schließt die Aufzeichnung ab und lädt Uniforms und Instanzen hoch.
    pub fn finish(self) {
        let view_proj = build_view_projection(self.viewport_size);
        self.queue.write_buffer(
            &self.renderer.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                curve_params: [SLIDER_BORDER_FRACTION, 0.0, 0.0, 0.0],
            }]),
        );

        let renderer = self.renderer;
        write_instances(
            self.device,
            self.queue,
            &mut renderer.sprite_buffer,
            &mut renderer.sprite_capacity,
            renderer.frame.sprites(),
            "Sprite Instance Buffer",
        );
        write_instances(
            self.device,
            self.queue,
            &mut renderer.style_buffer,
            &mut renderer.style_capacity,
            renderer.frame.styles(),
            "Curve Style Buffer",
        );

        log::debug!(
            "Kurven-Frame: {} Befehle, {} Sprites, {} Stile",
            renderer.frame.commands().len(),
            renderer.frame.sprites().len(),
            renderer.frame.styles().len()
        );
    }
}

impl CurveTarget for CurveFrame<'_> {
    type Geometry = GpuCurveGeometry;

    fn draw_sprite(
        &mut self,
        object_id: u64,
        sprite: SpriteKind,
        center: Vec2,
        size: f32,
        tint: [f32; 4],
    ) {
        self.renderer.frame.push_sprite(
            object_id,
            sprite,
            SpriteInstance::new(center.to_array(), size, tint),
        );
    }

    fn create_geometry(&mut self, vertex_count: usize) -> GpuCurveGeometry {
        let serial = self.renderer.next_serial;
        self.renderer.next_serial += 1;

        let size = (vertex_count.max(1) * std::mem::size_of::<CurveVertex>()) as u64;
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Curve Geometry Buffer"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        GpuCurveGeometry {
            buffer: Arc::new(buffer),
            serial,
        }
    }

    fn write_geometry(
        &mut self,
        geometry: &GpuCurveGeometry,
        first_vertex: usize,
        vertices: &[CurveVertex],
    ) {
        if vertices.is_empty() {
            return;
        }
        let offset = (first_vertex * std::mem::size_of::<CurveVertex>()) as u64;
        self.queue
            .write_buffer(&geometry.buffer, offset, bytemuck::cast_slice(vertices));
    }

    fn draw_geometry(
        &mut self,
        geometry: &GpuCurveGeometry,
        object_id: u64,
        vertices: Range<u32>,
        fill: [f32; 4],
        border: [f32; 4],
    ) {
        self.renderer.frame.push_geometry(
            Arc::clone(&geometry.buffer),
            geometry.serial,
            object_id,
            vertices,
            fill,
            border,
        );
    }
}

/// Lädt Instanzdaten hoch und vergrößert den Buffer bei Bedarf.
fn write_instances<T: bytemuck::Pod>(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &mut Option<wgpu::Buffer>,
    capacity: &mut usize,
    data: &[T],
    label: &str,
) {
    if data.is_empty() {
        return;
    }

    if buffer.is_none() || data.len() > *capacity {
        let new_capacity = data.len().next_power_of_two();
        *buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (new_capacity * std::mem::size_of::<T>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        *capacity = new_capacity;
    }

    if let Some(buffer) = buffer.as_ref() {
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
    }
}
