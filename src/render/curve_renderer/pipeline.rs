//! Pipeline-Erstellung: Sprite-Pipeline und die beiden Kurven-Pässe.

use super::super::types::{CurveStyleInstance, CurveVertex, QuadVertex, SpriteInstance};
use eframe::wgpu;

/// Tiefenformat des egui-Render-Passes (`NativeOptions::depth_buffer = 24`).
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// MSAA-Samples des egui-Render-Passes (`NativeOptions::multisampling`).
pub const SAMPLE_COUNT: u32 = 4;

/// Alle Pipelines des Kurven-Renderers samt Bind-Group-Layouts.
pub(super) struct Pipelines {
    pub sprite: wgpu::RenderPipeline,
    /// Schreibt nur Tiefe (Vorpass)
    pub curve_depth: wgpu::RenderPipeline,
    /// Färbt nur Fragmente mit exakt der Tiefe aus dem Vorpass
    pub curve_color: wgpu::RenderPipeline,
    pub uniform_layout: wgpu::BindGroupLayout,
    pub texture_layout: wgpu::BindGroupLayout,
}

impl Pipelines {
    pub(super) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Curve Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sprite_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let curve_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Curve Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });

        let sprite = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&sprite_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_sprite"),
                buffers: &[QuadVertex::desc(), SpriteInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive_state(),
            // Sprites ignorieren die Tiefe, die Reihenfolge der Stempel zählt
            depth_stencil: Some(depth_state(wgpu::CompareFunction::Always, false)),
            multisample: multisample_state(),
            multiview: None,
            cache: None,
        });

        let curve_depth = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Curve Depth Pipeline"),
            layout: Some(&curve_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_curve"),
                buffers: &[CurveVertex::desc(), CurveStyleInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_curve"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::empty(),
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive_state(),
            depth_stencil: Some(depth_state(wgpu::CompareFunction::Less, true)),
            multisample: multisample_state(),
            multiview: None,
            cache: None,
        });

        let curve_color = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Curve Color Pipeline"),
            layout: Some(&curve_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_curve"),
                buffers: &[CurveVertex::desc(), CurveStyleInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_curve"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive_state(),
            depth_stencil: Some(depth_state(wgpu::CompareFunction::Equal, false)),
            multisample: multisample_state(),
            multiview: None,
            cache: None,
        });

        Self {
            sprite,
            curve_depth,
            curve_color,
            uniform_layout,
            texture_layout,
        }
    }
}

fn primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        unclipped_depth: false,
        polygon_mode: wgpu::PolygonMode::Fill,
        conservative: false,
    }
}

fn multisample_state() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: SAMPLE_COUNT,
        mask: !0,
        alpha_to_coverage_enabled: false,
    }
}

fn depth_state(compare: wgpu::CompareFunction, write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: compare,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}
