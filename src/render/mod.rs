//! Kurven-Rendering: Zeichenziel-Vertrag, Fallback, Render-State und wgpu-Backend.

mod callback;
mod commands;
mod curve_renderer;
mod environment;
pub mod fallback;
pub mod recording;
mod render_state;
pub mod sprites;
mod target;
mod texture;
mod types;

pub use callback::{CurveRenderCallback, CurveScene};
pub use commands::{FrameCommand, MAX_DEPTH_LAYERS};
pub use curve_renderer::{CurveFrame, CurveRenderer, GpuCurveGeometry, DEPTH_FORMAT, SAMPLE_COUNT};
pub use environment::{advanced_rendering_supported, CurveEnvironment, CurveRenderContext};
pub use recording::RecordingTarget;
pub use render_state::{CurveRenderState, RenderVariant};
pub use sprites::SpriteImages;
pub use target::{CurveTarget, GeometryHandle, SpriteKind};
pub use types::{CurveStyleInstance, CurveVertex, SpriteInstance};
