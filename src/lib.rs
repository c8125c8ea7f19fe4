//! Playfield Curves Library.
//! Slider-Kurven als Library exportiert: Abtastung, Abfragen und Rendering.

pub mod core;
pub mod curve;
pub mod render;
pub mod shared;

pub use crate::core::{
    fit_shape, ControlPointSet, CurveShape, CurveType, HitObject, PlayfieldScale, PolylineShape,
};
pub use curve::{Curve, CurveError};
pub use render::{
    CurveEnvironment, CurveRenderContext, CurveRenderState, CurveTarget, RecordingTarget,
    RenderVariant, SpriteKind,
};
pub use shared::{select_render_mode, CurveOptions, RenderMode, SliderStyle};
