//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_mode;
mod skin;
pub mod spline_geometry;

pub use options::CurveOptions;
pub use options::CURVE_POINTS_SEPARATION;
pub use render_mode::{select_render_mode, RenderMode};
pub use skin::SliderStyle;
