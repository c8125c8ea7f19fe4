//! Core-Domänentypen: Hit-Objects, Kurven-Formen und Fitting.

pub mod fitting;
/// Hit-Object-Deskriptor und Spielfeld-Skalierung
///
/// - HitObject: Startpunkt, Zwischenpunkte, Länge und Kurven-Familie
/// - PlayfieldScale: Abbildung Roh-Koordinaten → Display-Koordinaten
/// - ControlPointSet: Kontrollpunkte einer Kurve im aktiven Raum
pub mod hit_object;
pub mod shape;

pub use fitting::{fit_bezier, fit_catmull, fit_shape, CircularArc};
pub use hit_object::{ControlPointSet, CurveType, HitObject, PlayfieldScale};
pub use shape::{CurveShape, PolylineShape};
