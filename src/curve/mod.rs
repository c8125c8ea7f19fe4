//! Kurve eines Hit-Objects: Kontrollpunkte, abgetasteter Pfad, Render-State.
//!
//! Die Kurve wählt bei jedem Draw neu zwischen Fallback-Sprites und der
//! gecachten Geometrie. Der Render-State entsteht erst beim ersten Bedarf
//! und gehört exklusiv dieser Kurve.

use crate::core::fitting::fit_shape;
use crate::core::{ControlPointSet, CurveShape, CurveType, HitObject};
use crate::render::fallback::draw_fallback;
use crate::render::{
    CurveRenderContext, CurveRenderState, CurveTarget, GeometryHandle, GpuCurveGeometry,
    RenderVariant,
};
use crate::shared::RenderMode;
use glam::Vec2;

/// Fehler bei Abfragen und Draw-Aufrufen einer Kurve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// Kontrollpunkt-Index außerhalb von `0..count`
    #[error("Kontrollpunkt-Index {index} ungültig (Kurve hat {count} Kontrollpunkte)")]
    InvalidIndex {
        /// Angefragter Index
        index: usize,
        /// Anzahl der Kontrollpunkte
        count: usize,
    },
    /// Zeichenbereich verletzt `from <= to <= len`
    #[error("Punktbereich {from}..{to} ungültig (Pfad hat {len} Punkte)")]
    InvalidRange {
        /// Startindex
        from: usize,
        /// Endindex (exklusiv)
        to: usize,
        /// Länge des Pfads
        len: usize,
    },
    /// Der Pfad wurde noch nicht abgetastet
    #[error("Kurve hat noch keinen abgetasteten Pfad")]
    NotReady,
}

/// Eine Slider-Kurve.
///
/// `G` ist die Geometrie-Allokation des Zeichenziels (GPU-Buffer im
/// Normalbetrieb). Wer den Zeichenmaßstab ändert, muss vorher
/// `discard_geometry` aufrufen; `set_shape` erledigt das selbst.
pub struct Curve<G = GpuCurveGeometry> {
    object_id: u64,
    curve_type: CurveType,
    length: f32,
    controls: ControlPointSet,
    shape: Option<Box<dyn CurveShape>>,
    render_variant: RenderVariant,
    render_state: Option<CurveRenderState<G>>,
}

impl<G: GeometryHandle> Curve<G> {
    /// Übernimmt die Kontrollpunkte im gewählten Koordinatenraum.
    ///
    /// Tastet noch nicht ab: bis `fit` oder `set_shape` aufgerufen wurde,
    /// sind Draws wirkungslos.
    pub fn new(hit_object: &HitObject, scaled: bool) -> Self {
        Self {
            object_id: hit_object.id,
            curve_type: hit_object.curve_type,
            length: hit_object.length_in(scaled),
            controls: ControlPointSet::from_hit_object(hit_object, scaled),
            shape: None,
            render_variant: RenderVariant::default(),
            render_state: None,
        }
    }

    /// Erstellt die Kurve und tastet sie mit der Familie des Hit-Objects ab.
    pub fn fitted(hit_object: &HitObject, scaled: bool) -> Self {
        let mut curve = Self::new(hit_object, scaled);
        curve.fit();
        curve
    }

    /// Tastet die Kontrollpunkte mit der Kurven-Familie ab und ersetzt den Pfad.
    pub fn fit(&mut self) {
        let shape = fit_shape(self.curve_type, &self.controls.to_vec(), self.length);
        self.set_shape(shape);
    }

    /// Ersetzt den abgetasteten Pfad und verwirft den Render-State.
    pub fn set_shape(&mut self, shape: Box<dyn CurveShape>) {
        self.discard_geometry();
        self.shape = Some(shape);
    }

    /// Wechselt die Art des Render-States und verwirft den bisherigen.
    pub fn set_render_variant(&mut self, variant: RenderVariant) {
        if self.render_variant != variant {
            self.discard_geometry();
            self.render_variant = variant;
        }
    }

    /// ID des zugehörigen Hit-Objects.
    pub fn object_id(&self) -> u64 {
        self.object_id
    }

    /// Ob bereits ein Pfad vorliegt.
    pub fn is_ready(&self) -> bool {
        self.shape.is_some()
    }

    /// Ob aktuell ein Render-State existiert.
    pub fn has_render_state(&self) -> bool {
        self.render_state.is_some()
    }

    /// Render-State, falls angelegt.
    pub fn render_state(&self) -> Option<&CurveRenderState<G>> {
        self.render_state.as_ref()
    }

    /// Abgetasteter Pfad, falls vorhanden.
    pub fn points(&self) -> Option<&[Vec2]> {
        self.shape.as_deref().map(|shape| shape.points())
    }

    /// Anzahl der Kontrollpunkte (Startpunkt + Zwischenpunkte).
    pub fn control_point_count(&self) -> usize {
        self.controls.len()
    }

    /// Punkt auf der Kurve für t ∈ [0, 1].
    pub fn point_at(&self, t: f32) -> Result<Vec2, CurveError> {
        Ok(self.shape()?.point_at(t))
    }

    /// Tangentenwinkel am Kurvenanfang (Radiant).
    pub fn start_angle(&self) -> Result<f32, CurveError> {
        Ok(self.shape()?.start_angle())
    }

    /// Tangentenwinkel am Kurvenende (Radiant).
    pub fn end_angle(&self) -> Result<f32, CurveError> {
        Ok(self.shape()?.end_angle())
    }

    /// x-Koordinate von Kontrollpunkt `i` (0 = Startpunkt).
    pub fn x(&self, i: usize) -> Result<f32, CurveError> {
        Ok(self.control_point(i)?.x)
    }

    /// y-Koordinate von Kontrollpunkt `i` (0 = Startpunkt).
    pub fn y(&self, i: usize) -> Result<f32, CurveError> {
        Ok(self.control_point(i)?.y)
    }

    /// Zeichnet die gesamte Kurve.
    pub fn draw<T>(
        &mut self,
        ctx: &CurveRenderContext<'_>,
        target: &mut T,
        color: [f32; 4],
    ) -> Result<(), CurveError>
    where
        T: CurveTarget<Geometry = G>,
    {
        let Some(len) = self.points().map(<[Vec2]>::len) else {
            return Ok(());
        };
        self.draw_range(ctx, target, color, 0, len)
    }

    /// Zeichnet den Punktbereich `[from, to)` mit der aktuell gewählten Strategie.
    ///
    /// Ohne Pfad passiert nichts (kein Fehler).
    pub fn draw_range<T>(
        &mut self,
        ctx: &CurveRenderContext<'_>,
        target: &mut T,
        color: [f32; 4],
        from: usize,
        to: usize,
    ) -> Result<(), CurveError>
    where
        T: CurveTarget<Geometry = G>,
    {
        let Some(len) = self.points().map(<[Vec2]>::len) else {
            return Ok(());
        };
        check_range(from, to, len)?;

        match ctx.render_mode() {
            RenderMode::Fallback => {
                draw_fallback(
                    target,
                    self.object_id,
                    &self.shape()?.points()[from..to],
                    color,
                    ctx.environment.circle_diameter(),
                );
            }
            RenderMode::Advanced => {
                let mut border = ctx.environment.border_color();
                border[3] *= color[3];
                self.ensure_render_state(ctx, target)
                    .draw(target, color, border, from, to);
            }
        }
        Ok(())
    }

    /// Nimmt den Punktbereich `[from, to)` in den Render-State auf.
    ///
    /// Ohne Pfad oder ohne GPU-Fähigkeit passiert nichts.
    pub fn splice<T>(
        &mut self,
        ctx: &CurveRenderContext<'_>,
        target: &mut T,
        from: usize,
        to: usize,
    ) -> Result<(), CurveError>
    where
        T: CurveTarget<Geometry = G>,
    {
        let Some(len) = self.points().map(<[Vec2]>::len) else {
            return Ok(());
        };
        check_range(from, to, len)?;
        if !ctx.environment.advanced_supported() {
            return Ok(());
        }

        self.ensure_render_state(ctx, target)
            .splice(target, from, to);
        Ok(())
    }

    /// Verwirft den Render-State und gibt seine Geometrie frei.
    pub fn discard_geometry(&mut self) {
        if let Some(state) = self.render_state.take() {
            log::debug!(
                "Geometrie von Objekt {} verworfen ({} Punkte hochgeladen)",
                self.object_id,
                state.uploaded_point_count()
            );
        }
    }

    fn shape(&self) -> Result<&dyn CurveShape, CurveError> {
        self.shape.as_deref().ok_or(CurveError::NotReady)
    }

    fn control_point(&self, i: usize) -> Result<Vec2, CurveError> {
        self.controls.get(i).ok_or(CurveError::InvalidIndex {
            index: i,
            count: self.controls.len(),
        })
    }

    fn ensure_render_state<T>(
        &mut self,
        ctx: &CurveRenderContext<'_>,
        target: &mut T,
    ) -> &mut CurveRenderState<G>
    where
        T: CurveTarget<Geometry = G>,
    {
        let Self {
            object_id,
            shape,
            render_variant,
            render_state,
            ..
        } = self;
        render_state.get_or_insert_with(|| {
            let points = shape.as_deref().map(|s| s.points()).unwrap_or(&[]);
            CurveRenderState::new(
                target,
                *object_id,
                points,
                ctx.environment.curve_radius(),
                *render_variant,
            )
        })
    }
}

fn check_range(from: usize, to: usize, len: usize) -> Result<(), CurveError> {
    if from <= to && to <= len {
        Ok(())
    } else {
        Err(CurveError::InvalidRange { from, to, len })
    }
}
