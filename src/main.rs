//! Curve Viewer.
//!
//! Zeigt einige Demo-Slider auf einem 4:3-Spielfeld und deckt sie
//! fortlaufend auf. Render-Pfad und Slider-Stil lassen sich live umschalten.

use eframe::egui;
use eframe::egui_wgpu;
use glam::Vec2;
use playfield_curves::render::{
    CurveFrame, CurveRenderCallback, CurveRenderer, CurveScene, SpriteImages, SAMPLE_COUNT,
};
use playfield_curves::{
    Curve, CurveEnvironment, CurveOptions, CurveRenderContext, CurveType, HitObject,
    PlayfieldScale, SliderStyle,
};
use std::sync::{Arc, Mutex};

/// Dauer einer vollständigen Aufdeckung in Sekunden.
const REVEAL_SECONDS: f32 = 2.5;

/// Kombo-Farben der Demo-Slider.
const COMBO_COLORS: [[f32; 4]; 4] = [
    [0.95, 0.35, 0.35, 0.85],
    [0.35, 0.65, 0.95, 0.85],
    [0.45, 0.85, 0.45, 0.85],
    [0.95, 0.75, 0.30, 0.85],
];

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Curve Viewer"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: SAMPLE_COUNT as u16,
            // Tiefenpuffer für den Kegel-Pfad
            depth_buffer: 24,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Viewer",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(CurveViewerApp::new(render_state)))
            }),
        )
    }
}

/// Demo-Slider in Roh-Spielfeld-Koordinaten.
fn demo_hit_objects(scale: &PlayfieldScale) -> Vec<HitObject> {
    vec![
        HitObject::new(
            1,
            CurveType::Bezier,
            Vec2::new(64.0, 64.0),
            vec![
                Vec2::new(160.0, 24.0),
                Vec2::new(240.0, 150.0),
                Vec2::new(240.0, 150.0),
                Vec2::new(340.0, 90.0),
            ],
            380.0,
            scale,
        ),
        HitObject::new(
            2,
            CurveType::PerfectCircle,
            Vec2::new(96.0, 300.0),
            vec![Vec2::new(190.0, 220.0), Vec2::new(290.0, 300.0)],
            260.0,
            scale,
        ),
        HitObject::new(
            3,
            CurveType::Linear,
            Vec2::new(330.0, 220.0),
            vec![Vec2::new(450.0, 220.0), Vec2::new(450.0, 340.0)],
            230.0,
            scale,
        ),
        HitObject::new(
            4,
            CurveType::Catmull,
            Vec2::new(40.0, 180.0),
            vec![
                Vec2::new(100.0, 130.0),
                Vec2::new(170.0, 220.0),
                Vec2::new(240.0, 170.0),
            ],
            0.0,
            scale,
        ),
    ]
}

/// Szene des Viewports: Kurven, Init-Record und aktuelle Optionen.
struct DemoScene {
    environment: CurveEnvironment,
    options: CurveOptions,
    curves: Vec<Curve>,
    /// Aufgedeckter Anteil jeder Kurve (0..=1)
    reveal: f32,
}

impl DemoScene {
    /// Tastet alle Demo-Slider für einen neuen Viewport ab.
    fn rebuild(&mut self, viewport_size: [f32; 2]) {
        let scale = PlayfieldScale::for_viewport(viewport_size[0], viewport_size[1]);
        // Alte Kurven geben beim Drop ihre Geometrie frei
        self.curves = demo_hit_objects(&scale)
            .iter()
            .map(|hit_object| Curve::fitted(hit_object, true))
            .collect();
        log::info!(
            "{} Kurven für Viewport {:.0}x{:.0} abgetastet",
            self.curves.len(),
            viewport_size[0],
            viewport_size[1]
        );
    }

    /// Setzt einen neuen Kreisdurchmesser; alle Render-States werden ungültig.
    fn set_circle_diameter(&mut self, diameter: f32) {
        self.environment = CurveEnvironment::new(
            diameter,
            self.environment.border_color(),
            self.environment.advanced_supported(),
        );
        for curve in &mut self.curves {
            curve.discard_geometry();
        }
    }
}

impl CurveScene for DemoScene {
    fn draw(&mut self, frame: &mut CurveFrame<'_>) {
        let ctx = CurveRenderContext {
            environment: &self.environment,
            options: &self.options,
        };

        for (i, curve) in self.curves.iter_mut().enumerate() {
            let Some(len) = curve.points().map(|points| points.len()) else {
                continue;
            };
            let visible = ((len as f32 * self.reveal).round() as usize).min(len);
            let uploaded = curve
                .render_state()
                .map_or(0, |state| state.uploaded_point_count())
                .min(visible);

            if let Err(e) = curve.splice(&ctx, frame, uploaded, visible) {
                log::warn!("Splice für Objekt {} fehlgeschlagen: {}", curve.object_id(), e);
            }
            let color = COMBO_COLORS[i % COMBO_COLORS.len()];
            if let Err(e) = curve.draw_range(&ctx, frame, color, 0, visible) {
                log::warn!("Draw für Objekt {} fehlgeschlagen: {}", curve.object_id(), e);
            }
        }
    }
}

/// Haupt-Anwendungsstruktur
struct CurveViewerApp {
    renderer: Arc<Mutex<CurveRenderer>>,
    scene: Arc<Mutex<DemoScene>>,
    options: CurveOptions,
    playing: bool,
    reveal: f32,
    viewport_size: [f32; 2],
}

impl CurveViewerApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let options = CurveOptions::load_from_file(&CurveOptions::config_path());

        let capabilities = render_state.adapter.get_downlevel_capabilities();
        let environment = CurveEnvironment::init(
            options.circle_diameter,
            options.slider_border_color,
            &capabilities,
            options.slider_style,
        );

        let sprites = SpriteImages::load_or_generate(options.skin_directory.as_deref());
        let renderer = CurveRenderer::new(render_state, &sprites);

        Self {
            renderer: Arc::new(Mutex::new(renderer)),
            scene: Arc::new(Mutex::new(DemoScene {
                environment,
                options: options.clone(),
                curves: Vec::new(),
                reveal: 0.0,
            })),
            options,
            playing: true,
            reveal: 0.0,
            viewport_size: [0.0, 0.0],
        }
    }

    fn render_options_panel(&mut self, ctx: &egui::Context) {
        let before = self.options.clone();

        egui::SidePanel::left("curve_options")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Slider");
                ui.checkbox(
                    &mut self.options.force_fallback_sliders,
                    "Fallback erzwingen",
                );

                egui::ComboBox::from_label("Slider-Stil")
                    .selected_text(format!("{:?}", self.options.slider_style))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.options.slider_style,
                            SliderStyle::Peppy,
                            "Peppy",
                        );
                        ui.selectable_value(&mut self.options.slider_style, SliderStyle::Mm, "Mm");
                        ui.selectable_value(
                            &mut self.options.slider_style,
                            SliderStyle::Toon,
                            "Toon",
                        );
                    });

                ui.add(
                    egui::Slider::new(&mut self.options.circle_diameter, 24.0..=128.0)
                        .text("Kreisdurchmesser"),
                );

                ui.separator();
                ui.checkbox(&mut self.playing, "Aufdecken abspielen");
                ui.add(egui::Slider::new(&mut self.reveal, 0.0..=1.0).text("Aufgedeckt"));

                ui.separator();
                if ui.button("Optionen speichern").clicked() {
                    if let Err(e) = self.options.save_to_file(&CurveOptions::config_path()) {
                        log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
                    }
                }
            });

        if self.options == before {
            return;
        }
        let Ok(mut scene) = self.scene.lock() else {
            log::error!("Szenen-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        if self.options.circle_diameter != before.circle_diameter {
            scene.set_circle_diameter(self.options.circle_diameter);
        }
        scene.options = self.options.clone();
    }

    fn advance_reveal(&mut self, ctx: &egui::Context) {
        if !self.playing {
            return;
        }
        let dt = ctx.input(|i| i.stable_dt);
        self.reveal += dt / REVEAL_SECONDS;
        if self.reveal > 1.0 {
            self.reveal = 0.0;
        }
        ctx.request_repaint();
    }
}

impl eframe::App for CurveViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_options_panel(ctx);
        self.advance_reveal(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let viewport_size = [rect.width(), rect.height()];

                if let Ok(mut scene) = self.scene.lock() {
                    if viewport_size != self.viewport_size {
                        scene.rebuild(viewport_size);
                        self.viewport_size = viewport_size;
                    }
                    scene.reveal = self.reveal;
                } else {
                    log::error!("Szenen-Lock fehlgeschlagen (Mutex vergiftet)");
                }

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    CurveRenderCallback {
                        renderer: self.renderer.clone(),
                        scene: self.scene.clone(),
                        viewport_size,
                    },
                );
                ui.painter().add(callback);
            });
    }
}
