//! wgpu Custom Render Callback für egui-Integration.

use super::curve_renderer::{CurveFrame, CurveRenderer};
use std::sync::{Arc, Mutex};

/// Inhalt eines Kurven-Viewports: zeichnet pro Frame in ein `CurveFrame`.
pub trait CurveScene: Send + 'static {
    /// Zeichnet alle Kurven des Frames.
    fn draw(&mut self, frame: &mut CurveFrame<'_>);
}

/// Custom wgpu Render Callback – kapselt die Renderer-Interaktion für egui
///
/// `prepare` zeichnet die Szene auf und lädt hoch, `paint` spielt ab.
pub struct CurveRenderCallback<S> {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<CurveRenderer>>,
    /// Geteilte Szene; Geometrie-Besitz liegt bei den Kurven darin
    pub scene: Arc<Mutex<S>>,
    /// Größe der Zeichenfläche in Display-Einheiten
    pub viewport_size: [f32; 2],
}

impl<S: CurveScene> eframe::egui_wgpu::CallbackTrait for CurveRenderCallback<S> {
    fn prepare(
        &self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return Vec::new();
        };
        let Ok(mut scene) = self.scene.lock() else {
            log::error!("Szenen-Lock fehlgeschlagen (Mutex vergiftet)");
            return Vec::new();
        };

        let mut frame = renderer.begin_frame(device, queue, self.viewport_size);
        scene.draw(&mut frame);
        frame.finish();
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        if let Ok(renderer) = self.renderer.lock() {
            renderer.paint(render_pass);
        } else {
            log::error!("Failed to lock renderer");
        }
    }
}
