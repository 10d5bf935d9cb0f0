use anyhow::Result;
use egui_winit::EventResponse;
use glutin::display::{GetGlDisplay, GlDisplay};
use std::sync::Arc;
use winit::window::Window;

/// egui on top of a skia-drawn GL framebuffer: context, winit input state and glow painter.
pub struct EguiIntegration {
    pub ctx: egui::Context,
    winit_state: egui_winit::State,
    painter: egui_glow::Painter,
    shapes: Vec<egui::epaint::ClippedShape>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
    repaint_requested: bool,
}

impl EguiIntegration {
    /// The GL context must be current and the GL loader initialized.
    pub fn new(window: &Window, gl_context: &glutin::context::PossiblyCurrentContext) -> Result<Self> {
        let display = gl_context.display();
        let glow_context = unsafe {
            glow::Context::from_loader_function(|s| {
                let s = std::ffi::CString::new(s)
                    .expect("failed to construct CString for GL function pointer");
                display.get_proc_address(s.as_c_str()).cast()
            })
        };

        let painter = egui_glow::Painter::new(Arc::new(glow_context), "", None, false)?;

        let ctx = egui::Context::default();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            None,
            None,
            None,
        );

        Ok(Self {
            ctx,
            winit_state,
            painter,
            shapes: Default::default(),
            textures_delta: Default::default(),
            pixels_per_point: window.scale_factor() as f32,
            repaint_requested: true,
        })
    }

    /// Feed a winit event to egui.
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> EventResponse {
        self.winit_state.on_window_event(window, event)
    }

    /// Run one egui pass. Shapes are kept until [`paint`](Self::paint).
    pub fn run<R>(&mut self, window: &Window, build: impl FnOnce(&egui::Context) -> R) -> R {
        let raw_input = self.winit_state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);
        let result = build(&self.ctx);

        // end_pass() clears the input state
        self.pixels_per_point = self.ctx.input(|i| i.pixels_per_point);
        let output = self.ctx.end_pass();
        self.winit_state
            .handle_platform_output(window, output.platform_output);
        self.repaint_requested = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        self.shapes = output.shapes;
        self.textures_delta = output.textures_delta;
        result
    }

    pub fn pixels_per_point(&self) -> f32 {
        self.pixels_per_point
    }

    /// True when the last pass asked for an immediate repaint (the spinner does every frame).
    pub fn wants_repaint(&self) -> bool {
        self.repaint_requested
    }

    /// Paint the last pass over whatever is in the current framebuffer.
    pub fn paint(&mut self, window: &Window) {
        let shapes = std::mem::take(&mut self.shapes);
        let textures_delta = std::mem::take(&mut self.textures_delta);
        let meshes = self.ctx.tessellate(shapes, self.pixels_per_point);

        let size = window.inner_size();
        self.painter.paint_and_update_textures(
            [size.width, size.height],
            self.pixels_per_point,
            &meshes,
            &textures_delta,
        );
    }
}

impl Drop for EguiIntegration {
    fn drop(&mut self) {
        self.painter.destroy();
    }
}
