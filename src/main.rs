use anyhow::Result;
use std::ffi::CString;
use std::num::NonZeroU32;

use gl::types::*;
use glutin::{
    config::{ConfigTemplateBuilder, GlConfig},
    context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext},
    display::{GetGlDisplay, GlDisplay},
    prelude::{GlSurface, NotCurrentGlContext},
    surface::{Surface as GlutinSurface, SurfaceAttributesBuilder, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use skia_safe::{
    gpu::{self, backend_render_targets, gl::FramebufferInfo, SurfaceOrigin},
    Color, ColorType, Font, FontStyle, Paint, Rect, Surface,
};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::Window,
};

use loading_activity::{
    backdrop,
    config::Config,
    egui_integration::EguiIntegration,
    ui::{self, UiAction, UiState},
    LoadingActivityView,
};

/// Ensures DirectContext drops before Window (prevents AMD GPU segfaults).
struct Env {
    surface: Surface,
    gl_surface: GlutinSurface<WindowSurface>,
    gr_context: gpu::DirectContext,
    gl_context: PossiblyCurrentContext,
    window: Window,
    fb_info: FramebufferInfo,
    num_samples: usize,
    stencil_size: usize,
}

impl Drop for Env {
    fn drop(&mut self) {
        self.gr_context.release_resources_and_abandon();
    }
}

struct App {
    // Drop egui's GL resources while the context is still alive
    egui: EguiIntegration,
    env: Env,
    config: Config,
    view: LoadingActivityView,
    ui_state: UiState,
    caption_font: Font,
}

impl App {
    /// Views never restructure; a new configuration means a new view.
    fn rebuild_view(&mut self) {
        self.view = LoadingActivityView::new(self.view.frame(), self.config.overlay.clone());
        self.env.window.request_redraw();
    }

    fn apply_config_change(&mut self) {
        self.config.save();
        self.rebuild_view();
    }
}

fn create_surface(
    window: &Window,
    fb_info: FramebufferInfo,
    gr_context: &mut gpu::DirectContext,
    num_samples: usize,
    stencil_size: usize,
) -> Surface {
    let size = window.inner_size();
    let size = (
        size.width.try_into().expect("Could not convert width"),
        size.height.try_into().expect("Could not convert height"),
    );
    let backend_render_target =
        backend_render_targets::make_gl(size, num_samples, stencil_size, fb_info);

    gpu::surfaces::wrap_backend_render_target(
        gr_context,
        &backend_render_target,
        SurfaceOrigin::BottomLeft,
        ColorType::RGBA8888,
        None,
        None,
    )
    .expect("Could not create skia surface")
}

/// Stand-in for the host's own content, busy enough to show the blur.
fn draw_host_content(canvas: &skia_safe::Canvas, width: u32, height: u32, font: &Font) {
    canvas.clear(Color::from_argb(255, 245, 245, 240));

    let stripe = 48.0_f32;
    let colors = [
        Color::from_argb(255, 66, 133, 244),
        Color::from_argb(255, 219, 68, 55),
        Color::from_argb(255, 244, 180, 0),
        Color::from_argb(255, 15, 157, 88),
    ];
    let mut paint = Paint::default();
    paint.set_anti_alias(true);
    let mut x = 0.0;
    let mut i = 0;
    while x < width as f32 {
        paint.set_color(colors[i % colors.len()]);
        canvas.draw_rect(Rect::from_xywh(x, 0.0, stripe / 2.0, height as f32), &paint);
        x += stripe;
        i += 1;
    }

    let mut text_paint = Paint::default();
    text_paint.set_color(Color::BLACK);
    text_paint.set_anti_alias(true);
    let mut y = 40.0;
    while y < height as f32 {
        canvas.draw_str(
            "The quick brown fox jumps over the lazy dog",
            (16.0, y),
            font,
            &text_paint,
        );
        y += 36.0;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {}

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let response = self.egui.handle_event(&self.env.window, &event);
        if response.repaint {
            self.env.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                self.env.surface = create_surface(
                    &self.env.window,
                    self.env.fb_info,
                    &mut self.env.gr_context,
                    self.env.num_samples,
                    self.env.stencil_size,
                );
                let (width, height): (u32, u32) = physical_size.into();
                if let (Some(w), Some(h)) =
                    (NonZeroU32::new(width.max(1)), NonZeroU32::new(height.max(1)))
                {
                    self.env.gl_surface.resize(&self.env.gl_context, w, h);
                }
                self.env.window.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if response.consumed || event.state != ElementState::Pressed {
                    return;
                }
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    Key::Named(NamedKey::Space) => {
                        self.ui_state.show_overlay = !self.ui_state.show_overlay;
                        self.env.window.request_redraw();
                    }
                    Key::Character(c) if c.as_str() == "q" => event_loop.exit(),
                    Key::Character(c) if c.as_str() == "a" => {
                        self.config.overlay.axis = self.config.overlay.axis.toggled();
                        self.apply_config_change();
                    }
                    Key::Character(c) if c.as_str() == "s" => {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                        self.env.window.request_redraw();
                    }
                    Key::Character(c) if c.as_str() == "+" || c.as_str() == "=" => {
                        let opacity = &mut self.config.overlay.overlay_opacity;
                        *opacity = (*opacity + 0.1).min(1.0);
                        self.apply_config_change();
                    }
                    Key::Character(c) if c.as_str() == "-" => {
                        let opacity = &mut self.config.overlay.overlay_opacity;
                        *opacity = (*opacity - 0.1).max(0.0);
                        self.apply_config_change();
                    }
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                let size = self.env.window.inner_size();
                if size.width == 0 || size.height == 0 {
                    return;
                }

                let Self {
                    egui,
                    env,
                    config,
                    view,
                    ui_state,
                    ..
                } = self;
                let actions = egui.run(&env.window, |ctx| ui::build_ui(ctx, ui_state, view, config));

                let canvas = self.env.surface.canvas();
                draw_host_content(canvas, size.width, size.height, &self.caption_font);
                if let Some(layout) = &self.ui_state.overlay_layout {
                    if self.config.backdrop_blur {
                        backdrop::blur_panel(
                            canvas,
                            layout,
                            self.view.panel().style(),
                            self.egui.pixels_per_point(),
                        );
                    }
                }
                self.env.gr_context.flush_and_submit();

                self.egui.paint(&self.env.window);
                // egui_glow leaves GL state skia doesn't know about
                self.env.gr_context.reset(None);

                if let Err(e) = self.env.gl_surface.swap_buffers(&self.env.gl_context) {
                    log::error!("Failed to swap buffers: {}", e);
                }

                for action in actions {
                    match action {
                        UiAction::ConfigChanged => self.rebuild_view(),
                    }
                }

                if self.egui.wants_repaint() {
                    self.env.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load();
    log::info!("Overlay message: {:?}", config.overlay.message);

    let el = EventLoop::new()?;

    let window_attributes = Window::default_attributes()
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .with_resizable(true)
        .with_title("loading-activity");

    let template = ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .with_transparency(true);

    let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
    let (window, gl_config) = display_builder
        .build(&el, template, |configs| {
            configs
                .reduce(|accum, config| {
                    let transparency_check = config.supports_transparency().unwrap_or(false)
                        & !accum.supports_transparency().unwrap_or(false);
                    if transparency_check || config.num_samples() < accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("No GL configs available")
        })
        .map_err(|e| anyhow::anyhow!("Failed to build display: {}", e))?;
    let window = window.ok_or_else(|| anyhow::anyhow!("Could not create window with OpenGL context"))?;
    let raw_window_handle = window.window_handle()?.as_raw();

    let context_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));
    let fallback_context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(None))
        .build(Some(raw_window_handle));

    let not_current_gl_context = unsafe {
        match gl_config
            .display()
            .create_context(&gl_config, &context_attributes)
        {
            Ok(context) => context,
            Err(_) => gl_config
                .display()
                .create_context(&gl_config, &fallback_context_attributes)?,
        }
    };

    let (width, height): (u32, u32) = window.inner_size().into();
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        NonZeroU32::new(width.max(1)).expect("width is non-zero"),
        NonZeroU32::new(height.max(1)).expect("height is non-zero"),
    );

    let gl_surface = unsafe {
        gl_config
            .display()
            .create_window_surface(&gl_config, &attrs)?
    };

    let gl_context = not_current_gl_context.make_current(&gl_surface)?;

    gl::load_with(|s| {
        CString::new(s)
            .map(|s| gl_config.display().get_proc_address(s.as_c_str()))
            .unwrap_or(std::ptr::null())
    });
    let interface = skia_safe::gpu::gl::Interface::new_load_with(|name| {
        if name == "eglGetCurrentDisplay" {
            return std::ptr::null();
        }
        CString::new(name)
            .map(|s| gl_config.display().get_proc_address(s.as_c_str()))
            .unwrap_or(std::ptr::null())
    })
    .ok_or_else(|| anyhow::anyhow!("Could not create GL interface"))?;

    let mut gr_context = skia_safe::gpu::direct_contexts::make_gl(interface, None)
        .ok_or_else(|| anyhow::anyhow!("Could not create direct context"))?;

    let fb_info = {
        let mut fboid: GLint = 0;
        unsafe { gl::GetIntegerv(gl::FRAMEBUFFER_BINDING, &mut fboid) };
        FramebufferInfo {
            fboid: fboid.try_into()?,
            format: skia_safe::gpu::gl::Format::RGBA8.into(),
            ..Default::default()
        }
    };

    let num_samples = gl_config.num_samples() as usize;
    let stencil_size = gl_config.stencil_size() as usize;

    let surface = create_surface(&window, fb_info, &mut gr_context, num_samples, stencil_size);

    let font_mgr = skia_safe::FontMgr::default();
    let typeface = font_mgr
        .match_family_style("DejaVu Sans", FontStyle::default())
        .or_else(|| font_mgr.match_family_style("sans-serif", FontStyle::default()))
        .ok_or_else(|| anyhow::anyhow!("Could not find any sans-serif font"))?;
    let caption_font = Font::from_typeface(typeface, 22.0);

    let egui = EguiIntegration::new(&window, &gl_context)?;

    // Real frame arrives with the first egui pass
    let frame = egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(config.window_width as f32, config.window_height as f32),
    );
    let view = LoadingActivityView::new(frame, config.overlay.clone());

    let env = Env {
        surface,
        gl_surface,
        gr_context,
        gl_context,
        window,
        fb_info,
        num_samples,
        stencil_size,
    };

    let mut app = App {
        egui,
        env,
        config,
        view,
        ui_state: UiState {
            show_overlay: true,
            ..Default::default()
        },
        caption_font,
    };

    app.env.window.request_redraw();
    el.run_app(&mut app)?;

    Ok(())
}
