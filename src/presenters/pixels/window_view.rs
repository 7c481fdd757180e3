use std::collections::VecDeque;
use std::fmt::Display;
use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use tracing::debug;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder, WindowId};

use crate::adapters::pixel_format::downsample_rgb_to_rgba;
use crate::controllers::interactive::input_event::InputEvent;
use crate::controllers::interactive::ports::render_surface::{SurfaceError, SurfaceHandle};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport_state::ViewportState;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::presenters::pixels::event_mapping::{map_button, map_key_event};
use crate::presenters::pixels::geometry::{display_edge, display_to_grid};

pub(super) fn window_error(err: impl Display) -> SurfaceError {
    SurfaceError::Window(err.to_string())
}

#[derive(Debug, Clone, Copy)]
struct ViewStatus {
    state: ViewportState,
    iterations: u32,
}

/// One open window: its pixels framebuffer, its egui overlay and the events
/// it has queued for the session.
pub(super) struct WindowView {
    handle: SurfaceHandle,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
    surface_size: (u32, u32),
    resolution: u32,
    display_edge: u32,
    cursor: Option<PhysicalPosition<f64>>,
    subscribed: bool,
    closed: bool,
    status: Option<ViewStatus>,
    message: Option<String>,
    pending: VecDeque<InputEvent>,
}

impl WindowView {
    pub(super) fn open(
        event_loop: &EventLoop<()>,
        handle: SurfaceHandle,
        grid: &IterationGrid,
        colour_map: &dyn MandelbrotColourMap,
    ) -> Result<Self, SurfaceError> {
        let resolution = grid.resolution();
        let edge = display_edge(resolution);

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(format!("Mandelbrot Explorer [{handle}]"))
                .with_inner_size(LogicalSize::new(edge, edge))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(event_loop)
                .map_err(window_error)?,
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(edge, edge, surface_texture).map_err(window_error)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let mut view = Self {
            handle,
            window,
            pixels,
            egui_ctx,
            egui_state,
            egui_renderer,
            surface_size: (size.width, size.height),
            resolution,
            display_edge: edge,
            cursor: None,
            subscribed: false,
            closed: false,
            status: None,
            message: None,
            pending: VecDeque::new(),
        };

        view.draw(grid, colour_map)?;

        Ok(view)
    }

    pub(super) fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub(super) fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub(super) fn is_closed(&self) -> bool {
        self.closed
    }

    pub(super) fn next_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    pub(super) fn set_status(&mut self, state: ViewportState, iterations: u32) {
        self.status = Some(ViewStatus { state, iterations });
        self.message = None;
        self.window.request_redraw();
    }

    pub(super) fn set_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.window.request_redraw();
    }

    /// Colours `grid` into the framebuffer, rescaled to its own value range.
    pub(super) fn draw(
        &mut self,
        grid: &IterationGrid,
        colour_map: &dyn MandelbrotColourMap,
    ) -> Result<(), SurfaceError> {
        if grid.resolution() != self.resolution {
            return Err(SurfaceError::ShapeChanged {
                handle: self.handle,
                expected: self.resolution,
                actual: grid.resolution(),
            });
        }

        let buffer = generate_pixel_buffer(grid, colour_map)?;
        downsample_rgb_to_rgba(&buffer, self.display_edge, self.pixels.frame_mut())
            .map_err(window_error)?;

        self.window.request_redraw();

        Ok(())
    }

    pub(super) fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), SurfaceError> {
        let response = self.egui_state.on_window_event(&self.window, event);

        if response.repaint {
            self.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => self.closed = true,
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.pixels
                        .resize_surface(size.width, size.height)
                        .map_err(window_error)?;
                    self.surface_size = (size.width, size.height);
                }
                self.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = Some(*position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } if !response.consumed => self.on_click(*button),
            WindowEvent::KeyboardInput { event, .. } if !response.consumed => {
                if let Some(code) = map_key_event(event) {
                    self.queue(InputEvent::key(code));
                }
            }
            WindowEvent::RedrawRequested => self.render()?,
            _ => {}
        }

        Ok(())
    }

    fn on_click(&mut self, button: MouseButton) {
        let (Some(button), Some(cursor)) = (map_button(button), self.cursor) else {
            return;
        };

        match self
            .pixels
            .window_pos_to_pixel((cursor.x as f32, cursor.y as f32))
        {
            Ok((col, row)) => {
                let (px, py) = display_to_grid(col, row, self.display_edge, self.resolution);
                self.queue(InputEvent::pointer(button, px, py));
            }
            Err(_) => debug!(handle = %self.handle, "click outside the image ignored"),
        }
    }

    fn queue(&mut self, event: InputEvent) {
        if self.subscribed {
            self.pending.push_back(event);
        }
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        if self.surface_size.0 == 0 || self.surface_size.1 == 0 {
            return Ok(());
        }

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let status = self.status;
        let message = self.message.clone();

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    if let Some(ViewStatus { state, iterations }) = status {
                        ui.label(format!(
                            "Centre: {:.16}, {:.16}",
                            state.center_x(),
                            state.center_y()
                        ));
                        ui.label(format!("Size: {:e}", state.size()));
                        ui.label(format!(
                            "Resolution: {0}x{0}",
                            state.resolution()
                        ));
                        ui.label(format!("Iterations: {iterations}"));
                        ui.label(format!(
                            "Multiplier: {:.2}",
                            state.iteration_multiplier()
                        ));
                    }
                    if let Some(message) = &message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);

        let clipped_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_size.0, self.surface_size.1],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels
            .render_with(|encoder, render_target, context| {
                // fractal first, overlay on top
                context.scaling_renderer.render(encoder, render_target);

                for (id, delta) in &textures_delta.set {
                    egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
                }

                egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                {
                    let mut render_pass =
                        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("egui"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: render_target,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Load,
                                    store: wgpu::StoreOp::Store,
                                },
                            })],
                            depth_stencil_attachment: None,
                            ..Default::default()
                        });

                    egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
                }

                for id in &textures_delta.free {
                    egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(window_error)
    }
}
