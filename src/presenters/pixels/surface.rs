use std::collections::BTreeMap;
use std::time::Duration;

use tracing::info;
use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::controllers::interactive::input_event::InputEvent;
use crate::controllers::interactive::ports::render_surface::{
    RenderSurface, SurfaceError, SurfaceHandle,
};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport_state::ViewportState;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::presenters::pixels::window_view::{WindowView, window_error};

/// How long one pump of the event loop waits for window events.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Window-backed surface. One winit event loop is shared by every window
/// and is pumped only while the session waits for input.
pub struct PixelsSurface {
    event_loop: EventLoop<()>,
    colour_map: Box<dyn MandelbrotColourMap>,
    next_handle: u64,
    views: BTreeMap<SurfaceHandle, WindowView>,
}

impl PixelsSurface {
    pub fn new(colour_map: Box<dyn MandelbrotColourMap>) -> Result<Self, SurfaceError> {
        let event_loop = EventLoop::new().map_err(window_error)?;

        Ok(Self {
            event_loop,
            colour_map,
            next_handle: 0,
            views: BTreeMap::new(),
        })
    }

    fn view_mut(&mut self, handle: SurfaceHandle) -> Result<&mut WindowView, SurfaceError> {
        self.views
            .get_mut(&handle)
            .ok_or(SurfaceError::NotOpen(handle))
    }

    fn pump(&mut self, timeout: Duration) -> Result<(), SurfaceError> {
        let Self {
            event_loop, views, ..
        } = self;
        let mut failure = None;

        let status = event_loop.pump_events(Some(timeout), |event, _| {
            if let Event::WindowEvent { window_id, event } = event {
                let view = views.values_mut().find(|view| view.window_id() == window_id);

                if let Some(view) = view {
                    if let Err(err) = view.handle_window_event(&event) {
                        failure.get_or_insert(err);
                    }
                }
            }
        });

        if let PumpStatus::Exit(code) = status {
            return Err(SurfaceError::Window(format!(
                "event loop exited with status {code}"
            )));
        }

        failure.map_or(Ok(()), Err)
    }
}

impl RenderSurface for PixelsSurface {
    fn display(&mut self, grid: &IterationGrid) -> Result<SurfaceHandle, SurfaceError> {
        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);

        let view = WindowView::open(&self.event_loop, handle, grid, &*self.colour_map)?;
        self.views.insert(handle, view);

        info!(%handle, resolution = grid.resolution(), "window opened");

        self.pump(Duration::ZERO)?;

        Ok(handle)
    }

    fn update(&mut self, handle: SurfaceHandle, grid: &IterationGrid) -> Result<(), SurfaceError> {
        let view = self
            .views
            .get_mut(&handle)
            .ok_or(SurfaceError::NotOpen(handle))?;

        view.draw(grid, &*self.colour_map)?;

        self.pump(Duration::ZERO)
    }

    fn close(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        self.views
            .remove(&handle)
            .ok_or(SurfaceError::NotOpen(handle))?;

        info!(%handle, "window closed");

        self.pump(Duration::ZERO)
    }

    fn subscribe(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        self.view_mut(handle)?.subscribe();

        Ok(())
    }

    fn wait_event(&mut self, handle: SurfaceHandle) -> Result<Option<InputEvent>, SurfaceError> {
        loop {
            let view = self.view_mut(handle)?;

            if let Some(event) = view.next_event() {
                return Ok(Some(event));
            }

            if view.is_closed() {
                self.views.remove(&handle);
                info!(%handle, "window closed by user");
                return Ok(None);
            }

            self.pump(POLL_INTERVAL)?;
        }
    }

    fn annotate(&mut self, handle: SurfaceHandle, state: &ViewportState, iterations: u32) {
        if let Ok(view) = self.view_mut(handle) {
            view.set_status(*state, iterations);
        }
    }

    fn notify(&mut self, handle: SurfaceHandle, message: &str) {
        if let Ok(view) = self.view_mut(handle) {
            view.set_message(message);
        }
    }
}
