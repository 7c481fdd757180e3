use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::input_event::InputEvent;
use crate::controllers::interactive::ports::render_surface::{RenderSurface, SurfaceHandle};
use crate::controllers::interactive::transition::{RedrawAction, transition};
use crate::core::actions::sample_view::ports::compute_backend::ComputeBackend;
use crate::core::actions::sample_view::sample_view::sample_view;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::sample_request::SampleRequest;
use crate::core::data::viewport_state::{DEFAULT_SIZE, ViewportState};
use crate::core::util::coordinate_transform::iterations_for_current_zoom;

/// Pause after every in-place update before the next event is taken.
pub const POST_UPDATE_PAUSE: Duration = Duration::from_millis(5);

/// Runs one interactive session against a backend and a surface.
///
/// The controller owns the only [`ViewportState`] and the only open surface
/// handle. Events are handled one at a time, each to completion.
pub struct SessionController<'a, B: ComputeBackend + ?Sized, S: RenderSurface> {
    backend: &'a mut B,
    surface: &'a mut S,
    state: ViewportState,
    handle: Option<SurfaceHandle>,
    pause: Duration,
}

impl<'a, B: ComputeBackend + ?Sized, S: RenderSurface> SessionController<'a, B, S> {
    pub fn new(backend: &'a mut B, surface: &'a mut S) -> Self {
        Self {
            backend,
            surface,
            state: ViewportState::default(),
            handle: None,
            pause: POST_UPDATE_PAUSE,
        }
    }

    #[must_use]
    pub fn with_pause(self, pause: Duration) -> Self {
        Self { pause, ..self }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn handle(&self) -> Option<SurfaceHandle> {
        self.handle
    }

    /// Resets the session to `initial`, draws the first frame and handles
    /// events until the user closes the surface.
    pub fn start(&mut self, initial: ViewportState) -> Result<(), SessionError> {
        self.open(initial)?;
        self.run()
    }

    /// Draws the first frame of a session without entering the event loop.
    ///
    /// The first frame samples with the state's iteration base as-is.
    pub fn open(&mut self, initial: ViewportState) -> Result<(), SessionError> {
        self.close_surface()?;
        self.state = initial;

        info!(
            center_x = initial.center_x(),
            center_y = initial.center_y(),
            size = initial.size(),
            resolution = initial.resolution(),
            iteration_base = initial.iteration_base(),
            "session started"
        );

        let request = SampleRequest::for_viewport(&initial, initial.iteration_base())?;
        let grid = sample_view(&mut *self.backend, &request)?;

        self.show(grid, initial.iteration_base())
    }

    /// Applies one event: pure transition first, then sampling and redraw.
    ///
    /// A request that fails validation leaves the state and the surface as
    /// they were.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<RedrawAction, SessionError> {
        let handle = self.handle.ok_or(SessionError::NotStarted)?;
        let (next, action) = transition(self.state, event);

        match action {
            RedrawAction::UpdateInPlace => {
                let iterations = iterations_for_current_zoom(&next, DEFAULT_SIZE);
                let request = SampleRequest::for_viewport(&next, iterations)?;
                let grid = sample_view(&mut *self.backend, &request)?;

                self.surface.update(handle, &grid)?;
                self.state = next;
                self.surface.annotate(handle, &self.state, iterations);

                thread::sleep(self.pause);
            }
            RedrawAction::Rebuild => self.restart_with_resolution(next)?,
        }

        debug!(
            %event,
            ?action,
            center_x = self.state.center_x(),
            center_y = self.state.center_y(),
            size = self.state.size(),
            resolution = self.state.resolution(),
            multiplier = self.state.iteration_multiplier(),
            "transition applied"
        );

        Ok(action)
    }

    /// Replaces the open surface with a new one showing `state`.
    ///
    /// The new frame is sampled before the old surface is closed, so a failed
    /// sample leaves the old surface open.
    pub fn restart_with_resolution(&mut self, state: ViewportState) -> Result<(), SessionError> {
        let iterations = iterations_for_current_zoom(&state, DEFAULT_SIZE);
        let request = SampleRequest::for_viewport(&state, iterations)?;
        let grid = sample_view(&mut *self.backend, &request)?;

        self.close_surface()?;
        self.state = state;

        info!(resolution = state.resolution(), "rebuilding surface");

        self.show(grid, iterations)
    }

    fn show(&mut self, grid: IterationGrid, iterations: u32) -> Result<(), SessionError> {
        let handle = self.surface.display(&grid)?;
        self.handle = Some(handle);

        self.surface.subscribe(handle)?;
        self.surface.annotate(handle, &self.state, iterations);

        Ok(())
    }

    fn run(&mut self) -> Result<(), SessionError> {
        while let Some(handle) = self.handle {
            let Some(event) = self.surface.wait_event(handle)? else {
                self.handle = None;
                break;
            };

            match self.handle_event(event) {
                Ok(_) => {}
                Err(SessionError::Validation(err)) => {
                    warn!(%event, %err, "view rejected, state unchanged");
                    self.surface.notify(handle, &err.to_string());
                }
                Err(err) => {
                    if let Err(close_err) = self.close_surface() {
                        warn!(%close_err, "could not close surface after session failure");
                    }
                    return Err(err);
                }
            }
        }

        info!("session ended");

        Ok(())
    }

    fn close_surface(&mut self) -> Result<(), SessionError> {
        if let Some(handle) = self.handle.take() {
            self.surface.close(handle)?;
        }

        Ok(())
    }
}
