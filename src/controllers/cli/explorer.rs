use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::controllers::cli::repl::{CommandHandler, TourOutcome};
use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::ports::render_surface::RenderSurface;
use crate::controllers::interactive::SessionController;
use crate::core::actions::sample_view::ports::compute_backend::ComputeBackend;
use crate::core::data::sample_point::SamplePoint;
use crate::core::data::viewport_state::ViewportState;

/// Runs REPL commands as interactive sessions on one backend and surface.
pub struct Explorer<B: ComputeBackend, S: RenderSurface> {
    backend: B,
    surface: S,
    points: Vec<SamplePoint>,
    rng: StdRng,
}

impl<B: ComputeBackend, S: RenderSurface> Explorer<B, S> {
    pub fn new(backend: B, surface: S, points: Vec<SamplePoint>, rng: StdRng) -> Self {
        Self {
            backend,
            surface,
            points,
            rng,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Picks a point of interest uniformly at random.
    pub fn choose_point(&mut self) -> Option<SamplePoint> {
        if self.points.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.points.len());
        Some(self.points[index])
    }

    fn session(&mut self, initial: ViewportState) -> Result<(), SessionError> {
        SessionController::new(&mut self.backend, &mut self.surface).start(initial)
    }
}

impl<B: ComputeBackend, S: RenderSurface> CommandHandler for Explorer<B, S> {
    fn interactive(&mut self) -> Result<(), SessionError> {
        self.session(ViewportState::default())
    }

    fn tour(&mut self) -> Result<TourOutcome, SessionError> {
        let Some(point) = self.choose_point() else {
            return Ok(TourOutcome::NoPoints);
        };

        info!(
            center_x = point.center_x(),
            center_y = point.center_y(),
            size = point.size(),
            "touring point of interest"
        );

        self.session(ViewportState::from(&point))?;

        Ok(TourOutcome::Explored)
    }
}
