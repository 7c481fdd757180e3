//! Hand-written mock ports shared by controller tests.

use std::collections::VecDeque;

use crate::controllers::interactive::input_event::InputEvent;
use crate::controllers::interactive::ports::render_surface::{
    RenderSurface, SurfaceError, SurfaceHandle,
};
use crate::core::actions::sample_view::ports::compute_backend::{
    BackendError, BackendGrid, BackendQuery, ComputeBackend,
};
use crate::core::data::iteration_grid::IterationGrid;

/// Answers every query with a uniform grid and records what it was asked.
#[derive(Debug, Default)]
pub struct MockBackend {
    queries: Vec<BackendQuery>,
    released: usize,
    fail_after: Option<usize>,
}

impl MockBackend {
    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::default()
        }
    }

    pub fn queries(&self) -> &[BackendQuery] {
        &self.queries
    }

    pub fn released(&self) -> usize {
        self.released
    }
}

impl ComputeBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
        if self.fail_after.is_some_and(|limit| self.queries.len() >= limit) {
            return Err(BackendError::Unavailable {
                name: "mock".to_string(),
                reason: "scripted failure".to_string(),
            });
        }

        self.queries.push(*query);
        let cells = (query.resolution as usize).pow(2);

        Ok(BackendGrid::new(query.resolution, vec![7; cells]))
    }

    fn release(&mut self, _grid: BackendGrid) {
        self.released += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Display(SurfaceHandle, u32),
    Update(SurfaceHandle, u32),
    Close(SurfaceHandle),
    Subscribe(SurfaceHandle),
}

/// Replays a fixed list of events, then reports itself closed.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    events: VecDeque<InputEvent>,
    calls: Vec<SurfaceCall>,
    notices: Vec<String>,
    next_handle: u64,
    open: Option<SurfaceHandle>,
}

impl ScriptedSurface {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn check_open(&self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        if self.open == Some(handle) {
            Ok(())
        } else {
            Err(SurfaceError::NotOpen(handle))
        }
    }
}

impl RenderSurface for ScriptedSurface {
    fn display(&mut self, grid: &IterationGrid) -> Result<SurfaceHandle, SurfaceError> {
        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.open = Some(handle);
        self.calls.push(SurfaceCall::Display(handle, grid.resolution()));
        Ok(handle)
    }

    fn update(&mut self, handle: SurfaceHandle, grid: &IterationGrid) -> Result<(), SurfaceError> {
        self.check_open(handle)?;
        self.calls.push(SurfaceCall::Update(handle, grid.resolution()));
        Ok(())
    }

    fn close(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        self.check_open(handle)?;
        self.open = None;
        self.calls.push(SurfaceCall::Close(handle));
        Ok(())
    }

    fn subscribe(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        self.check_open(handle)?;
        self.calls.push(SurfaceCall::Subscribe(handle));
        Ok(())
    }

    fn wait_event(&mut self, handle: SurfaceHandle) -> Result<Option<InputEvent>, SurfaceError> {
        self.check_open(handle)?;
        Ok(self.events.pop_front())
    }

    fn notify(&mut self, _handle: SurfaceHandle, message: &str) {
        self.notices.push(message.to_string());
    }
}
