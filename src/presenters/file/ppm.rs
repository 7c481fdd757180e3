use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::controllers::interactive::input_event::InputEvent;
use crate::controllers::interactive::ports::render_surface::{
    RenderSurface, SurfaceError, SurfaceHandle,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport_state::ViewportState;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Clone, Copy)]
struct PpmView {
    resolution: u32,
    subscribed: bool,
}

/// Headless surface: every displayed or updated frame is written to
/// `<output_dir>/view-<handle>.ppm`.
///
/// There is no input device, so the first event wait reports the surface
/// closed and a session ends after its first frame.
pub struct PpmSurface {
    output_dir: PathBuf,
    colour_map: Box<dyn MandelbrotColourMap>,
    next_handle: u64,
    views: BTreeMap<SurfaceHandle, PpmView>,
}

impl PpmSurface {
    pub fn new(output_dir: impl Into<PathBuf>, colour_map: Box<dyn MandelbrotColourMap>) -> Self {
        Self {
            output_dir: output_dir.into(),
            colour_map,
            next_handle: 0,
            views: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn frame_path(&self, handle: SurfaceHandle) -> PathBuf {
        self.output_dir.join(format!("view-{handle}.ppm"))
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn view(&self, handle: SurfaceHandle) -> Result<PpmView, SurfaceError> {
        self.views
            .get(&handle)
            .copied()
            .ok_or(SurfaceError::NotOpen(handle))
    }

    fn write_frame(&self, handle: SurfaceHandle, grid: &IterationGrid) -> Result<(), SurfaceError> {
        let buffer = generate_pixel_buffer(grid, &*self.colour_map)?;
        let path = self.frame_path(handle);

        write_ppm(&buffer, &path).map_err(|source| SurfaceError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), resolution = grid.resolution(), "frame written");

        Ok(())
    }
}

impl RenderSurface for PpmSurface {
    fn display(&mut self, grid: &IterationGrid) -> Result<SurfaceHandle, SurfaceError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| SurfaceError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);

        self.write_frame(handle, grid)?;
        self.views.insert(
            handle,
            PpmView {
                resolution: grid.resolution(),
                subscribed: false,
            },
        );

        Ok(handle)
    }

    fn update(&mut self, handle: SurfaceHandle, grid: &IterationGrid) -> Result<(), SurfaceError> {
        let view = self.view(handle)?;

        if view.resolution != grid.resolution() {
            return Err(SurfaceError::ShapeChanged {
                handle,
                expected: view.resolution,
                actual: grid.resolution(),
            });
        }

        self.write_frame(handle, grid)
    }

    fn close(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        self.views
            .remove(&handle)
            .map(|_| ())
            .ok_or(SurfaceError::NotOpen(handle))
    }

    fn subscribe(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError> {
        let view = self
            .views
            .get_mut(&handle)
            .ok_or(SurfaceError::NotOpen(handle))?;
        view.subscribed = true;

        Ok(())
    }

    fn wait_event(&mut self, handle: SurfaceHandle) -> Result<Option<InputEvent>, SurfaceError> {
        let view = self.view(handle)?;

        if view.subscribed {
            self.views.remove(&handle);
        }

        Ok(None)
    }

    fn annotate(&mut self, handle: SurfaceHandle, state: &ViewportState, iterations: u32) {
        info!(
            %handle,
            center_x = state.center_x(),
            center_y = state.center_y(),
            size = state.size(),
            resolution = state.resolution(),
            iterations,
            multiplier = state.iteration_multiplier(),
            colour_map = self.colour_map.display_name(),
            "view"
        );
    }

    fn notify(&mut self, handle: SurfaceHandle, message: &str) {
        warn!(%handle, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

    fn surface(dir: &Path) -> PpmSurface {
        PpmSurface::new(
            dir.join("frames"),
            mandelbrot_colour_map_factory(MandelbrotColourMapKinds::FireGradient),
        )
    }

    fn grid(resolution: u32) -> IterationGrid {
        let cells = (0..resolution * resolution).collect();
        IterationGrid::from_cells(resolution, cells).unwrap()
    }

    #[test]
    fn test_display_writes_frame_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface(dir.path());

        let handle = surface.display(&grid(4)).unwrap();

        let bytes = std::fs::read(surface.frame_path(handle)).unwrap();
        assert!(bytes.starts_with(b"P6\n4 4\n255\n"));
        assert_eq!(bytes.len(), "P6\n4 4\n255\n".len() + 4 * 4 * 3);
    }

    #[test]
    fn test_each_display_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface(dir.path());

        let first = surface.display(&grid(2)).unwrap();
        let second = surface.display(&grid(2)).unwrap();

        assert_ne!(first, second);
        assert!(surface.frame_path(first).ends_with("view-1.ppm"));
        assert!(surface.frame_path(second).exists());
    }

    #[test]
    fn test_update_rejects_other_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface(dir.path());
        let handle = surface.display(&grid(4)).unwrap();

        surface.update(handle, &grid(4)).unwrap();
        let result = surface.update(handle, &grid(8));

        assert!(matches!(
            result,
            Err(SurfaceError::ShapeChanged {
                expected: 4,
                actual: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_closed_surface_rejects_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface(dir.path());
        let handle = surface.display(&grid(2)).unwrap();

        surface.close(handle).unwrap();

        assert!(matches!(surface.close(handle), Err(SurfaceError::NotOpen(_))));
        assert!(matches!(
            surface.update(handle, &grid(2)),
            Err(SurfaceError::NotOpen(_))
        ));
    }

    #[test]
    fn test_subscribed_surface_closes_on_first_wait() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface(dir.path());
        let handle = surface.display(&grid(2)).unwrap();
        surface.subscribe(handle).unwrap();

        assert!(surface.wait_event(handle).unwrap().is_none());
        assert!(matches!(
            surface.wait_event(handle),
            Err(SurfaceError::NotOpen(_))
        ));
    }
}
