use crate::core::actions::sample_view::ports::compute_backend::BackendQuery;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const BAILOUT_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time test for one grid of sample points.
///
/// Cell `(col, row)` samples `(x_start + col * delta, y_start + row * delta)`,
/// with `y_start` taken from the backend's inverted vertical axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    x_start: f64,
    y_start: f64,
    delta: f64,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(query: &BackendQuery) -> Result<Self, MandelbrotError> {
        if query.iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if query.resolution == 0 {
            return Err(MandelbrotError::ZeroResolutionError);
        }

        if !(query.size > 0.0 && query.size.is_finite()) {
            return Err(MandelbrotError::InvalidSizeError { size: query.size });
        }

        Ok(Self {
            x_start: query.center_x - query.size / 2.0,
            y_start: query.negated_center_y - query.size / 2.0,
            delta: query.size / f64::from(query.resolution),
            max_iterations: query.iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn point(&self, col: usize, row: usize) -> Complex {
        Complex {
            real: self.x_start + self.delta * col as f64,
            imag: self.y_start + self.delta * row as f64,
        }
    }

    /// Iterations before the orbit of the sampled point leaves the bailout
    /// radius, reduced modulo the budget so bounded points read as zero.
    #[must_use]
    pub fn compute(&self, col: usize, row: usize) -> u32 {
        let c = self.point(col, row);
        let mut z = Complex::ZERO;
        let mut count = 0;

        while z.magnitude_squared() <= BAILOUT_RADIUS_SQUARED && count < self.max_iterations {
            z = z * z + c;
            count += 1;
        }

        count % self.max_iterations
    }
}
