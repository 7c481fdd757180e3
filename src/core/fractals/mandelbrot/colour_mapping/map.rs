use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap for Box<dyn MandelbrotColourMap> {
    fn map(&self, t: f64) -> Colour {
        (**self).map(t)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
