use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{blue_white_gradient::MandelbrotBlueWhiteGradient, fire_gradient::MandelbrotFireGradient},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: MandelbrotColourMapKinds) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::FireGradient => Box::new(MandelbrotFireGradient::new()),
        MandelbrotColourMapKinds::BlueWhiteGradient => Box::new(MandelbrotBlueWhiteGradient::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }
}
