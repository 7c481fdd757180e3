pub mod coordinate_transform;
