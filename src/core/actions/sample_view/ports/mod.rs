pub mod compute_backend;
