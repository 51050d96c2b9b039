pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{fit_bounds_by_radius, geodesic_distance_miles};
pub use filename::{output_file_name, output_path};
pub use progress::ProgressReporter;
