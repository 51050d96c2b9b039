pub mod distance_filter;
pub mod map_pipeline;

pub use distance_filter::RadiusFilter;
pub use map_pipeline::{
    plan_centroid, CentroidFailure, CentroidPlan, MapPipeline, RenderedMap, RunSummary,
};
