// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod shape;

// estimator
pub mod estimate;

pub use algorithms::Rule;
pub use estimate::{estimate, estimate_cfg, shapes, total};
pub use report::EstimationReport;
pub use shape::Shape;
