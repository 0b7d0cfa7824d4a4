pub mod logging;
pub mod time_estimation;

pub use logging::Logging;
pub use time_estimation::TimeEstimation;
