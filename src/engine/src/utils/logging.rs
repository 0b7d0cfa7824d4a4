use crate::utils::TimeEstimation;
use log::debug;

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, estimated) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, estimated);

        result
    }
}
