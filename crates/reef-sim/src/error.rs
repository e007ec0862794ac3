use reef_behavior::BehaviorError;
use reef_core::ReefError;
use reef_motion::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Core(#[from] ReefError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("steering model error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("integrator error: {0}")]
    Motion(#[from] MotionError),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
