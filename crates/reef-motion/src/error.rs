use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("integrator configuration error: {0}")]
    Config(String),
}

pub type MotionResult<T> = Result<T, MotionError>;
