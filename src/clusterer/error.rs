use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Point sequence is empty")]
    EmptyInput,

    #[error("Point {index} has a non-finite or out-of-range coordinate: ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    #[error("Distance threshold must be positive and finite (got {0})")]
    InvalidThreshold(f64),

    #[error("Internal invariant violated during {step}: {detail}")]
    InvariantViolation { step: &'static str, detail: String },
}
