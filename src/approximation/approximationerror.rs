use thiserror::Error;

/// Invalid-input conditions of the engine. Both are division-by-zero
/// cases that must be rejected before any arithmetic runs.
#[derive(Debug, Error, PartialEq)]
pub enum ApproximationError {
    #[error("step h must be non-zero")]
    ZeroStep,
    #[error("cannot build a line through two points with the same x = {x}")]
    CoincidentPoints { x: f64 }
}
