use crate::approximation::approximationerror::ApproximationError;
use crate::approximation::percenterror::{
    percent_error,
    PercentError
};
use crate::math::curve::curve::Curve;

/// Finite-difference slope (f(x+h) - f(x)) / h.
pub fn secant_slope(curve: &dyn Curve,
                    x: f64,
                    h: f64) -> Result<f64, ApproximationError> {
    if h == 0.0 {
        return Err(ApproximationError::ZeroStep);
    }
    Ok((curve.value(x + h) - curve.value(x)) / h)
}

/// One full comparison of the numerical slope against the analytic
/// derivative. Built fresh on every request, never mutated.
pub struct ApproximationResult {
    secant_slope: f64,
    true_derivative: f64,
    percent_error: PercentError
}

impl ApproximationResult {
    pub fn secant_slope(&self) -> f64 {
        self.secant_slope
    }

    pub fn true_derivative(&self) -> f64 {
        self.true_derivative
    }

    pub fn percent_error(&self) -> PercentError {
        self.percent_error
    }
}

pub fn approximate(curve: &dyn Curve,
                   x: f64,
                   h: f64) -> Result<ApproximationResult, ApproximationError> {
    let slope = secant_slope(curve, x, h)?;
    let true_derivative = curve.derivative(x);
    Ok(ApproximationResult {
        secant_slope: slope,
        true_derivative,
        percent_error: percent_error(slope, true_derivative)
    })
}
