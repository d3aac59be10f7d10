use std::fmt;

use crate::math::round::round_to;

/// Rounded percent errors at or under this magnitude collapse into the
/// categorical label below.
pub const NEGLIGIBLE_THRESHOLD: f64 = 0.05;

pub const NEGLIGIBLE_LABEL: &'static str = "> 0.05";

const DISPLAY_DIGITS: u32 = 3;

/// Percentage difference between the secant slope and the true
/// derivative. Small magnitudes are reported as a category, not a
/// number; the label text is part of the display contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentError {
    Value(f64),
    Negligible
}

impl PercentError {
    pub fn as_value(&self) -> Option<f64> {
        match self {
            PercentError::Value(v) => Some(*v),
            PercentError::Negligible => None
        }
    }
}

impl fmt::Display for PercentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentError::Value(v) => write!(f, "{}", v),
            PercentError::Negligible => write!(f, "{}", NEGLIGIBLE_LABEL)
        }
    }
}

/// Relative percentage error of `secant` against `true_derivative`,
/// rounded to three digits. When the true derivative is zero the ratio
/// is undefined, so the error is taken relative to zero as
/// `secant * 100`.
pub fn percent_error(secant: f64, true_derivative: f64) -> PercentError {
    let ratio = if true_derivative == 0.0 {
        secant * 100.0
    } else {
        (secant / true_derivative - 1.0) * 100.0
    };
    let rounded = round_to(ratio, DISPLAY_DIGITS);

    if rounded.abs() <= NEGLIGIBLE_THRESHOLD {
        PercentError::Negligible
    } else {
        PercentError::Value(rounded)
    }
}
