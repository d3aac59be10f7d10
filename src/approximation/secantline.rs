use crate::approximation::approximationerror::ApproximationError;
use crate::math::curve::curve::Curve;
use crate::math::sampling::Point2D;

/// The unique line through two sample points of a curve, kept in
/// slope-intercept form.
#[derive(Debug)]
pub struct SecantLine {
    slope: f64,
    intercept: f64
}

impl SecantLine {
    pub fn through(lhs_pt: &Point2D,
                   rhs_pt: &Point2D) -> Result<SecantLine, ApproximationError> {
        if lhs_pt.x() == rhs_pt.x() {
            return Err(ApproximationError::CoincidentPoints { x: lhs_pt.x() });
        }
        let slope = Point2D::slope(lhs_pt, rhs_pt);
        let intercept = rhs_pt.y() - slope * rhs_pt.x();
        Ok(SecantLine { slope, intercept })
    }

    /// Line through (x, f(x)) and (x+h, f(x+h)).
    pub fn touching(curve: &dyn Curve,
                    x: f64,
                    h: f64) -> Result<SecantLine, ApproximationError> {
        if h == 0.0 {
            return Err(ApproximationError::ZeroStep);
        }
        let lhs_pt = Point2D::new(x, curve.value(x));
        let rhs_pt = Point2D::new(x + h, curve.value(x + h));
        SecantLine::through(&lhs_pt, &rhs_pt)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Curve for SecantLine {
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.slope, x, self.intercept)
    }

    fn derivative(&self, _x: f64) -> f64 {
        self.slope
    }
}
