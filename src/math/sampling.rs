use serde::Serialize;

use crate::math::curve::curve::Curve;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}

/// Lazy grid of (x, f(x)) points over the half-open range
/// [x_min, x_max) with a fixed stride. `restart` rewinds to the first
/// grid point.
#[derive(Clone)]
pub struct CurveSamples<'a> {
    curve: &'a dyn Curve,
    x_min: f64,
    step: f64,
    count: usize,
    next_index: usize
}

impl<'a> CurveSamples<'a> {
    pub fn restart(&mut self) {
        self.next_index = 0;
    }
}

impl<'a> Iterator for CurveSamples<'a> {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.next_index >= self.count {
            return None;
        }
        // Index-based so no floating error accumulates across steps.
        let x = f64::mul_add(self.next_index as f64, self.step, self.x_min);
        self.next_index += 1;
        Some(Point2D::new(x, self.curve.value(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for CurveSamples<'a> {}

fn grid_size(x_min: f64, x_max: f64, step: f64) -> usize {
    if step <= 0.0 || x_max <= x_min {
        return 0;
    }
    let span = (x_max - x_min) / step;
    // An exact multiple of the stride must not pick up an extra point
    // from representation error.
    if (span - span.round()).abs() < 1e-9 {
        span.round() as usize
    } else {
        span.ceil() as usize
    }
}

/// Sample a curve over [x_min, x_max) with the given stride. A
/// non-positive stride or an empty range yields an empty sequence.
pub fn sample_curve<'a>(curve: &'a dyn Curve,
                        x_min: f64,
                        x_max: f64,
                        step: f64) -> CurveSamples<'a> {
    CurveSamples {
        curve,
        x_min,
        step,
        count: grid_size(x_min, x_max, step),
        next_index: 0
    }
}
