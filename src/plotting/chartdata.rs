use serde::Serialize;

use crate::approximation::approximationerror::ApproximationError;
use crate::approximation::secantline::SecantLine;
use crate::configuration::DisplayWindow;
use crate::math::curve::curve::Curve;
use crate::math::sampling::{
    sample_curve,
    Point2D
};

/// How far beyond the evaluation point the secant line is extended, so
/// it always crosses the whole display window.
const LINE_OVERSHOOT: f64 = 10.0;

/// The two coordinate sequences a chart frontend needs: the function
/// curve across the display window and the secant line at x, x+h.
#[derive(Serialize)]
pub struct DerivativePlot {
    curve_points: Vec<Point2D>,
    line_points: Vec<Point2D>
}

impl DerivativePlot {
    pub fn curve_points(&self) -> &[Point2D] {
        &self.curve_points
    }

    pub fn line_points(&self) -> &[Point2D] {
        &self.line_points
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

pub fn derivative_plot(curve: &dyn Curve,
                       x: f64,
                       h: f64,
                       window: &DisplayWindow)
                       -> Result<DerivativePlot, ApproximationError> {
    let line = SecantLine::touching(curve, x, h)?;

    // Upper bound extended by one stride so both window ends are kept.
    let curve_points = sample_curve(
        curve,
        window.x_min(),
        window.x_max() + window.step(),
        window.step()
    ).collect();

    let line_points = [x - LINE_OVERSHOOT, x, x + h, x + LINE_OVERSHOOT]
        .iter()
        .map(|&line_x| Point2D::new(line_x, line.value(line_x)))
        .collect();

    Ok(DerivativePlot { curve_points, line_points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::quadratic::Quadratic;

    #[test]
    fn default_window_yields_seventeen_curve_points() {
        let parabola = Quadratic::test_parabola();
        let window = DisplayWindow::default();
        let plot = derivative_plot(&parabola, 1.0, 1.0, &window).unwrap();
        assert_eq!(plot.curve_points().len(), 17);
        assert_eq!(plot.curve_points()[0].x(), -2.0);
        assert_eq!(plot.curve_points()[16].x(), 2.0);
    }

    #[test]
    fn line_points_touch_the_curve_at_x_and_x_plus_h() {
        let parabola = Quadratic::test_parabola();
        let window = DisplayWindow::default();
        let plot = derivative_plot(&parabola, 0.5, 0.5, &window).unwrap();
        assert_eq!(plot.line_points().len(), 4);
        let at_x = plot.line_points()[1];
        let at_x_plus_h = plot.line_points()[2];
        assert_eq!(at_x.x(), 0.5);
        assert!((at_x.y() - parabola.value(0.5)).abs() < 1e-12);
        assert_eq!(at_x_plus_h.x(), 1.0);
        assert!((at_x_plus_h.y() - parabola.value(1.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_step_propagates() {
        let parabola = Quadratic::test_parabola();
        let window = DisplayWindow::default();
        assert!(derivative_plot(&parabola, 1.0, 0.0, &window).is_err());
    }

    #[test]
    fn serializes_to_coordinate_pairs() {
        let parabola = Quadratic::test_parabola();
        let window = DisplayWindow::default();
        let plot = derivative_plot(&parabola, 1.0, 1.0, &window).unwrap();
        let json = plot.to_json().unwrap();
        assert_eq!(json["curve_points"].as_array().unwrap().len(), 17);
        assert_eq!(json["line_points"][1]["x"], 1.0);
        assert_eq!(json["line_points"][1]["y"], 2.0);
    }
}
