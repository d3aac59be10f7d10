use std::fmt;

use crate::math::curve::curve::Curve;
use crate::math::sampling::Point2D;

/// a*x^2 + b*x + c with its analytic derivative 2*a*x + b.
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Quadratic {
        Quadratic { a, b, c }
    }

    /// The parabola x^2 + 1 used as the worked example everywhere.
    pub fn test_parabola() -> Quadratic {
        Quadratic::new(1.0, 0.0, 1.0)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Stationary point, where the derivative vanishes. None for a
    /// degenerate quadratic (a = 0).
    pub fn vertex(&self) -> Option<Point2D> {
        if self.a == 0.0 {
            None
        } else {
            let x = -self.b / (2.0 * self.a);
            Some(Point2D::new(x, self.value(x)))
        }
    }
}

impl Curve for Quadratic {
    fn value(&self, x: f64) -> f64 {
        // Horner form
        f64::mul_add(f64::mul_add(self.a, x, self.b), x, self.c)
    }

    fn derivative(&self, x: f64) -> f64 {
        f64::mul_add(2.0 * self.a, x, self.b)
    }
}

fn signed_term(coef: f64) -> String {
    if coef < 0.0 {
        format!("- {}", -coef)
    } else {
        format!("+ {}", coef)
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}*x^2 {}*x {}",
               self.a,
               signed_term(self.b),
               signed_term(self.c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parabola_values() {
        let parabola = Quadratic::test_parabola();
        assert_eq!(parabola.value(0.0), 1.0);
        assert_eq!(parabola.value(2.0), 5.0);
        assert_eq!(parabola.value(-1.0), 2.0);
    }

    #[test]
    fn derivative_is_two_a_x_plus_b() {
        let q = Quadratic::new(3.0, -2.0, 7.0);
        assert_eq!(q.derivative(0.0), -2.0);
        assert_eq!(q.derivative(1.0), 4.0);
        assert_eq!(q.derivative(-0.5), -5.0);
    }

    #[test]
    fn vertex_of_test_parabola() {
        let vertex = Quadratic::test_parabola().vertex().unwrap();
        assert_eq!(vertex.x(), 0.0);
        assert_eq!(vertex.y(), 1.0);
    }

    #[test]
    fn degenerate_quadratic_has_no_vertex() {
        assert!(Quadratic::new(0.0, 2.0, 1.0).vertex().is_none());
    }

    #[test]
    fn display_keeps_sign_of_coefficients() {
        let q = Quadratic::new(1.0, -2.0, 1.0);
        assert_eq!(q.to_string(), "f(x) = 1*x^2 - 2*x + 1");
        let p = Quadratic::test_parabola();
        assert_eq!(p.to_string(), "f(x) = 1*x^2 + 0*x + 1");
    }
}
