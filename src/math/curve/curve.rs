
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    /// Closed-form derivative, supplied by the implementor.
    fn derivative(&self, x: f64) -> f64;
}
