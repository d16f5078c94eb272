

pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

pub trait CurveIntegration {
    /// ∫_a^b, with ∫_a^b = -∫_b^a
    fn integral(&self, a: f64, b: f64) -> f64;
}
