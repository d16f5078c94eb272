use std::fmt;

use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};
use tracing::{
    debug,
    warn
};

use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::polynomial::polynomialerror::PolynomialError;
use crate::math::polynomial::polynomialxd::PolynomialXd;
use crate::math::smoothingspline::derivativeorder::DerivativeOrder;

// ─────────────────────────────────────────────────────────────────────────────
// Spline1dSeg
// ─────────────────────────────────────────────────────────────────────────────
//
// 一段平滑樣條：f(x) = Σ c_i·x^i 以及其一、二、三階導數。
//
//   spline_func ─▶ derivative ─▶ second_order_derivative ─▶ third_order_derivative
//
// 四個多項式只會在建構或 set_params 時整組重建，之後的求值皆為 O(order)。

#[derive(Serialize, Deserialize)]
struct Spline1dSegJsonProp {
    params: Vec<f64>
}

/// One piece of a piecewise polynomial profile together with its first three
/// analytic derivatives.
///
/// The derivative chain is rebuilt as a whole on construction and on every
/// [`Spline1dSeg::set_params`]; references handed out by the accessors borrow
/// the segment, so they cannot be held across a parameter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Spline1dSegJsonProp", into = "Spline1dSegJsonProp")]
pub struct Spline1dSeg {
    spline_func: PolynomialXd,
    derivative: PolynomialXd,
    second_order_derivative: PolynomialXd,
    third_order_derivative: PolynomialXd
}

impl Spline1dSeg {
    /// Zero segment of the given order.
    pub fn new(order: usize) -> Result<Spline1dSeg, PolynomialError> {
        let spline_func = PolynomialXd::new(order)
            .inspect_err(|error| warn!(%error, "spline segment rejected"))?;
        Ok(Self::derive_chain(spline_func))
    }

    /// Segment holding `params` as monomial coefficients, lowest degree first.
    pub fn from_params(params: Vec<f64>) -> Result<Spline1dSeg, PolynomialError> {
        let spline_func = Self::spline_func_from_params(params)?;
        Ok(Self::derive_chain(spline_func))
    }

    /// Replaces the whole segment. On error the segment is left as it was.
    pub fn set_params(&mut self, params: Vec<f64>) -> Result<(), PolynomialError> {
        let spline_func = Self::spline_func_from_params(params)?;
        *self = Self::derive_chain(spline_func);
        Ok(())
    }

    fn spline_func_from_params(params: Vec<f64>) -> Result<PolynomialXd, PolynomialError> {
        PolynomialXd::from_params(params)
            .inspect_err(|error| warn!(%error, "spline segment params rejected"))
    }

    fn derive_chain(spline_func: PolynomialXd) -> Spline1dSeg {
        let derivative = PolynomialXd::derived_from(&spline_func);
        let second_order_derivative = PolynomialXd::derived_from(&derivative);
        let third_order_derivative = PolynomialXd::derived_from(&second_order_derivative);
        debug!(order = spline_func.order(), "spline segment derivative chain derived");
        Spline1dSeg {
            spline_func,
            derivative,
            second_order_derivative,
            third_order_derivative
        }
    }

    pub fn order(&self) -> usize {
        self.spline_func.order()
    }

    pub fn value(&self, x: f64) -> f64 {
        self.spline_func.evaluate(x)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        self.derivative.evaluate(x)
    }

    pub fn second_order_derivative(&self, x: f64) -> f64 {
        self.second_order_derivative.evaluate(x)
    }

    pub fn third_order_derivative(&self, x: f64) -> f64 {
        self.third_order_derivative.evaluate(x)
    }

    pub fn evaluate(&self, order: DerivativeOrder, x: f64) -> f64 {
        self.polynomial(order).evaluate(x)
    }

    pub fn spline_func(&self) -> &PolynomialXd {
        &self.spline_func
    }

    pub fn derivative_func(&self) -> &PolynomialXd {
        &self.derivative
    }

    pub fn second_order_derivative_func(&self) -> &PolynomialXd {
        &self.second_order_derivative
    }

    pub fn third_order_derivative_func(&self) -> &PolynomialXd {
        &self.third_order_derivative
    }

    pub fn polynomial(&self, order: DerivativeOrder) -> &PolynomialXd {
        match order {
            DerivativeOrder::Value  => &self.spline_func,
            DerivativeOrder::First  => &self.derivative,
            DerivativeOrder::Second => &self.second_order_derivative,
            DerivativeOrder::Third  => &self.third_order_derivative,
        }
    }

    /// Row `r` of length `order() + 1` such that `r · params` is the requested
    /// derivative at `x`.
    ///
    /// r_i = i!/(i-k)! · x^(i-k) for i ≥ k, 0 otherwise.
    pub fn constraint_row(&self, order: DerivativeOrder, x: f64) -> DVector<f64> {
        let k = order.degree();
        DVector::from_fn(self.spline_func.params().len(), |i, _| {
            if i < k {
                0.0
            } else {
                let falling_factorial: f64 = ((i - k + 1)..=i).map(|j| j as f64).product();
                falling_factorial * x.powi((i - k) as i32)
            }
        })
    }
}

impl TryFrom<Spline1dSegJsonProp> for Spline1dSeg {
    type Error = PolynomialError;

    fn try_from(json_prop: Spline1dSegJsonProp) -> Result<Self, Self::Error> {
        Spline1dSeg::from_params(json_prop.params)
    }
}

impl From<Spline1dSeg> for Spline1dSegJsonProp {
    fn from(segment: Spline1dSeg) -> Self {
        Spline1dSegJsonProp {
            params: segment.spline_func.into()
        }
    }
}

impl Curve for Spline1dSeg {
    fn value(&self, x: f64) -> f64 {
        Spline1dSeg::value(self, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        Spline1dSeg::derivative(self, x)
    }
}

impl CurveIntegration for Spline1dSeg {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.spline_func.integral(a, b)
    }
}

impl fmt::Display for Spline1dSeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spline1dSeg(order: {}, {})", self.order(), self.spline_func)
    }
}
