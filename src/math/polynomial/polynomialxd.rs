use std::fmt;
use std::ops::Index;

use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::CurveIntegration;
use crate::math::polynomial::polynomialerror::PolynomialError;

// ─────────────────────────────────────────────
// Coefficient functions
// ─────────────────────────────────────────────
//
// 係數一律由低次往高次存放：[c0, c1, ..., cn] 代表 Σ c_i·x^i

/// [c0, c1, ..., cn] → [c1, 2·c2, ..., n·cn]
///
/// A constant differentiates to `[0.0]`, never to an empty vector, so every
/// derivative in a chain can still be evaluated.
pub fn derivative_coefficients(params: &[f64]) -> Vec<f64> {
    if params.len() <= 1 {
        vec![0.0]
    } else {
        params
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &coef)| power as f64 * coef)
            .collect()
    }
}

/// [c0, c1, ..., cn] → [k, c0, c1/2, ..., cn/(n+1)]
pub fn integral_coefficients(params: &[f64], constant: f64) -> Vec<f64> {
    std::iter::once(constant)
        .chain(
            params
                .iter()
                .enumerate()
                .map(|(power, &coef)| coef / (power + 1) as f64)
        )
        .collect()
}

// ─────────────────────────────────────────────
// PolynomialXd
// ─────────────────────────────────────────────

/// Single-variable polynomial over the monomial basis.
///
/// The coefficient vector is never empty; a polynomial of order `n` holds
/// `n + 1` coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PolynomialXd {
    params: Vec<f64>
}

impl PolynomialXd {
    /// `order + 1` zero coefficients.
    pub fn new(order: usize) -> Result<PolynomialXd, PolynomialError> {
        let len = order
            .checked_add(1)
            .ok_or(PolynomialError::InvalidOrder(order))?;
        let mut params = Vec::new();
        params
            .try_reserve_exact(len)
            .map_err(|_| PolynomialError::InvalidOrder(order))?;
        params.resize(len, 0.0);
        Ok(PolynomialXd { params })
    }

    pub fn from_params(params: Vec<f64>) -> Result<PolynomialXd, PolynomialError> {
        if params.is_empty() {
            return Err(PolynomialError::InvalidParams);
        }
        Ok(PolynomialXd { params })
    }

    /// Analytic derivative of `source` as a fresh value.
    pub fn derived_from(source: &PolynomialXd) -> PolynomialXd {
        PolynomialXd {
            params: derivative_coefficients(&source.params)
        }
    }

    /// Antiderivative of `source` whose value at zero is `constant`.
    pub fn integrated_from(source: &PolynomialXd, constant: f64) -> PolynomialXd {
        PolynomialXd {
            params: integral_coefficients(&source.params, constant)
        }
    }

    pub fn order(&self) -> usize {
        self.params.len() - 1
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn params_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.params)
    }

    /// Horner's rule, O(order).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.params
            .iter()
            .rev()
            .fold(0.0, |acc, &coef| f64::mul_add(acc, x, coef))
    }
}

impl TryFrom<Vec<f64>> for PolynomialXd {
    type Error = PolynomialError;

    fn try_from(params: Vec<f64>) -> Result<Self, Self::Error> {
        PolynomialXd::from_params(params)
    }
}

impl From<PolynomialXd> for Vec<f64> {
    fn from(polynomial: PolynomialXd) -> Self {
        polynomial.params
    }
}

impl Index<usize> for PolynomialXd {
    type Output = f64;

    fn index(&self, power: usize) -> &f64 {
        &self.params[power]
    }
}

impl CurveIntegration for PolynomialXd {
    fn integral(&self, a: f64, b: f64) -> f64 {
        let antiderivative = PolynomialXd::integrated_from(self, 0.0);
        antiderivative.evaluate(b) - antiderivative.evaluate(a)
    }
}

impl fmt::Display for PolynomialXd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) =")?;
        let mut is_first = true;
        for (power, &coef) in self.params.iter().enumerate() {
            if coef == 0.0 {
                continue;
            }

            let magnitude = coef.abs();
            match (is_first, coef < 0.0) {
                (true, true) => write!(f, " -{}", magnitude)?,
                (true, false) => write!(f, " {}", magnitude)?,
                (false, true) => write!(f, " - {}", magnitude)?,
                (false, false) => write!(f, " + {}", magnitude)?,
            }
            match power {
                0 => {},
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            is_first = false;
        }

        if is_first {
            write!(f, " 0")?;
        }
        Ok(())
    }
}
