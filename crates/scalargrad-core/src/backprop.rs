// Backward rules - vector-Jacobian products for scalar nodes
//
// Each rule receives the forward input x and the upstream gradient d, and
// returns d * f'(x). The autodiff engine owns accumulation; these functions
// only compute one local contribution.
//
// GRADIENT RULES:
//
//   id:       d
//   neg:      -d
//   add:      (d, d)
//   mul:      (d * y, d * x)
//   exp:      d * e^x
//   sigmoid:  d * s * (1 - s),  s = sigmoid(x)
//   log:      d / x             (ignores the EPS offset of the forward pass)
//   inv:      -d / x²           (built from neg, inv, mul)
//   relu:     d if x > 0 else 0 (sub-gradient 0 at the kink)
//
// log_back and inv_back go through `inv`, so both return Error::Domain at
// x = 0, the same policy as the forward reciprocal.

use crate::error::Result;
use crate::ops::{exp, inv, mul, neg, sigmoid};

/// If f = log, compute d * f'(x) = d / x.
///
/// The forward `log` evaluates ln(x + EPS); this rule uses the derivative of
/// plain ln and ignores the offset.
pub fn log_back(x: f64, d: f64) -> Result<f64> {
    Ok(mul(d, inv(x)?))
}

/// If f(x) = 1/x, compute d * f'(x) = -d / x².
pub fn inv_back(x: f64, d: f64) -> Result<f64> {
    let r = inv(x)?;
    Ok(mul(d, neg(mul(r, r))))
}

/// If f = relu, compute d * f'(x).
///
/// Returns exactly `0.0` for `x <= 0`, even when `d` is infinite.
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x > 0.0 {
        d
    } else {
        0.0
    }
}

/// If f = sigmoid, compute d * f'(x) = d * s * (1 - s).
pub fn sigmoid_back(x: f64, d: f64) -> f64 {
    let s = sigmoid(x);
    mul(d, mul(s, 1.0 - s))
}

/// If f = exp, compute d * e^x.
pub fn exp_back(x: f64, d: f64) -> f64 {
    mul(d, exp(x))
}

/// If f = id, the gradient passes through unchanged.
pub fn id_back(_x: f64, d: f64) -> f64 {
    d
}

/// If f = neg, compute -d.
pub fn neg_back(_x: f64, d: f64) -> f64 {
    neg(d)
}

/// If f(x, y) = x + y, return (df/dx * d, df/dy * d).
pub fn add_back(_x: f64, _y: f64, d: f64) -> (f64, f64) {
    (d, d)
}

/// If f(x, y) = x * y, return (d * y, d * x).
pub fn mul_back(x: f64, y: f64, d: f64) -> (f64, f64) {
    (mul(d, y), mul(d, x))
}
