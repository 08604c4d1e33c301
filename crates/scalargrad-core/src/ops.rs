// Elementary operators - pure scalar forward functions
//
// Every function here is referentially transparent: same inputs, same
// output, no hidden state. The autodiff engine may cache or replay calls.
//
// Comparison operators return a numeric indicator (1.0 / 0.0) instead of a
// bool so they can flow through the same f64 pipeline as everything else.
// `is_close` is the single exception: it is a predicate for tests and
// convergence checks, never a graph node.
//
// NUMERIC POLICIES:
//
//   max       ties return y
//   sigmoid   two branches, never evaluates exp of a large positive number
//   relu      x = 0 takes the x >= 0 branch (returns 0 either way)
//   log       ln(x + EPS), finite at x = 0, biased by EPS everywhere
//   inv       Error::Domain at x = 0

use crate::config::{OpsConfig, CLOSE_TOLERANCE, EPS};
use crate::error::{Error, Result};

/// f(x, y) = x * y
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// f(x) = x
pub fn id(x: f64) -> f64 {
    x
}

/// f(x, y) = x + y
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// f(x) = -x
pub fn neg(x: f64) -> f64 {
    -x
}

/// 1.0 if x is less than y, else 0.0.
pub fn lt(x: f64, y: f64) -> f64 {
    if x < y {
        1.0
    } else {
        0.0
    }
}

/// 1.0 if x equals y, else 0.0.
pub fn eq(x: f64, y: f64) -> f64 {
    if x == y {
        1.0
    } else {
        0.0
    }
}

/// x if x is greater than y, else y.
///
/// On a tie (and whenever the comparison is false, e.g. a NaN operand) the
/// result is `y`.
pub fn max(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

/// Whether `|x - y| < 1e-2`.
///
/// The tolerance is absolute, so this is only meaningful for values of
/// moderate magnitude.
pub fn is_close(x: f64, y: f64) -> bool {
    is_close_with_tol(x, y, CLOSE_TOLERANCE)
}

/// Whether `|x - y| < tol`.
pub fn is_close_with_tol(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() < tol
}

/// Whether `|x - y| < cfg.close_tolerance`.
pub fn is_close_cfg(x: f64, y: f64, cfg: &OpsConfig) -> bool {
    is_close_with_tol(x, y, cfg.close_tolerance)
}

/// Logistic sigmoid: 1 / (1 + e^(-x)).
///
/// Computed as `1 / (1 + e^-x)` for `x >= 0` and `e^x / (1 + e^x)` for
/// `x < 0`, so the exponential is always of a non-positive number and
/// cannot overflow.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Rectified linear unit: x if x >= 0, else 0.
pub fn relu(x: f64) -> f64 {
    if x >= 0.0 {
        x
    } else {
        0.0
    }
}

/// Natural logarithm with a stability offset: ln(x + EPS).
pub fn log(x: f64) -> f64 {
    log_with_eps(x, EPS)
}

/// ln(x + eps).
pub fn log_with_eps(x: f64, eps: f64) -> f64 {
    (x + eps).ln()
}

/// f(x) = e^x
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Reciprocal: 1 / x.
///
/// Returns [`Error::Domain`] at `x == 0` (either signed zero) instead of an
/// IEEE infinity.
pub fn inv(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::domain("inv", x));
    }
    Ok(1.0 / x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(mul(3.0, -2.0), -6.0);
        assert_eq!(id(4.5), 4.5);
        assert_eq!(add(1.25, 2.0), 3.25);
        assert_eq!(neg(7.0), -7.0);
        assert_eq!(neg(-0.5), 0.5);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(lt(1.0, 2.0), 1.0);
        assert_eq!(lt(2.0, 1.0), 0.0);
        assert_eq!(lt(2.0, 2.0), 0.0);
        assert_eq!(eq(3.0, 3.0), 1.0);
        assert_eq!(eq(3.0, 3.5), 0.0);
    }

    #[test]
    fn test_max_tie_returns_y() {
        assert_eq!(max(5.0, 2.0), 5.0);
        assert_eq!(max(2.0, 5.0), 5.0);
        // +0 and -0 compare equal, so the tie rule is observable through the sign
        assert!(max(0.0, -0.0).is_sign_negative());
        assert!(max(-0.0, 0.0).is_sign_positive());
    }

    #[test]
    fn test_is_close() {
        assert!(is_close(1.000, 1.005));
        assert!(!is_close(1.0, 1.02));
        assert!(is_close_with_tol(1.0, 1.02, 0.05));
    }

    #[test]
    fn test_is_close_cfg_reads_tolerance() {
        let default = OpsConfig::default();
        assert!(!is_close_cfg(1.0, 1.02, &default));
        assert!(is_close_cfg(1.0, 1.005, &default));

        let loose = OpsConfig::default().close_tolerance(0.05);
        assert!(is_close_cfg(1.0, 1.02, &loose));

        let tight = OpsConfig::default().close_tolerance(1e-4);
        assert!(!is_close_cfg(1.0, 1.005, &tight));
    }

    #[test]
    fn test_sigmoid_known_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.8807970779778823).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 0.11920292202211755).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_extremes() {
        for x in [1e6, -1e6, 1e300, -1e300, f64::MAX, f64::MIN] {
            let s = sigmoid(x);
            assert!(s.is_finite(), "sigmoid({x}) = {s}");
            assert!((0.0..=1.0).contains(&s));
        }
        assert_eq!(sigmoid(1e6), 1.0);
        assert_eq!(sigmoid(-1e6), 0.0);
    }

    #[test]
    fn test_relu() {
        assert_eq!(relu(3.0), 3.0);
        assert_eq!(relu(-3.0), 0.0);
        assert_eq!(relu(0.0), 0.0);
    }

    #[test]
    fn test_log_offset() {
        assert!(log(0.0).is_finite());
        assert!((log(0.0) - EPS.ln()).abs() < 1e-12);
        assert!((log(1.0) - (1.0 + EPS).ln()).abs() < 1e-15);
        assert_eq!(log_with_eps(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - std::f64::consts::E).abs() < 1e-15);
    }

    #[test]
    fn test_inv() {
        assert_eq!(inv(4.0), Ok(0.25));
        assert_eq!(inv(-0.5), Ok(-2.0));
        assert_eq!(inv(0.0), Err(Error::Domain { op: "inv", x: 0.0 }));
        assert!(inv(-0.0).unwrap_err().is_domain());
    }
}
