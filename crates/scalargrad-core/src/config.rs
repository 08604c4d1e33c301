// OpsConfig - numeric constants used by the elementary operators
//
// Two operators depend on a tuning constant rather than pure math:
//
//   log       ln(x + EPS)       EPS keeps ln finite at x = 0
//   is_close  |x - y| < TOL     absolute tolerance, not relative
//
// The free functions `log` and `is_close` use the named constants below.
// Callers that need different values pass an OpsConfig: `log_eps` is read by
// `UnaryOp::forward`, `close_tolerance` by `ops::is_close_cfg`. The raw forms
// `log_with_eps` / `is_close_with_tol` take the value directly.

/// Offset added inside `log` so that `log(0)` is finite.
pub const EPS: f64 = 1e-6;

/// Absolute tolerance used by `is_close`.
pub const CLOSE_TOLERANCE: f64 = 1e-2;

/// Configuration for the configurable elementary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpsConfig {
    /// Offset added to the argument of `log`.
    pub log_eps: f64,
    /// Absolute tolerance for `is_close_cfg`.
    pub close_tolerance: f64,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            log_eps: EPS,
            close_tolerance: CLOSE_TOLERANCE,
        }
    }
}

impl OpsConfig {
    /// Set the offset added to the argument of `log`.
    pub fn log_eps(mut self, eps: f64) -> Self {
        self.log_eps = eps;
        self
    }

    /// Set the absolute tolerance for `is_close_cfg`.
    pub fn close_tolerance(mut self, tol: f64) -> Self {
        self.close_tolerance = tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = OpsConfig::default();
        assert_eq!(cfg.log_eps, 1e-6);
        assert_eq!(cfg.close_tolerance, 1e-2);
    }

    #[test]
    fn test_builder() {
        let cfg = OpsConfig::default().log_eps(1e-9).close_tolerance(0.5);
        assert_eq!(cfg.log_eps, 1e-9);
        assert_eq!(cfg.close_tolerance, 0.5);
    }
}
