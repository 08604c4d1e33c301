/// All errors that can occur within scalargrad.
///
/// Every operator except the reciprocal family is total over the reals, so
/// the only failure is evaluating an operator outside its domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An operator was evaluated at a point where it is undefined
    /// (e.g. the reciprocal at zero).
    #[error("{op} is undefined at x = {x}")]
    Domain { op: &'static str, x: f64 },
}

impl Error {
    /// Create a domain error for `op` evaluated at `x`.
    pub fn domain(op: &'static str, x: f64) -> Self {
        log::debug!("domain error: {op} evaluated at {x}");
        Error::Domain { op, x }
    }

    /// Whether this is a domain error.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }
}

/// Convenience Result type used throughout scalargrad.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_display() {
        let e = Error::domain("inv", 0.0);
        assert_eq!(e.to_string(), "inv is undefined at x = 0");
        assert!(e.is_domain());
    }

    #[test]
    fn test_domain_keeps_operator_and_input() {
        let e = Error::domain("log_back", -0.0);
        assert_eq!(e, Error::Domain { op: "log_back", x: 0.0 });
        assert_eq!(e.to_string(), "log_back is undefined at x = -0");
    }
}
