use thiserror::Error;

use super::quadraturemethod::QuadratureMethod;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("tolerance must be a positive finite number, got {0}")]
    NonPositiveTolerance(f64),

    #[error("integration bounds must be finite, got [{a}, {b}]")]
    NonFiniteBound { a: f64, b: f64 },

    #[error("method '{method}' did not converge within {limit} refinements (last estimate {last_estimate}, last delta {last_delta})")]
    RefinementLimitExceeded {
        method: QuadratureMethod,
        limit: u32,
        last_estimate: f64,
        last_delta: f64,
    },

    #[error("invalid method number {0}, expected 1..=7")]
    UnknownMethodIndex(u32),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            QuadratureError::NonPositiveTolerance(-1.0).to_string(),
            "tolerance must be a positive finite number, got -1"
        );
        assert_eq!(
            QuadratureError::UnknownMethodIndex(9).to_string(),
            "invalid method number 9, expected 1..=7"
        );
        let error = QuadratureError::RefinementLimitExceeded {
            method: QuadratureMethod::Bull,
            limit: 3,
            last_estimate: 1.5,
            last_delta: 0.25,
        };
        assert!(error.to_string().starts_with("method 'Bull' did not converge within 3 refinements"));
    }
}
