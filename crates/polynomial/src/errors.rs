// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolynomialError {
    /// Division by zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Coefficient index beyond the degree of the polynomial
    #[error("Coefficient index {index} out of range for polynomial of degree {degree}")]
    CoefficientOutOfRange { index: usize, degree: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PolynomialError::DivisionByZero.to_string(),
            "Division by zero polynomial"
        );
        assert_eq!(
            PolynomialError::CoefficientOutOfRange {
                index: 4,
                degree: 2
            }
            .to_string(),
            "Coefficient index 4 out of range for polynomial of degree 2"
        );
    }
}
