// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use crate::utils::approx_eq_coefficients;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use tracing::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial in one variable with real coefficients.
///
/// The polynomial `c_0 + c_1 x + ... + c_n x^n` is stored by its coefficients in
/// ascending order of degree (index 0 is the constant term). The buffer is always
/// canonical: the highest-degree coefficient is nonzero, except for the zero
/// polynomial which is stored as `[0.0]`. Interior and low-order zeros are kept.
///
/// Instances are immutable; every operation returns a new polynomial.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "AscendingCoefficients", into = "AscendingCoefficients")
)]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    coefficients: Vec<f64>,
}

/// Wire form of a polynomial. Deserialization canonicalizes the payload.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct AscendingCoefficients {
    coefficients: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<AscendingCoefficients> for Polynomial {
    fn from(value: AscendingCoefficients) -> Self {
        Polynomial::from_ascending_coefficients(value.coefficients)
    }
}

#[cfg(feature = "serde")]
impl From<Polynomial> for AscendingCoefficients {
    fn from(value: Polynomial) -> Self {
        Self {
            coefficients: value.coefficients,
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.coefficients.iter().enumerate().rev() {
            if *coeff == 0.0 {
                continue;
            }

            let negative = coeff.is_sign_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || abs_coeff != 1.0 {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from its coefficients, highest degree first.
    ///
    /// This is the natural reading order: `7x^4 + 3x^3 - 6x^2 + x - 8` is
    /// `Polynomial::new(&[7.0, 3.0, -6.0, 1.0, -8.0])`. Leading zero coefficients are
    /// ignored, so `[0.0, 0.0, 5.0, 3.0]` is `5x + 3`. An empty or all-zero slice
    /// gives the zero polynomial.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Slice of coefficients in descending order of degree.
    pub fn new(coefficients: &[f64]) -> Self {
        Self::from_ascending_coefficients(coefficients.iter().rev().copied().collect())
    }

    /// Creates a polynomial from coefficients in ascending order (constant term first).
    ///
    /// High-order zero coefficients are stripped.
    ///
    /// # Arguments
    ///
    /// * `ascending_coefficients` - Vector of coefficients in ascending order.
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<f64>) -> Self {
        let mut coefficients = ascending_coefficients;
        let len = coefficients
            .iter()
            .rposition(|c| *c != 0.0)
            .map_or(1, |i| i + 1);
        coefficients.truncate(len);
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        // -0.0 compares equal to 0.0 but hashes differently.
        for c in coefficients.iter_mut() {
            if *c == 0.0 {
                *c = 0.0;
            }
        }
        Self { coefficients }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0.0],
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: f64) -> Self {
        Self::from_ascending_coefficients(vec![constant])
    }

    /// Returns the canonical coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Converts the polynomial to descending order (highest degree first).
    ///
    /// The result is accepted by [`Polynomial::new`].
    pub fn to_descending_coefficients(&self) -> Vec<f64> {
        self.coefficients.iter().rev().copied().collect()
    }

    /// Returns the coefficient of `x^i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > self.degree()`.
    pub fn coeff(&self, i: usize) -> f64 {
        self.coefficients[i]
    }

    /// Returns the coefficient of `x^i`, or an error if `i` exceeds the degree.
    pub fn checked_coeff(&self, i: usize) -> Result<f64, PolynomialError> {
        self.coefficients
            .get(i)
            .copied()
            .ok_or_else(|| PolynomialError::CoefficientOutOfRange {
                index: i,
                degree: self.degree(),
            })
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest-degree term.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.degree()]
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0.0
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are summed directly in ascending order of degree, each computed as
    /// `c_i * x^i`. Overflow and `NaN` propagate under ordinary floating-point rules.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powf(i as f64))
            .sum()
    }

    /// Adds two polynomials together.
    ///
    /// The shorter operand is treated as padded with zeros. The result is
    /// canonicalized, so cancelling leading terms lower the degree.
    pub fn plus(&self, other: &Self) -> Self {
        let len = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let sum = (0..len)
            .map(|i| {
                let a = self.coefficients.get(i).copied().unwrap_or(0.0);
                let b = other.coefficients.get(i).copied().unwrap_or(0.0);
                a + b
            })
            .collect();

        Polynomial::from_ascending_coefficients(sum)
    }

    /// Negates all coefficients of the polynomial.
    pub fn negate(&self) -> Self {
        Polynomial::from_ascending_coefficients(self.coefficients.iter().map(|c| -c).collect())
    }

    /// Subtracts `other` from `self`, computed as `self + (-other)`.
    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negate())
    }

    /// Multiplies two polynomials using the naive convolution.
    pub fn times(&self, other: &Self) -> Self {
        let mut product = vec![0.0; self.degree() + other.degree() + 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial::from_ascending_coefficients(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        Polynomial::from_ascending_coefficients(
            self.coefficients.iter().map(|c| c * scalar).collect(),
        )
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// The result satisfies `self = divisor * quotient + remainder` with
    /// `remainder.degree() < divisor.degree()` or `remainder` zero. If the dividend
    /// has lower degree than the divisor, the quotient is zero and the remainder is
    /// the dividend itself.
    ///
    /// Dividing by the zero polynomial is not an error here: the leading coefficient
    /// reciprocal is infinite, so the quotient is filled with infinities or `NaN`
    /// and the remainder is zero. A warning is logged. Use
    /// [`Polynomial::checked_div_rem`] to get an error instead.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let m = self.degree();
        let n = divisor.degree();
        trace!(
            dividend_degree = m,
            divisor_degree = n,
            "polynomial long division"
        );

        if divisor.is_zero() {
            warn!(dividend = %self, "division by zero polynomial");
        }

        if m < n {
            return (Polynomial::zero(), self.clone());
        }

        let mut quotient = vec![0.0; m - n + 1];
        let mut coef = self.coefficients.clone();
        let norm = 1.0 / divisor.coeff(n);

        for k in (0..=m - n).rev() {
            quotient[k] = coef[n + k] * norm;
            for j in (k..n + k).rev() {
                coef[j] -= quotient[k] * divisor.coeff(j - k);
            }
        }

        coef.truncate(n);

        (
            Polynomial::from_ascending_coefficients(quotient),
            Polynomial::from_ascending_coefficients(coef),
        )
    }

    /// Divides one polynomial by another, rejecting the zero divisor.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero.
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        Ok(self.div_rem(divisor))
    }

    /// Quotient of polynomial long division. See [`Polynomial::div_rem`].
    pub fn quotient(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).0
    }

    /// Remainder of polynomial long division. See [`Polynomial::div_rem`].
    pub fn remainder(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Compares two polynomials coefficient by coefficient within `tolerance`.
    ///
    /// Missing high-order coefficients count as zero, so a rounding residue in a
    /// leading position does not make two practically equal polynomials differ.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq_coefficients(&self.coefficients, &other.coefficients, tolerance)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients.len().hash(state);
        for c in &self.coefficients {
            c.to_bits().hash(state);
        }
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $inherent:ident) => {
        impl $op<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$inherent(rhs)
            }
        }

        impl $op<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$inherent(&rhs)
            }
        }

        impl $op<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$inherent(rhs)
            }
        }

        impl $op<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$inherent(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, plus);
impl_binary_op!(Sub, sub, minus);
impl_binary_op!(Mul, mul, times);
impl_binary_op!(Div, div, quotient);
impl_binary_op!(Rem, rem, remainder);

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}
