// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A univariate polynomial value type with real (`f64`) coefficients.
//!
//! ## Features
//!
//! - Canonical storage: coefficients are kept in ascending power order with
//!   leading zeros stripped, so equal polynomials have identical buffers.
//! - Arithmetic: addition, subtraction, negation, multiplication and long
//!   division with remainder, as named methods and as `std::ops` operators.
//! - Evaluation at a point by direct summation in ascending power order.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Example
//!
//! ```
//! use polynom::Polynomial;
//!
//! // x^3 - 2x^2 - x + 4
//! let a = Polynomial::new(&[1.0, -2.0, -1.0, 4.0]);
//! // x^2 + 3x + 2
//! let b = Polynomial::new(&[1.0, 3.0, 2.0]);
//!
//! assert_eq!(&a / &b, Polynomial::new(&[1.0, -5.0]));
//! assert_eq!(&a % &b, Polynomial::new(&[12.0, 14.0]));
//! assert_eq!(b.evaluate(5.0), 42.0);
//! ```

pub mod errors;
pub mod polynomial;
pub mod utils;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
pub use utils::*;
