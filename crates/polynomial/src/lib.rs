// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Integer Polynomial Library
//!
//! Single-variable polynomials with `i64` coefficients, stored sparsely as a
//! map from power to coefficient.
//!
//! ## Features
//!
//! - Arithmetic operators: `+`, `-`, `*` and `%` (long division remainder) between
//!   polynomials, plus `+` and `*` with an integer scalar on either side.
//! - Checked variants of every operation that report overflow as a [`PolynomialError`].
//! - A canonical form (descending, zero-filtered term list) and a plain text rendering.
//! - Arbitrary precision evaluation through `num-bigint`.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Representation
//!
//! The zero polynomial is the empty term map. No stored term ever has a zero
//! coefficient, so equality is structural and `degree()` is simply the highest
//! stored power (0 for the zero polynomial).
//!
//! Division happens over the integers, not over a field: each long division
//! step truncates the quotient of the leading coefficients, so remainders are
//! only exact when those divisions are.

pub mod errors;
pub mod ops;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use errors::PolynomialError;
pub use polynomial::{Coeff, Polynomial, Power};
