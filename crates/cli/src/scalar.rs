// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use intpoly::{Coeff, Polynomial, PolynomialError};
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarOp {
    /// poly * scalar
    Scale,
    /// poly + scalar
    Shift,
}

pub fn apply(
    op: ScalarOp,
    poly: &Polynomial,
    scalar: Coeff,
    checked: bool,
) -> Result<Polynomial, PolynomialError> {
    match (op, checked) {
        (ScalarOp::Scale, true) => poly.checked_scalar_mul(scalar),
        (ScalarOp::Shift, true) => poly.checked_scalar_add(scalar),
        (ScalarOp::Scale, false) => Ok(poly * scalar),
        (ScalarOp::Shift, false) => Ok(poly + scalar),
    }
}

pub fn execute<W: Write>(
    out: &mut W,
    op: ScalarOp,
    poly: &Polynomial,
    scalar: Coeff,
    checked: bool,
) -> Result<()> {
    let result = apply(op, poly, scalar, checked)?;
    info!(?op, scalar, degree = result.degree(), "computed");
    result.print(out)?;
    Ok(())
}
