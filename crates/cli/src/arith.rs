// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use intpoly::{Polynomial, PolynomialError};
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Rem,
}

pub fn apply(
    op: BinaryOp,
    lhs: &Polynomial,
    rhs: &Polynomial,
    checked: bool,
) -> Result<Polynomial, PolynomialError> {
    if checked {
        return match op {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Rem => lhs.checked_rem(rhs),
        };
    }

    Ok(match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Rem => lhs % rhs,
    })
}

pub fn execute<W: Write>(
    out: &mut W,
    op: BinaryOp,
    lhs: &Polynomial,
    rhs: &Polynomial,
    checked: bool,
) -> Result<()> {
    let result = apply(op, lhs, rhs, checked)?;
    info!(?op, degree = result.degree(), terms = result.len(), "computed");
    result.print(out)?;
    Ok(())
}
