// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::arith::{self, BinaryOp};
use crate::helpers::parse_polynomial;
use crate::helpers::telemetry::setup_simple_tracing;
use crate::scalar::{self, ScalarOp};
use crate::{canonical, eval};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use intpoly::{Coeff, Polynomial};
use std::io::{self, Write};
use tracing::{debug, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "intpoly")]
#[command(about = "Arithmetic on single-variable polynomials with integer coefficients", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `intpoly -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Fail on coefficient overflow and on division by the zero polynomial
    #[arg(long, global = true)]
    checked: bool,
}

/// Two polynomial operands, each a comma separated coefficient list with the
/// highest power first (`1,0,-1` is `x^2 - 1`).
#[derive(Args, Debug, Clone)]
pub struct Operands {
    /// Left operand
    #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
    lhs: Polynomial,

    /// Right operand
    #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
    rhs: Polynomial,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two polynomials
    Add(Operands),

    /// Subtract rhs from lhs
    Sub(Operands),

    /// Multiply two polynomials
    Mul(Operands),

    /// Remainder of the long division of lhs by rhs
    Rem(Operands),

    /// Multiply every coefficient by a scalar
    Scale {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,

        #[arg(long, allow_hyphen_values = true)]
        by: Coeff,
    },

    /// Add a scalar to the constant term
    Shift {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,

        #[arg(long, allow_hyphen_values = true)]
        by: Coeff,
    },

    /// Evaluate a polynomial at a point
    Eval {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,

        #[arg(long, allow_hyphen_values = true)]
        at: Coeff,
    },

    /// Print the canonical (power, coefficient) pairs of a polynomial
    Canonical {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,
    },
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }

    #[instrument(skip_all)]
    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        debug!(command = ?self.command, checked = self.checked, "executing");
        let checked = self.checked;

        match self.command {
            Commands::Add(ops) => arith::execute(out, BinaryOp::Add, &ops.lhs, &ops.rhs, checked)?,
            Commands::Sub(ops) => arith::execute(out, BinaryOp::Sub, &ops.lhs, &ops.rhs, checked)?,
            Commands::Mul(ops) => arith::execute(out, BinaryOp::Mul, &ops.lhs, &ops.rhs, checked)?,
            Commands::Rem(ops) => arith::execute(out, BinaryOp::Rem, &ops.lhs, &ops.rhs, checked)?,
            Commands::Scale { poly, by } => {
                scalar::execute(out, ScalarOp::Scale, &poly, by, checked)?
            }
            Commands::Shift { poly, by } => {
                scalar::execute(out, ScalarOp::Shift, &poly, by, checked)?
            }
            Commands::Eval { poly, at } => eval::execute(out, &poly, at)?,
            Commands::Canonical { poly } => canonical::execute(out, &poly)?,
        }

        Ok(())
    }
}
