// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use intpoly::Polynomial;
use std::io::Write;

pub fn execute<W: Write>(out: &mut W, poly: &Polynomial) -> Result<()> {
    writeln!(out, "{:?}", poly.canonical_form())?;
    Ok(())
}
