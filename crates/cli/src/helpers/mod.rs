// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use intpoly::{Coeff, Polynomial};

pub mod telemetry;

/// Parse a comma separated coefficient list, highest power first.
///
/// `1,0,-1` is `x^2 - 1`. Whitespace around entries is ignored.
pub fn parse_polynomial(s: &str) -> Result<Polynomial> {
    Ok(Polynomial::from_descending_coefficients(&parse_coefficients(s)?))
}

fn parse_coefficients(s: &str) -> Result<Vec<Coeff>> {
    if s.trim().is_empty() {
        bail!("coefficient list must not be empty");
    }
    s.split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<Coeff>()
                .with_context(|| format!("invalid coefficient '{entry}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_descending_list() {
        let poly = parse_polynomial("1, 0,-1").unwrap();
        assert_eq!(poly.canonical_form(), vec![(2, 1), (0, -1)]);
    }

    #[test]
    fn all_zero_list_is_zero_polynomial() {
        assert!(parse_polynomial("0,0,0").unwrap().is_zero());
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(parse_polynomial("").is_err());
        assert!(parse_polynomial("1,x,2").is_err());
        assert!(parse_polynomial("1,,2").is_err());
        assert!(parse_polynomial("99999999999999999999").is_err());
    }
}
