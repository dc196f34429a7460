//! Sparse single-variable polynomial with `i64` coefficients.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::io;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponent of the variable in a single term.
pub type Power = usize;

/// Integer multiplier of a single term.
pub type Coeff = i64;

/// A polynomial stored as a sparse map from power to coefficient.
///
/// The map is ordered by ascending power and never holds a zero coefficient,
/// so the zero polynomial is exactly the empty map. Constructors and
/// arithmetic routines drop zero entries through `normalized`, which also
/// makes the derived equality structural.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "BTreeMap<Power, Coeff>", into = "BTreeMap<Power, Coeff>")
)]
pub struct Polynomial {
    terms: BTreeMap<Power, Coeff>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, coeff) in self.terms.iter().rev() {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "{coeff}x^{power}")?;
        }

        Ok(())
    }
}

impl From<BTreeMap<Power, Coeff>> for Polynomial {
    fn from(terms: BTreeMap<Power, Coeff>) -> Self {
        Self::normalized(terms)
    }
}

impl From<Polynomial> for BTreeMap<Power, Coeff> {
    fn from(poly: Polynomial) -> Self {
        poly.terms
    }
}

impl FromIterator<(Power, Coeff)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Power, Coeff)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates a polynomial from `(power, coefficient)` pairs.
    ///
    /// Pairs sharing a power are summed and zero coefficients are dropped,
    /// so the pairs may arrive in any order.
    ///
    /// # Arguments
    ///
    /// * `terms` - Iterator of `(power, coefficient)` pairs.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Power, Coeff)>,
    {
        let mut acc = BTreeMap::new();
        for (power, coeff) in terms {
            *acc.entry(power).or_insert(0) += coeff;
        }
        Self::normalized(acc)
    }

    /// Creates the single term `coeff * x^power`.
    pub fn monomial(power: Power, coeff: Coeff) -> Self {
        Self::from_terms([(power, coeff)])
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: Coeff) -> Self {
        Self::monomial(0, constant)
    }

    /// Creates the polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(1, 1)
    }

    /// Creates a polynomial from dense coefficients, lowest power first.
    ///
    /// `[1, 0, -1]` is `1 - x^2`.
    pub fn from_ascending_coefficients(coefficients: &[Coeff]) -> Self {
        Self::from_terms(coefficients.iter().copied().enumerate())
    }

    /// Creates a polynomial from dense coefficients, highest power first.
    ///
    /// `[1, 0, -1]` is `x^2 - 1`.
    pub fn from_descending_coefficients(coefficients: &[Coeff]) -> Self {
        Self::from_terms(coefficients.iter().rev().copied().enumerate())
    }

    /// Converts the polynomial to dense coefficients, lowest power first.
    ///
    /// The vector has `degree + 1` entries, or none for the zero polynomial.
    /// The allocation grows with the degree, not with the number of terms.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Overflow` if `degree + 1` entries cannot be
    /// counted or allocated.
    pub fn to_ascending_coefficients(&self) -> Result<Vec<Coeff>, PolynomialError> {
        if self.terms.is_empty() {
            return Ok(Vec::new());
        }
        let len = self
            .degree()
            .checked_add(1)
            .ok_or_else(|| PolynomialError::overflow("dense conversion"))?;
        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(len)
            .map_err(|_| PolynomialError::overflow("dense conversion"))?;
        coefficients.resize(len, 0);
        for (&power, &coeff) in &self.terms {
            coefficients[power] = coeff;
        }
        Ok(coefficients)
    }

    pub(crate) fn normalized(mut terms: BTreeMap<Power, Coeff>) -> Self {
        terms.retain(|_, coeff| *coeff != 0);
        Self { terms }
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> Power {
        self.terms.keys().next_back().copied().unwrap_or(0)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of stored (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Same as [`Polynomial::is_zero`]; pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient at `power`, 0 when the term is absent.
    pub fn coefficient(&self, power: Power) -> Coeff {
        self.terms.get(&power).copied().unwrap_or(0)
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    pub fn leading_coefficient(&self) -> Option<Coeff> {
        self.terms.values().next_back().copied()
    }

    /// Returns the highest-power term as `(power, coefficient)`.
    pub fn leading_term(&self) -> Option<(Power, Coeff)> {
        self.terms
            .iter()
            .next_back()
            .map(|(&power, &coeff)| (power, coeff))
    }

    /// Iterates over the stored terms in ascending power.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (Power, Coeff)> + '_ {
        self.terms.iter().map(|(&power, &coeff)| (power, coeff))
    }

    /// Returns the terms in descending power, skipping zero coefficients.
    ///
    /// The zero polynomial yields the single pair `(0, 0)`, so callers always
    /// see at least one term.
    pub fn canonical_form(&self) -> Vec<(Power, Coeff)> {
        let mut form: Vec<(Power, Coeff)> = self
            .terms()
            .rev()
            .filter(|&(_, coeff)| coeff != 0)
            .collect();
        if form.is_empty() {
            form.push((0, 0));
        }
        form
    }

    /// Writes the polynomial followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the sink fails.
    pub fn print<W: io::Write>(&self, out: &mut W) -> Result<(), PolynomialError> {
        writeln!(out, "{self}")?;
        Ok(())
    }

    /// Evaluates the polynomial at `x` with Horner's rule.
    ///
    /// Works in arbitrary precision so the result never overflows. Gaps
    /// between sparse powers are bridged with a single exponentiation, so the
    /// cost and the size of the result grow with the degree itself, not with
    /// the number of terms: a term like `x^(1 << 40)` at `x = 2` needs a
    /// 2^40-bit integer.
    pub fn evaluate(&self, x: Coeff) -> BigInt {
        let x = BigInt::from(x);
        let mut result = BigInt::zero();
        let mut current = self.degree();
        for (power, coeff) in self.terms().rev() {
            result = result * num_traits::pow(x.clone(), current - power) + coeff;
            current = power;
        }
        result * num_traits::pow(x, current)
    }

    pub(crate) fn add_poly(&self, rhs: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &rhs.terms {
            *terms.entry(power).or_insert(0) += coeff;
        }
        Self::normalized(terms)
    }

    pub(crate) fn sub_poly(&self, rhs: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &rhs.terms {
            *terms.entry(power).or_insert(0) -= coeff;
        }
        Self::normalized(terms)
    }

    /// Discrete convolution of the two term maps.
    pub(crate) fn mul_poly(&self, rhs: &Self) -> Self {
        let mut terms = BTreeMap::new();
        for (&p1, &c1) in &self.terms {
            for (&p2, &c2) in &rhs.terms {
                *terms.entry(p1 + p2).or_insert(0) += c1 * c2;
            }
        }
        Self::normalized(terms)
    }

    pub(crate) fn add_scalar(&self, scalar: Coeff) -> Self {
        let mut terms = self.terms.clone();
        *terms.entry(0).or_insert(0) += scalar;
        Self::normalized(terms)
    }

    pub(crate) fn mul_scalar(&self, scalar: Coeff) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(&power, &coeff)| (power, coeff * scalar))
            .collect();
        Self::normalized(terms)
    }

    pub(crate) fn neg_poly(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(&power, &coeff)| (power, -coeff))
                .collect(),
        }
    }

    /// Remainder of long division; a zero divisor yields the zero polynomial.
    ///
    /// Leading coefficients are divided with plain `i64` division, so
    /// `i64::MIN / -1` panics like it does for primitive integers, in release
    /// builds too. `checked_rem` reports it as `PolynomialError::Overflow`.
    pub(crate) fn rem_poly(&self, divisor: &Self) -> Self {
        if divisor.is_zero() {
            debug!("remainder by zero polynomial, returning zero");
            return Self::new();
        }
        let result = self.long_division_remainder::<Infallible>(
            divisor,
            |lead, divisor_lead| Ok(lead / divisor_lead),
            |dividend, term| Ok(dividend.sub_poly(&term.mul_poly(divisor))),
        );
        match result {
            Ok(remainder) => remainder,
            Err(never) => match never {},
        }
    }

    /// Runs the long division loop against a non-zero divisor.
    ///
    /// Each step divides the leading coefficients with truncation, builds the
    /// monomial quotient term and subtracts `term * divisor` from the running
    /// dividend. The loop stops once the dividend is zero, its degree drops
    /// below the divisor's, or the truncated quotient is 0. The last case only
    /// happens when leading coefficients do not divide evenly, and the
    /// dividend returned then still has degree >= the divisor's.
    fn long_division_remainder<E>(
        &self,
        divisor: &Self,
        mut quotient: impl FnMut(Coeff, Coeff) -> Result<Coeff, E>,
        mut reduce: impl FnMut(&Self, &Self) -> Result<Self, E>,
    ) -> Result<Self, E> {
        let Some((divisor_degree, divisor_lead)) = divisor.leading_term() else {
            return Ok(Self::new());
        };

        let mut dividend = self.clone();
        while let Some((degree, lead)) = dividend.leading_term() {
            if degree < divisor_degree {
                break;
            }
            let coeff = quotient(lead, divisor_lead)?;
            if coeff == 0 {
                debug!(degree, lead, divisor_lead, "inexact leading division, stopping");
                break;
            }
            let power = degree - divisor_degree;
            trace!(power, coeff, "long division step");
            let term = Self::monomial(power, coeff);
            dividend = reduce(&dividend, &term)?;
        }

        Ok(dividend)
    }

    /// Adds two polynomials, failing on coefficient overflow.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &rhs.terms {
            let slot = terms.entry(power).or_insert(0);
            *slot = slot
                .checked_add(coeff)
                .ok_or_else(|| PolynomialError::overflow("addition"))?;
        }
        Ok(Self::normalized(terms))
    }

    /// Subtracts `rhs` from `self`, failing on coefficient overflow.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &rhs.terms {
            let slot = terms.entry(power).or_insert(0);
            *slot = slot
                .checked_sub(coeff)
                .ok_or_else(|| PolynomialError::overflow("subtraction"))?;
        }
        Ok(Self::normalized(terms))
    }

    /// Multiplies two polynomials, failing on coefficient or power overflow.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        let mut terms = BTreeMap::new();
        for (&p1, &c1) in &self.terms {
            for (&p2, &c2) in &rhs.terms {
                let power = p1
                    .checked_add(p2)
                    .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
                let product = c1
                    .checked_mul(c2)
                    .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
                let slot = terms.entry(power).or_insert(0);
                *slot = product
                    .checked_add(*slot)
                    .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
            }
        }
        Ok(Self::normalized(terms))
    }

    /// Adds `scalar` to the constant term, failing on overflow.
    pub fn checked_scalar_add(&self, scalar: Coeff) -> Result<Self, PolynomialError> {
        let mut terms = self.terms.clone();
        let slot = terms.entry(0).or_insert(0);
        *slot = slot
            .checked_add(scalar)
            .ok_or_else(|| PolynomialError::overflow("scalar addition"))?;
        Ok(Self::normalized(terms))
    }

    /// Multiplies every coefficient by `scalar`, failing on overflow.
    pub fn checked_scalar_mul(&self, scalar: Coeff) -> Result<Self, PolynomialError> {
        let terms = self
            .terms
            .iter()
            .map(|(&power, &coeff)| {
                coeff
                    .checked_mul(scalar)
                    .map(|c| (power, c))
                    .ok_or_else(|| PolynomialError::overflow("scalar multiplication"))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self::normalized(terms))
    }

    /// Remainder of long division by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero and
    /// `PolynomialError::Overflow` if any intermediate step overflows.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        self.long_division_remainder(
            divisor,
            |lead, divisor_lead| {
                lead.checked_div(divisor_lead)
                    .ok_or_else(|| PolynomialError::overflow("remainder"))
            },
            |dividend, term| dividend.checked_sub(&term.checked_mul(divisor)?),
        )
    }
}
