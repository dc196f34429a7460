// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Property-based tests for polynomial arithmetic.

use crate::polynomial::{Coeff, Polynomial};
use proptest::prelude::*;

fn small_coeff() -> impl Strategy<Value = Coeff> {
    -50i64..50i64
}

// degree 0-7, a handful of terms
fn small_poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((0usize..8, small_coeff()), 0..6).prop_map(Polynomial::from_terms)
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

// Leading coefficient 1 keeps every long division step exact.
fn monic_poly() -> impl Strategy<Value = Polynomial> {
    (0usize..5, prop::collection::vec(small_coeff(), 0..5)).prop_map(|(degree, lower)| {
        let tail = lower
            .into_iter()
            .enumerate()
            .filter(|(power, _)| *power < degree);
        Polynomial::from_terms(tail) + Polynomial::monomial(degree, 1)
    })
}

proptest! {
    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }

    #[test]
    fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn zero_identities(a in small_poly()) {
        let zero = Polynomial::new();
        prop_assert_eq!(&a + &zero, a.clone());
        prop_assert!((&a * &zero).is_zero());
        prop_assert!((&a * 0i64).is_zero());
        prop_assert!((&a % &zero).is_zero());
        prop_assert_eq!(&a + 0i64, a);
    }

    #[test]
    fn subtraction_inverts_addition(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn scalar_forms_agree(a in small_poly(), k in small_coeff()) {
        prop_assert_eq!(&a + k, k + &a);
        prop_assert_eq!(&a * k, k * &a);
        prop_assert_eq!(&a * k, &a * &Polynomial::constant(k));
        prop_assert_eq!(&a + k, &a + &Polynomial::constant(k));
    }

    #[test]
    fn product_degree_is_sum(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn remainder_degree_below_divisor(a in small_poly(), d in monic_poly()) {
        let r = &a % &d;
        prop_assert!(r.is_zero() || r.degree() < d.degree());
    }

    #[test]
    fn multiple_of_divisor_leaves_no_remainder(a in small_poly(), d in monic_poly()) {
        prop_assert!((&(&a * &d) % &d).is_zero());
    }

    #[test]
    fn remainder_shares_residue(a in small_poly(), b in small_poly(), d in monic_poly()) {
        // a and a + b*d leave the same remainder
        prop_assert_eq!(&(&a + &(&b * &d)) % &d, &a % &d);
    }

    #[test]
    fn canonical_form_is_strictly_descending(a in small_poly()) {
        let form = a.canonical_form();
        prop_assert!(!form.is_empty());
        prop_assert!(form.windows(2).all(|w| w[0].0 > w[1].0));
        if a.is_zero() {
            prop_assert_eq!(form, vec![(0, 0)]);
        } else {
            prop_assert!(form.iter().all(|&(_, c)| c != 0));
        }
    }

    #[test]
    fn checked_matches_unchecked(a in small_poly(), b in small_poly(), k in small_coeff()) {
        prop_assert_eq!(a.checked_add(&b).unwrap(), &a + &b);
        prop_assert_eq!(a.checked_sub(&b).unwrap(), &a - &b);
        prop_assert_eq!(a.checked_mul(&b).unwrap(), &a * &b);
        prop_assert_eq!(a.checked_scalar_mul(k).unwrap(), &a * k);
        prop_assert_eq!(a.checked_scalar_add(k).unwrap(), &a + k);
    }

    #[test]
    fn evaluation_is_a_ring_homomorphism(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
        prop_assert_eq!((&a + &b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        prop_assert_eq!((&a * &b).evaluate(x), a.evaluate(x) * b.evaluate(x));
    }
}
