// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Operator implementations for [`Polynomial`].
//!
//! Every operator is a pure function of its operands and returns a fresh
//! polynomial. Coefficients use plain `i64` arithmetic, so overflow behaves
//! like it does for primitive integers, including the `i64::MIN / -1`
//! leading-coefficient division inside `%`, which panics in release builds
//! too; use the `checked_*` methods on [`Polynomial`] to get an error instead.

use crate::polynomial::{Coeff, Polynomial};
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl $imp<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$inner(rhs)
            }
        }

        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$inner(&rhs)
            }
        }

        impl $imp<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$inner(rhs)
            }
        }

        impl $imp<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$inner(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_poly);
forward_binop!(Sub, sub, sub_poly);
forward_binop!(Mul, mul, mul_poly);
forward_binop!(Rem, rem, rem_poly);

macro_rules! forward_scalar_op {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl $imp<Coeff> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, scalar: Coeff) -> Polynomial {
                self.$inner(scalar)
            }
        }

        impl $imp<Coeff> for Polynomial {
            type Output = Polynomial;

            fn $method(self, scalar: Coeff) -> Polynomial {
                self.$inner(scalar)
            }
        }

        // scalar-first forms commute onto the polynomial-first ones
        impl $imp<&Polynomial> for Coeff {
            type Output = Polynomial;

            fn $method(self, poly: &Polynomial) -> Polynomial {
                poly.$inner(self)
            }
        }

        impl $imp<Polynomial> for Coeff {
            type Output = Polynomial;

            fn $method(self, poly: Polynomial) -> Polynomial {
                poly.$inner(self)
            }
        }
    };
}

forward_scalar_op!(Add, add, add_scalar);
forward_scalar_op!(Mul, mul, mul_scalar);

macro_rules! forward_assign_op {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl $imp<&Polynomial> for Polynomial {
            fn $method(&mut self, rhs: &Polynomial) {
                *self = self.$inner(rhs);
            }
        }

        impl $imp<Polynomial> for Polynomial {
            fn $method(&mut self, rhs: Polynomial) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

forward_assign_op!(AddAssign, add_assign, add_poly);
forward_assign_op!(SubAssign, sub_assign, sub_poly);
forward_assign_op!(MulAssign, mul_assign, mul_poly);

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_poly()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_poly()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1)
    }
}
