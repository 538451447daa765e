//! The `Quantity` value type: a central value with its one-sigma absolute
//! uncertainty.
//!
//! Operands are treated as statistically independent. Plain `f64` operands
//! are promoted through [`Quantity::from_scalar`] on either side of an
//! operator, so `q - 4.0` and `4.0 - q` are `q - Quantity(4, 0)` and
//! `Quantity(4, 0) - q`.
//!
//! Operators are permissive: a zero-valued operand in a product, quotient or
//! power produces inf/NaN instead of an error. See [`crate::checked`] for the
//! validating variants.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::numeric::Real;
use crate::numfmt;
use crate::propagate;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: Real,
    uncertainty: Real,
}

impl Quantity {
    /// Store `value` and `uncertainty` verbatim. No validation is done; use
    /// [`Quantity::validated`] to reject negative or non-finite input.
    #[inline]
    pub const fn new(value: Real, uncertainty: Real) -> Self {
        Self { value, uncertainty }
    }

    /// A value known without uncertainty.
    #[inline]
    pub const fn exact(value: Real) -> Self {
        Self::new(value, 0.0)
    }

    /// Promote a plain number to a zero-uncertainty quantity. Every mixed
    /// `f64`/`Quantity` operation goes through here, for both operand orders.
    #[inline]
    pub const fn from_scalar(value: Real) -> Self {
        Self::exact(value)
    }

    #[inline]
    pub const fn value(&self) -> Real {
        self.value
    }

    #[inline]
    pub const fn uncertainty(&self) -> Real {
        self.uncertainty
    }

    /// `self ^ exponent`.
    pub fn pow(self, exponent: impl Into<Quantity>) -> Quantity {
        let b = exponent.into();
        let value = self.value.powf(b.value);
        Quantity::new(value, propagate::power_uncertainty(&self, &b, value))
    }

    /// `e ^ self`.
    pub fn exp(self) -> Quantity {
        let value = self.value.exp();
        Quantity::new(value, propagate::exp_uncertainty(&self, value))
    }

    /// Both fields in C-style scientific notation, `nv` decimals for the
    /// value and `nu` for the uncertainty: `"1.00E+00  5.0E-01"`.
    pub fn to_sci(&self, nv: usize, nu: usize) -> String {
        format!(
            "{}  {}",
            numfmt::sci(self.value, nv, true),
            numfmt::sci(self.uncertainty, nu, true)
        )
    }
}

impl From<Real> for Quantity {
    fn from(value: Real) -> Self {
        Quantity::from_scalar(value)
    }
}

impl From<(Real, Real)> for Quantity {
    fn from((value, uncertainty): (Real, Real)) -> Self {
        Quantity::new(value, uncertainty)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {})", self.value, self.uncertainty)
    }
}

/// `a + b`, either side promoted if it is a plain number.
pub fn add(a: impl Into<Quantity>, b: impl Into<Quantity>) -> Quantity {
    let (a, b) = (a.into(), b.into());
    Quantity::new(a.value + b.value, propagate::sum_uncertainty(&a, &b))
}

/// `a - b`. The uncertainty is the same as for `a + b`.
pub fn sub(a: impl Into<Quantity>, b: impl Into<Quantity>) -> Quantity {
    let (a, b) = (a.into(), b.into());
    Quantity::new(a.value - b.value, propagate::sum_uncertainty(&a, &b))
}

/// `a * b`.
pub fn mul(a: impl Into<Quantity>, b: impl Into<Quantity>) -> Quantity {
    let (a, b) = (a.into(), b.into());
    let value = a.value * b.value;
    Quantity::new(value, propagate::product_uncertainty(&a, &b, value))
}

/// `a / b`.
pub fn div(a: impl Into<Quantity>, b: impl Into<Quantity>) -> Quantity {
    let (a, b) = (a.into(), b.into());
    let value = a.value / b.value;
    Quantity::new(value, propagate::product_uncertainty(&a, &b, value))
}

/// `base ^ exponent`. Rust has no power operator, so this is also the
/// reflected form: `pow(4.0, q)`.
pub fn pow(base: impl Into<Quantity>, exponent: impl Into<Quantity>) -> Quantity {
    base.into().pow(exponent)
}

/// `e ^ x`.
pub fn exp(x: impl Into<Quantity>) -> Quantity {
    x.into().exp()
}

macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $func:ident) => {
        impl $Trait for Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Quantity) -> Quantity {
                $func(self, rhs)
            }
        }

        impl $Trait<&Quantity> for Quantity {
            type Output = Quantity;
            fn $method(self, rhs: &Quantity) -> Quantity {
                $func(self, *rhs)
            }
        }

        impl $Trait<Quantity> for &Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Quantity) -> Quantity {
                $func(*self, rhs)
            }
        }

        impl $Trait<&Quantity> for &Quantity {
            type Output = Quantity;
            fn $method(self, rhs: &Quantity) -> Quantity {
                $func(*self, *rhs)
            }
        }

        impl $Trait<Real> for Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Real) -> Quantity {
                $func(self, Quantity::from_scalar(rhs))
            }
        }

        impl $Trait<Real> for &Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Real) -> Quantity {
                $func(*self, Quantity::from_scalar(rhs))
            }
        }

        impl $Trait<Quantity> for Real {
            type Output = Quantity;
            fn $method(self, rhs: Quantity) -> Quantity {
                $func(Quantity::from_scalar(self), rhs)
            }
        }

        impl $Trait<&Quantity> for Real {
            type Output = Quantity;
            fn $method(self, rhs: &Quantity) -> Quantity {
                $func(Quantity::from_scalar(self), *rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    fn assert_close(actual: Quantity, value: Real, uncertainty: Real) {
        let tol = Tolerances {
            abs: 1e-4,
            rel: 1e-4,
        };
        assert!(
            nearly_equal(actual.value(), value, tol),
            "value {} != {}",
            actual.value(),
            value
        );
        assert!(
            nearly_equal(actual.uncertainty(), uncertainty, tol),
            "uncertainty {} != {}",
            actual.uncertainty(),
            uncertainty
        );
    }

    #[test]
    fn construction_is_verbatim() {
        let q = Quantity::new(2.0, -1.0);
        assert_eq!(q.value(), 2.0);
        assert_eq!(q.uncertainty(), -1.0);

        let nan = Quantity::new(1.0, Real::NAN);
        assert!(nan.uncertainty().is_nan());

        assert_eq!(Quantity::from(3.5), Quantity::new(3.5, 0.0));
        assert_eq!(Quantity::from((3.5, 0.1)), Quantity::new(3.5, 0.1));
    }

    #[test]
    fn basic_operations() {
        let a = Quantity::new(1.0, 0.5);
        let b = Quantity::new(3.0, 1.2);

        assert_close(a + b, 4.0, 1.3);
        assert_close(a - b, -2.0, 1.3);
        assert_close(a * b, 3.0, 1.9209);
        assert_close(a / b, 0.33333, 0.21344);
        assert_close(b / a, 3.0, 1.9209);
        assert_close(a.pow(b), 1.0, 1.5);
        assert_close(exp(a), 2.71828, 1.35914);
        assert_close((a + b) - b, 1.0, 1.7692);
        assert_close((a * b) / b, 1.0, 0.75498);
    }

    #[test]
    fn scalar_operands_in_both_orders() {
        let c = Quantity::new(3.0, 2.0);

        assert_close(4.0 + c, 7.0, 2.0);
        assert_close(c + 4.0, 7.0, 2.0);
        assert_close(4.0 - c, 1.0, 2.0);
        assert_close(c - 4.0, -1.0, 2.0);
        assert_close(4.0 * c, 12.0, 8.0);
        assert_close(c * 4.0, 12.0, 8.0);
        assert_close(4.0 / c, 1.3333, 0.88889);
        assert_close(c / 4.0, 0.75, 0.5);
        assert_close(pow(4.0, c), 64.0, 177.45);
        assert_close(c.pow(4.0), 81.0, 216.0);
    }

    #[test]
    fn reference_operands() {
        let a = Quantity::new(2.0, 0.1);
        let b = Quantity::new(5.0, 0.2);
        assert_eq!(&a + &b, a + b);
        assert_eq!(a - &b, a - b);
        assert_eq!(&a * b, a * b);
        assert_eq!(&a / 2.0, a / 2.0);
        assert_eq!(2.0 * &a, 2.0 * a);
    }

    #[test]
    fn free_functions_match_operators() {
        let a = Quantity::new(2.0, 0.1);
        let b = Quantity::new(5.0, 0.2);
        assert_eq!(add(a, b), a + b);
        assert_eq!(sub(4.0, b), 4.0 - b);
        assert_eq!(mul(a, 3.0), a * 3.0);
        assert_eq!(div(1.0, a), 1.0 / a);
        assert_eq!(pow(a, b), a.pow(b));
        assert_eq!(exp(1.0), Quantity::exact(1.0f64.exp()));
    }

    #[test]
    fn negative_products_keep_non_negative_uncertainty() {
        let a = Quantity::new(-2.0, 0.2);
        let b = Quantity::new(3.0, 0.3);
        let p = a * b;
        assert_eq!(p.value(), -6.0);
        assert!(p.uncertainty() > 0.0);
        assert_close(p, -6.0, 6.0 * (0.01f64 + 0.01).sqrt());

        let q = a / b;
        assert!(q.uncertainty() > 0.0);

        let r = a.pow(3.0);
        assert_close(r, -8.0, 8.0 * 0.3);
    }

    #[test]
    fn zero_operands_follow_ieee() {
        let zero = Quantity::new(0.0, 0.1);
        let b = Quantity::new(2.0, 0.1);
        assert!((zero * b).uncertainty().is_nan());
        assert!((b / Quantity::exact(0.0)).value().is_infinite());
        assert!((b * 0.0).uncertainty().is_nan());
    }

    #[test]
    fn display_renders_pair() {
        assert_eq!(Quantity::new(1.0, 0.5).to_string(), "( 1, 0.5)");
        assert_eq!(Quantity::new(-2.25, 1.0).to_string(), "( -2.25, 1)");
    }

    #[test]
    fn sci_rendering() {
        let q = Quantity::new(1.0, 0.5);
        assert_eq!(q.to_sci(2, 1), "1.00E+00  5.0E-01");
        let q = Quantity::new(-12345.678, 0.00123);
        assert_eq!(q.to_sci(3, 0), "-1.235E+04  1E-03");
    }
}
