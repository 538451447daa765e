//! Closed-form propagation rules for independent one-sigma uncertainties.
//!
//! Each function takes the operands (and, where the rule is scaled by the
//! result, the already-computed central value) and returns the absolute
//! uncertainty of the result. Nothing here validates its inputs: a zero
//! denominator yields inf/NaN exactly as IEEE arithmetic does. The checked
//! API in [`crate::checked`] guards the domains before calling in.

use crate::numeric::{Real, quadrature};
use crate::quantity::Quantity;

/// Relative uncertainty `u / value`. Intermediate only, never stored.
#[inline]
pub fn relative(q: &Quantity) -> Real {
    q.uncertainty() / q.value()
}

/// Absolute uncertainty of `a + b` and `a - b`.
#[inline]
pub fn sum_uncertainty(a: &Quantity, b: &Quantity) -> Real {
    quadrature(a.uncertainty(), b.uncertainty())
}

/// Combined relative uncertainty of `a * b` and `a / b`.
#[inline]
pub fn product_relative_uncertainty(a: &Quantity, b: &Quantity) -> Real {
    quadrature(relative(a), relative(b))
}

/// Absolute uncertainty of a product or quotient whose central value is `value`.
#[inline]
pub fn product_uncertainty(a: &Quantity, b: &Quantity, value: Real) -> Real {
    value.abs() * product_relative_uncertainty(a, b)
}

/// Absolute uncertainty of `a ^ b` whose central value is `value`.
///
/// `|value| * sqrt((ua * vb / va)² + (ub * ln va)²)`. The logarithmic term
/// only enters when the exponent is uncertain, so a negative base raised to
/// an exact power stays defined.
pub fn power_uncertainty(a: &Quantity, b: &Quantity, value: Real) -> Real {
    let base_term = a.uncertainty() * b.value() / a.value();
    let exponent_term = if b.uncertainty() == 0.0 {
        0.0
    } else {
        b.uncertainty() * a.value().ln()
    };
    value.abs() * quadrature(base_term, exponent_term)
}

/// Absolute uncertainty of `e^a` whose central value is `value`.
#[inline]
pub fn exp_uncertainty(a: &Quantity, value: Real) -> Real {
    value * a.uncertainty()
}
