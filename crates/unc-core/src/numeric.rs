use crate::UncError;

/// Floating point type for values and uncertainties.
pub type Real = f64;

/// Absolute and relative slack for comparing propagated results, which
/// rarely round-trip bit-exactly (`(a * b) / b` vs `a`).
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

/// True when `a` and `b` differ by at most `tol.abs`, or by at most
/// `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, UncError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(UncError::NonFinite { what, value: v })
    }
}

/// Quadrature sum `sqrt(x² + y²)`.
#[inline]
pub fn quadrature(x: Real, y: Real) -> Real {
    (x * x + y * y).sqrt()
}
