//! printf-style number rendering (`%g`, `%e`, `%f`).
//!
//! Rust's `{:e}` writes exponents as `e3`/`e-3`; tables and reports here use
//! the C convention `e+03`/`e-03`, and `%g` has no std equivalent at all.

use std::fmt;
use std::str::FromStr;

use crate::error::UncError;

pub const DEFAULT_PRECISION: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumKind {
    /// `g` / `G`: shortest of fixed and scientific, trailing zeros dropped.
    General { upper: bool },
    /// `e` / `E`
    Exponent { upper: bool },
    /// `f`
    Fixed,
}

/// A parsed format spec such as `"g"`, `".3f"` or `".2E"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumFormat {
    pub kind: NumKind,
    pub precision: usize,
}

impl Default for NumFormat {
    fn default() -> Self {
        Self {
            kind: NumKind::General { upper: false },
            precision: DEFAULT_PRECISION,
        }
    }
}

impl NumFormat {
    pub const fn general(precision: usize) -> Self {
        Self {
            kind: NumKind::General { upper: false },
            precision,
        }
    }

    pub fn format(&self, x: f64) -> String {
        match self.kind {
            NumKind::General { upper } => {
                let s = general(x, self.precision);
                if upper { s.to_uppercase() } else { s }
            }
            NumKind::Exponent { upper } => sci(x, self.precision, upper),
            NumKind::Fixed => fixed(x, self.precision),
        }
    }
}

impl FromStr for NumFormat {
    type Err = UncError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || UncError::InvalidFormat {
            spec: spec.to_string(),
        };

        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let (body, kind) = match trimmed.chars().last() {
            Some('g') => (&trimmed[..trimmed.len() - 1], NumKind::General { upper: false }),
            Some('G') => (&trimmed[..trimmed.len() - 1], NumKind::General { upper: true }),
            Some('e') => (&trimmed[..trimmed.len() - 1], NumKind::Exponent { upper: false }),
            Some('E') => (&trimmed[..trimmed.len() - 1], NumKind::Exponent { upper: true }),
            Some('f') | Some('F') => (&trimmed[..trimmed.len() - 1], NumKind::Fixed),
            _ => return Err(invalid()),
        };

        let precision = if body.is_empty() {
            DEFAULT_PRECISION
        } else {
            let digits = body.strip_prefix('.').ok_or_else(invalid)?;
            digits.parse::<usize>().map_err(|_| invalid())?
        };

        Ok(Self { kind, precision })
    }
}

impl fmt::Display for NumFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = match self.kind {
            NumKind::General { upper: false } => 'g',
            NumKind::General { upper: true } => 'G',
            NumKind::Exponent { upper: false } => 'e',
            NumKind::Exponent { upper: true } => 'E',
            NumKind::Fixed => 'f',
        };
        write!(f, ".{}{}", self.precision, ty)
    }
}

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Split Rust's `{:.*e}` output into mantissa and decimal exponent.
fn rust_sci(x: f64, digits: usize) -> (String, i32) {
    let s = format!("{:.*e}", digits, x);
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn c_exponent(exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{:02}", e, sign, exp.unsigned_abs())
}

/// `%.{digits}e` / `%.{digits}E`.
pub fn sci(x: f64, digits: usize, upper: bool) -> String {
    if !x.is_finite() {
        let s = non_finite(x);
        return if upper { s.to_uppercase() } else { s };
    }
    let (mantissa, exp) = rust_sci(x, digits);
    format!("{}{}", mantissa, c_exponent(exp, upper))
}

/// `%.{digits}f`.
pub fn fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    format!("{:.*}", digits, x)
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `%.{significant}g`: fixed notation when the exponent after rounding lies
/// in `-4..significant`, scientific otherwise, trailing zeros removed.
pub fn general(x: f64, significant: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    let p = significant.max(1);
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let (mantissa, exp) = rust_sci(x, p - 1);
    if exp < -4 || exp >= p as i32 {
        format!("{}{}", strip_trailing_zeros(&mantissa), c_exponent(exp, false))
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(&fixed(x, decimals)).to_string()
    }
}
