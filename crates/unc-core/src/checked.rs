//! Validating variants of the quantity operations.
//!
//! The operators in [`crate::quantity`] never fail: domain violations come
//! back as inf/NaN. The functions here reject the same inputs up front with
//! an [`UncError::Domain`] and check every result is finite.

use std::fmt;
use std::str::FromStr;

use crate::error::{UncError, UncResult};
use crate::numeric::{Real, ensure_finite};
use crate::quantity::{self, Quantity};

/// Binary operations, named for error messages and dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Pow => "pow",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Pow => "**",
        }
    }

    /// The permissive operator form.
    pub fn eval(self, a: Quantity, b: Quantity) -> Quantity {
        match self {
            Operation::Add => quantity::add(a, b),
            Operation::Sub => quantity::sub(a, b),
            Operation::Mul => quantity::mul(a, b),
            Operation::Div => quantity::div(a, b),
            Operation::Pow => quantity::pow(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| s.eq_ignore_ascii_case(op.name()) || s == op.symbol())
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

impl Quantity {
    /// Construct, rejecting non-finite fields and negative uncertainty.
    pub fn validated(value: Real, uncertainty: Real) -> UncResult<Quantity> {
        ensure_finite(value, "value")?;
        ensure_finite(uncertainty, "uncertainty")?;
        if uncertainty < 0.0 {
            return Err(UncError::NegativeUncertainty { value: uncertainty });
        }
        Ok(Quantity::new(value, uncertainty))
    }
}

fn check_result(q: Quantity) -> UncResult<Quantity> {
    ensure_finite(q.value(), "result value")?;
    ensure_finite(q.uncertainty(), "result uncertainty")?;
    Ok(q)
}

fn domain(op: Operation, reason: &'static str) -> UncError {
    tracing::debug!(op = op.name(), reason, "rejected operand");
    UncError::Domain {
        op: op.name(),
        reason,
    }
}

fn nonzero_operands(op: Operation, a: &Quantity, b: &Quantity) -> UncResult<()> {
    if a.value() == 0.0 || b.value() == 0.0 {
        return Err(domain(op, "zero-valued operand in relative uncertainty"));
    }
    Ok(())
}

pub fn try_add(a: impl Into<Quantity>, b: impl Into<Quantity>) -> UncResult<Quantity> {
    check_result(quantity::add(a, b))
}

pub fn try_sub(a: impl Into<Quantity>, b: impl Into<Quantity>) -> UncResult<Quantity> {
    check_result(quantity::sub(a, b))
}

pub fn try_mul(a: impl Into<Quantity>, b: impl Into<Quantity>) -> UncResult<Quantity> {
    let (a, b) = (a.into(), b.into());
    nonzero_operands(Operation::Mul, &a, &b)?;
    check_result(quantity::mul(a, b))
}

pub fn try_div(a: impl Into<Quantity>, b: impl Into<Quantity>) -> UncResult<Quantity> {
    let (a, b) = (a.into(), b.into());
    nonzero_operands(Operation::Div, &a, &b)?;
    check_result(quantity::div(a, b))
}

pub fn try_pow(base: impl Into<Quantity>, exponent: impl Into<Quantity>) -> UncResult<Quantity> {
    let (a, b) = (base.into(), exponent.into());
    if a.value() == 0.0 {
        return Err(domain(Operation::Pow, "zero base"));
    }
    if b.uncertainty() != 0.0 && a.value() < 0.0 {
        return Err(domain(
            Operation::Pow,
            "non-positive base with uncertain exponent",
        ));
    }
    if a.value() < 0.0 && b.value().fract() != 0.0 {
        return Err(domain(
            Operation::Pow,
            "negative base with non-integer exponent",
        ));
    }
    check_result(a.pow(b))
}

pub fn try_exp(x: impl Into<Quantity>) -> UncResult<Quantity> {
    check_result(quantity::exp(x))
}

/// Dispatch a binary operation through its checked variant.
pub fn apply(op: Operation, a: Quantity, b: Quantity) -> UncResult<Quantity> {
    match op {
        Operation::Add => try_add(a, b),
        Operation::Sub => try_sub(a, b),
        Operation::Mul => try_mul(a, b),
        Operation::Div => try_div(a, b),
        Operation::Pow => try_pow(a, b),
    }
}
