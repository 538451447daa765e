//! unc-core: values with one-sigma uncertainty and their propagation rules.
//!
//! Contains:
//! - quantity (the `Quantity` value type + operator impls)
//! - propagate (the closed-form propagation formulas)
//! - checked (validating variants of every operation)
//! - numfmt (printf-style number rendering)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod checked;
pub mod error;
pub mod numfmt;
pub mod numeric;
pub mod propagate;
pub mod quantity;

// Re-exports: nice ergonomics for downstream crates
pub use checked::{Operation, apply};
pub use error::{UncError, UncResult};
pub use numfmt::NumFormat;
pub use numeric::*;
pub use quantity::{Quantity, add, div, exp, mul, pow, sub};
