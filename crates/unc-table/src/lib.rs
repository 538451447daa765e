//! unc-table: plain-text rendering of result tables and numeric matrices.

pub mod error;
pub mod matrix;
pub mod table;

pub use error::{TableError, TableResult};
pub use matrix::{format_matrix, parse_matrix, print_matrix};
pub use table::{Cell, Table, TableStyle};
