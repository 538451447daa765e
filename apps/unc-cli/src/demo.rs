//! Validation tables printed by `unc demo`.

use unc_core::{Quantity, exp, pow};
use unc_table::{Cell, Table, TableResult, TableStyle};

const HEADERS: [&str; 3] = [" ", "Value", "Uncertainty"];

fn row(label: &str, q: Quantity) -> Vec<Cell> {
    vec![label.into(), q.value().into(), q.uncertainty().into()]
}

fn build(style: &TableStyle, rows: Vec<(&str, Quantity)>) -> TableResult<Table> {
    let mut table = Table::new(HEADERS).with_style(style)?;
    for (label, q) in rows {
        table.push_row(row(label, q))?;
    }
    Ok(table)
}

/// Operations between two quantities.
pub fn quantity_table(style: &TableStyle) -> TableResult<Table> {
    let a = Quantity::new(1.0, 0.5);
    let b = Quantity::new(3.0, 1.2);
    build(
        style,
        vec![
            ("a", a),
            ("b", b),
            ("a+b", a + b),
            ("a-b", a - b),
            ("a*b", a * b),
            ("a/b", a / b),
            ("b/a", b / a),
            ("a**b", a.pow(b)),
            ("exp(a)", exp(a)),
            ("(a+b)-b", (a + b) - b),
            ("(a*b)/b", (a * b) / b),
        ],
    )
}

/// A quantity combined with a plain number, in both operand orders.
pub fn scalar_table(style: &TableStyle) -> TableResult<Table> {
    let c = Quantity::new(3.0, 2.0);
    build(
        style,
        vec![
            ("c", c),
            ("4+c", 4.0 + c),
            ("c+4", c + 4.0),
            ("4-c", 4.0 - c),
            ("c-4", c - 4.0),
            ("4*c", 4.0 * c),
            ("c*4", c * 4.0),
            ("4/c", 4.0 / c),
            ("c/4", c / 4.0),
            ("4**c", pow(4.0, c)),
            ("c**4", c.pow(4.0)),
        ],
    )
}
