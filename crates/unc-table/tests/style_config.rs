//! Integration tests for unc-table: YAML-configured tables.

use unc_table::{Cell, Table, TableStyle};

#[test]
fn style_from_yaml() {
    let yaml = "widths: [6, 10]\nfloat_format: .3g\n";
    let style: TableStyle = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(style.widths, Some(vec![6, 10]));

    let mut table = Table::new(["name", "x"]).with_style(&style).unwrap();
    table
        .push_row(vec![Cell::from("pi"), Cell::from(std::f64::consts::PI)])
        .unwrap();
    let rendered = table.render();
    assert!(rendered.contains("│     pi │       3.14 │"), "{rendered}");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let style: TableStyle = serde_yaml::from_str("{}").unwrap();
    assert_eq!(style, TableStyle::default());
    assert_eq!(style.float_format, ".5g");
}
