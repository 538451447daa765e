#![cfg(feature = "serde")]

use unc_core::{Operation, Quantity};

#[test]
fn quantity_serializes_as_named_fields() {
    let q = Quantity::new(1.5, 0.25);
    let json = serde_json::to_value(q).unwrap();
    assert_eq!(json, serde_json::json!({ "value": 1.5, "uncertainty": 0.25 }));

    let back: Quantity = serde_json::from_value(json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn operation_uses_lowercase_names() {
    let json = serde_json::to_string(&Operation::Pow).unwrap();
    assert_eq!(json, "\"pow\"");
}
