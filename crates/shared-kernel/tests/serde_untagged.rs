// crates/shared-kernel/tests/serde_untagged.rs
use serde::{Deserialize, Serialize};
use slide_access_shared_kernel::{Attribute, AttributeValue};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    attribute: Attribute,
    value: AttributeValue,
}

#[test]
fn json_values_keep_their_type() {
    let int: AttributeValue = serde_json::from_str("10").expect("int");
    let float: AttributeValue = serde_json::from_str("10.5").expect("float");
    let text: AttributeValue = serde_json::from_str("\"ten\"").expect("text");
    let null: AttributeValue = serde_json::from_str("null").expect("null");

    assert_eq!(int, AttributeValue::Integer(10));
    assert_eq!(float, AttributeValue::Float(10.5));
    assert_eq!(text, AttributeValue::Text("ten".into()));
    assert_eq!(null, AttributeValue::Null);
}

#[test]
fn attribute_serializes_lowercase() {
    let original = Wrapper { attribute: Attribute::Height, value: AttributeValue::from(100) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"attribute":"height","value":100}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn oversized_json_integers_saturate() {
    let past_i64: AttributeValue = serde_json::from_str("9223372036854775808").expect("u64");
    let past_u64: AttributeValue = serde_json::from_str("99999999999999999999").expect("huge");
    let negative: AttributeValue = serde_json::from_str("-99999999999999999999").expect("huge");

    assert_eq!(past_i64, AttributeValue::Integer(i64::MAX));
    assert_eq!(past_u64, AttributeValue::Integer(i64::MAX));
    assert_eq!(negative, AttributeValue::Integer(i64::MIN));
}

#[test]
fn whole_floats_in_range_stay_floats() {
    let value: AttributeValue = serde_json::from_str("30.0").expect("float");
    assert_eq!(value, AttributeValue::Float(30.0));
}
