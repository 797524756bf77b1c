// crates/shared-kernel/tests/attribute_value_kind.rs
use slide_access_shared_kernel::{AttributeValue, ValueKind};

#[test]
fn kinds_follow_variant() {
    assert_eq!(AttributeValue::from(10).kind(), ValueKind::Int);
    assert_eq!(AttributeValue::from(10.5).kind(), ValueKind::Float);
    assert_eq!(AttributeValue::from("ten").kind(), ValueKind::Str);
    assert_eq!(AttributeValue::from(true).kind(), ValueKind::Bool);
    assert_eq!(AttributeValue::Null.kind(), ValueKind::Null);
}

#[test]
fn only_integers_have_an_integer_view() {
    assert_eq!(AttributeValue::from(42_i64).as_integer(), Some(42));
    assert_eq!(AttributeValue::from(30.0).as_integer(), None);
    assert_eq!(AttributeValue::from("30").as_integer(), None);
}

#[test]
fn kind_display_uses_short_names() {
    assert_eq!(ValueKind::Str.to_string(), "str");
    assert_eq!(ValueKind::Int.to_string(), "int");
}
