// crates/shared-kernel/src/value_objects/mod.rs
pub mod attribute;
pub mod attribute_value;

pub use attribute::Attribute;
pub use attribute_value::{AttributeValue, ValueKind};
