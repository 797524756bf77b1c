// crates/domain/src/model/entities/visitor_profile.rs
use serde::{Deserialize, Serialize};
use slide_access_shared_kernel::{Attribute, AttributeValue};

/// Visitor data as supplied by the caller. Nothing is validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorProfile {
    name: String,
    age: AttributeValue,
    weight: AttributeValue,
    height: AttributeValue,
}

impl VisitorProfile {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<AttributeValue>,
        weight: impl Into<AttributeValue>,
        height: impl Into<AttributeValue>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            weight: weight.into(),
            height: height.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn age(&self) -> &AttributeValue {
        &self.age
    }

    #[inline]
    pub const fn weight(&self) -> &AttributeValue {
        &self.weight
    }

    #[inline]
    pub const fn height(&self) -> &AttributeValue {
        &self.height
    }

    pub const fn attribute(&self, attribute: Attribute) -> &AttributeValue {
        match attribute {
            Attribute::Age => &self.age,
            Attribute::Weight => &self.weight,
            Attribute::Height => &self.height,
        }
    }
}
