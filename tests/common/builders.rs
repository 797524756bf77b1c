// tests/common/builders.rs
use slide_access_domain::VisitorProfile;
use slide_access_shared_kernel::AttributeValue;

/// Builds visitors starting from values every children slide accepts.
pub struct VisitorBuilder {
    name: String,
    age: AttributeValue,
    weight: AttributeValue,
    height: AttributeValue,
}

impl VisitorBuilder {
    pub fn child(name: &str) -> Self {
        Self {
            name: name.to_string(),
            age: 10.into(),
            weight: 30.into(),
            height: 100.into(),
        }
    }

    pub fn adult(name: &str) -> Self {
        Self {
            name: name.to_string(),
            age: 30.into(),
            weight: 75.into(),
            height: 175.into(),
        }
    }

    pub fn age(mut self, age: impl Into<AttributeValue>) -> Self {
        self.age = age.into();
        self
    }

    pub fn weight(mut self, weight: impl Into<AttributeValue>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn height(mut self, height: impl Into<AttributeValue>) -> Self {
        self.height = height.into();
        self
    }

    pub fn build(self) -> VisitorProfile {
        VisitorProfile::new(self.name, self.age, self.weight, self.height)
    }
}
